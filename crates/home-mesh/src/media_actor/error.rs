use device_actor::FrameworkError;

/// Errors returned by the media station.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Movie '{0}' is already playing. Stop it first.")]
    AlreadyPlaying(String),
    #[error("No movie was playing")]
    NotPlaying,
    #[error("Media station unavailable: {0}")]
    Communication(#[from] FrameworkError),
}
