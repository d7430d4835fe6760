use crate::model::EnvironmentSource;
use device_actor::FrameworkError;

#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error("Cannot set environment values manually while the source is {0}")]
    NotManual(EnvironmentSource),
    #[error("Home supervisor unavailable: {0}")]
    Communication(#[from] FrameworkError),
}
