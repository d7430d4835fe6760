use crate::media_actor::{MediaError, MediaMessage, MediaStation};
use device_actor::DeviceClient;
use tracing::instrument;

crate::device_client!(
    /// Client for the media station.
    MediaClient,
    MediaStation,
    MediaError
);
crate::ask_methods!(MediaClient, MediaStation, MediaMessage, MediaError, [
    GetCurrentMovie => Option<String>,
]);
crate::try_ask_methods!(MediaClient, MediaStation, MediaMessage, MediaError, [
    StopMovie => String,
]);

impl MediaClient {
    #[instrument(skip(self))]
    pub async fn play_movie(&self, title: String) -> Result<String, MediaError> {
        self.ask(|reply| MediaMessage::PlayMovie { title, reply })
            .await
            .and_then(std::convert::identity)
    }
}
