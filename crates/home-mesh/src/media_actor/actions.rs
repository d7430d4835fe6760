use crate::media_actor::MediaError;
use device_actor::Reply;

#[derive(Debug)]
pub enum MediaMessage {
    PlayMovie {
        title: String,
        reply: Reply<Result<String, MediaError>>,
    },
    StopMovie {
        reply: Reply<Result<String, MediaError>>,
    },
    GetCurrentMovie {
        reply: Reply<Option<String>>,
    },
    /// Fired by the one-shot end timer of the play identified by `session`.
    MovieEnded { title: String, session: u64 },
}
