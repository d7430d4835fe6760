use crate::blinds_actor::{Blinds, BlindsMessage};
use crate::media_actor::{MediaError, MediaMessage};
use async_trait::async_trait;
use device_actor::{Device, DeviceRef, Scope};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
struct NowPlaying {
    title: String,
    session: u64,
}

/// Media station playing at most one movie at a time.
///
/// Every play schedules an uncancellable end timer. When it fires, the end is
/// honoured only if the same play is still running: both the title and the
/// play's session number must match, so a stale timer from an earlier play of
/// the same title is ignored too. The context is the blinds.
pub struct MediaStation {
    now_playing: Option<NowPlaying>,
    next_session: u64,
    movie_duration: Duration,
}

impl MediaStation {
    pub fn new(movie_duration: Duration) -> Self {
        Self {
            now_playing: None,
            next_session: 0,
            movie_duration,
        }
    }

    fn notify_blinds(blinds: &DeviceRef<Blinds>, playing: bool) {
        if let Err(e) = blinds.tell(BlindsMessage::MovieStateChange(playing)) {
            warn!(error = %e, playing, "Blinds unreachable");
        }
    }
}

#[async_trait]
impl Device for MediaStation {
    type Message = MediaMessage;
    type Context = DeviceRef<Blinds>;

    async fn handle(&mut self, message: MediaMessage, scope: &mut Scope<Self>, blinds: &DeviceRef<Blinds>) {
        match message {
            MediaMessage::PlayMovie { title, reply } => {
                if let Some(current) = &self.now_playing {
                    info!(requested = %title, playing = %current.title, "Movie already playing");
                    let _ = reply.send(Err(MediaError::AlreadyPlaying(current.title.clone())));
                    return;
                }

                let session = self.next_session;
                self.next_session += 1;
                self.now_playing = Some(NowPlaying {
                    title: title.clone(),
                    session,
                });
                info!(%title, "Started playing movie");
                Self::notify_blinds(blinds, true);
                scope.timers().schedule_once(
                    self.movie_duration,
                    MediaMessage::MovieEnded {
                        title: title.clone(),
                        session,
                    },
                );
                let _ = reply.send(Ok(format!("Now playing: {title}")));
            }
            MediaMessage::StopMovie { reply } => match self.now_playing.take() {
                Some(stopped) => {
                    info!(title = %stopped.title, "Stopped playing movie");
                    Self::notify_blinds(blinds, false);
                    let _ = reply.send(Ok(format!("Stopped playing: {}", stopped.title)));
                }
                None => {
                    info!("No movie currently playing to stop");
                    let _ = reply.send(Err(MediaError::NotPlaying));
                }
            },
            MediaMessage::GetCurrentMovie { reply } => {
                let _ = reply.send(self.now_playing.as_ref().map(|p| p.title.clone()));
            }
            MediaMessage::MovieEnded { title, session } => {
                let ended = NowPlaying { title, session };
                if self.now_playing.as_ref() == Some(&ended) {
                    info!(title = %ended.title, "Movie ended");
                    self.now_playing = None;
                    Self::notify_blinds(blinds, false);
                } else {
                    debug!(title = %ended.title, session = ended.session, "Stale movie end ignored");
                }
            }
        }
    }
}
