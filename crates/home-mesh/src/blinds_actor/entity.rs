use crate::blinds_actor::actions::{BlindsMessage, BlindsStatus};
use crate::model::WeatherCondition;
use async_trait::async_trait;
use device_actor::{Device, Scope};
use tracing::{debug, info};

/// Window blinds arbitrating between manual, movie and weather input.
///
/// Priority, evaluated per message:
/// 1. `ManualOverride` always applies and disables weather automation.
/// 2. A movie starting closes open blinds, manual mode or not. A movie ending
///    leaves them where they are.
/// 3. Weather applies only with no manual override and no movie playing:
///    sunny closes, anything else opens.
#[derive(Debug, Clone)]
pub struct Blinds {
    open: bool,
    manual_override: bool,
    movie_playing: bool,
}

impl Default for Blinds {
    fn default() -> Self {
        Self {
            open: true,
            manual_override: false,
            movie_playing: false,
        }
    }
}

impl Blinds {
    pub fn status(&self) -> BlindsStatus {
        BlindsStatus {
            open: self.open,
            manual_override: self.manual_override,
            movie_playing: self.movie_playing,
        }
    }

    fn set_open(&mut self, open: bool, reason: &'static str) {
        if self.open != open {
            self.open = open;
            info!(open, reason, "Blinds moved");
        }
    }

    pub fn apply(&mut self, message: BlindsMessage) {
        match message {
            BlindsMessage::ManualOverride(open) => {
                self.manual_override = true;
                self.set_open(open, "manual");
            }
            BlindsMessage::MovieStateChange(playing) => {
                self.movie_playing = playing;
                if playing {
                    self.set_open(false, "movie");
                }
            }
            BlindsMessage::ResumeAutomatic => {
                if self.manual_override {
                    self.manual_override = false;
                    info!("Blinds back in automatic mode");
                }
            }
            BlindsMessage::Weather(condition) => {
                if self.manual_override || self.movie_playing {
                    debug!(%condition, "Weather ignored");
                    return;
                }
                self.set_open(condition != WeatherCondition::Sunny, "weather");
            }
            BlindsMessage::GetStatus { reply } => {
                let _ = reply.send(self.status());
            }
        }
    }
}

#[async_trait]
impl Device for Blinds {
    type Message = BlindsMessage;
    type Context = ();

    async fn handle(&mut self, message: BlindsMessage, _scope: &mut Scope<Self>, _ctx: &()) {
        self.apply(message);
    }
}
