use crate::model::WeatherCondition;
use device_actor::Reply;

#[derive(Debug)]
pub enum BlindsMessage {
    /// Weather as reported by the weather sensor.
    Weather(WeatherCondition),
    /// Sent by the media station when a movie starts (`true`) or ends.
    MovieStateChange(bool),
    /// Opens or closes the blinds and suspends weather automation.
    ManualOverride(bool),
    /// Clears the manual override without moving the blinds.
    ResumeAutomatic,
    GetStatus { reply: Reply<BlindsStatus> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlindsStatus {
    pub open: bool,
    pub manual_override: bool,
    pub movie_playing: bool,
}
