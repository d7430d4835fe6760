//! # Media Actor
//!
//! The media station tracks the title currently playing and tells the blinds
//! when a movie starts or ends, so they can close for privacy.
//!
//! ## Structure
//!
//! - [`entity`] - [`MediaStation`]
//! - [`actions`] - [`MediaMessage`]
//! - [`error`] - [`MediaError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, address) = media_actor::new(Duration::from_secs(120));
//! tokio::spawn(actor.run(blinds_ref));
//!
//! let media = MediaClient::new(address, Duration::from_secs(5));
//! media.play_movie("Alien".to_string()).await?;
//! assert!(matches!(
//!     media.play_movie("Heat".to_string()).await,
//!     Err(MediaError::AlreadyPlaying(title)) if title == "Alien"
//! ));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use device_actor::{DeviceActor, DeviceRef};
use std::time::Duration;

/// Creates a new Media Station actor and its address.
pub fn new(movie_duration: Duration) -> (DeviceActor<MediaStation>, DeviceRef<MediaStation>) {
    DeviceActor::new(MediaStation::new(movie_duration))
}
