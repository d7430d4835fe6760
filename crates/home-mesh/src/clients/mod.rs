//! # Clients
//!
//! Typed command surface for every device. Each client pairs a device address
//! with a request timeout and maps transport failures into the device's error
//! type, so callers never see raw channels.

pub mod macros;

pub mod air_condition_client;
pub mod blinds_client;
pub mod environment_client;
pub mod error;
pub mod fridge_client;
pub mod home_client;
pub mod media_client;

pub use air_condition_client::AirConditionClient;
pub use blinds_client::{BlindsClient, WeatherSensorClient};
pub use environment_client::{FeedClient, SimulatorClient};
pub use error::DeviceError;
pub use fridge_client::FridgeClient;
pub use home_client::HomeClient;
pub use media_client::MediaClient;
