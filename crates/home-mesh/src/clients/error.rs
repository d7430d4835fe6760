use device_actor::FrameworkError;

/// Error for clients of devices whose operations cannot fail on their own.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device unavailable: {0}")]
    Communication(#[from] FrameworkError),
}
