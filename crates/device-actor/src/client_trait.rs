//! # DeviceClient Trait
//!
//! Common base for device-specific clients: a typed address, a bounded
//! request timeout and a mapping from transport errors into the client's own
//! error type.

use crate::{Device, DeviceRef, FrameworkError, Reply};
use async_trait::async_trait;
use std::time::Duration;

/// Trait for device-specific clients to inherit `tell`/`ask`.
///
/// Implementors supply the address, the timeout and the error mapping; the
/// provided methods do the rest.
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct LampClient {
///     inner: DeviceRef<Lamp>,
///     timeout: Duration,
/// }
///
/// impl DeviceClient<Lamp> for LampClient {
///     type Error = LampError;
///
///     fn inner(&self) -> &DeviceRef<Lamp> { &self.inner }
///     fn timeout(&self) -> Duration { self.timeout }
///     fn map_error(e: FrameworkError) -> LampError { LampError::Communication(e) }
/// }
///
/// let on = lamp_client.ask(|reply| LampMessage::IsOn { reply }).await?;
/// ```
#[async_trait]
pub trait DeviceClient<T: Device>: Send + Sync {
    type Error: Send;

    fn inner(&self) -> &DeviceRef<T>;

    /// Upper bound for [`ask`](DeviceClient::ask).
    fn timeout(&self) -> Duration;

    fn map_error(e: FrameworkError) -> Self::Error;

    fn tell(&self, message: T::Message) -> Result<(), Self::Error> {
        self.inner().tell(message).map_err(Self::map_error)
    }

    async fn ask<R, F>(&self, build: F) -> Result<R, Self::Error>
    where
        R: Send + 'static,
        F: FnOnce(Reply<R>) -> T::Message + Send + 'static,
    {
        self.ask_within(build, self.timeout()).await
    }

    async fn ask_within<R, F>(&self, build: F, timeout: Duration) -> Result<R, Self::Error>
    where
        R: Send + 'static,
        F: FnOnce(Reply<R>) -> T::Message + Send + 'static,
    {
        tracing::debug!(?timeout, "Sending request");
        self.inner()
            .ask(build, timeout)
            .await
            .map_err(Self::map_error)
    }
}
