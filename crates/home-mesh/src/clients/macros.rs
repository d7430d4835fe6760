/// Declares a client wrapping a `DeviceRef` plus a request timeout and
/// implements `DeviceClient` for it. `$error` must implement
/// `From<FrameworkError>`.
#[macro_export]
macro_rules! device_client {
    ($(#[$meta:meta])* $client:ident, $device:ty, $error:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $client {
            inner: device_actor::DeviceRef<$device>,
            timeout: std::time::Duration,
        }

        impl $client {
            pub fn new(inner: device_actor::DeviceRef<$device>, timeout: std::time::Duration) -> Self {
                Self { inner, timeout }
            }
        }

        #[async_trait::async_trait]
        impl device_actor::DeviceClient<$device> for $client {
            type Error = $error;

            fn inner(&self) -> &device_actor::DeviceRef<$device> {
                &self.inner
            }

            fn timeout(&self) -> std::time::Duration {
                self.timeout
            }

            fn map_error(e: device_actor::FrameworkError) -> Self::Error {
                <$error>::from(e)
            }
        }
    };
}

/// Generates one read method per reply-only message variant, named after the
/// variant in snake case (`GetStatus` becomes `get_status`).
#[macro_export]
macro_rules! ask_methods {
    ($client:ident, $device:ty, $message:ident, $error:ty, [$($variant:ident => $ret:ty),* $(,)?]) => {
        paste::paste! {
            impl $client {
                $(
                    #[tracing::instrument(skip(self))]
                    pub async fn [<$variant:snake>](&self) -> Result<$ret, $error> {
                        <Self as device_actor::DeviceClient<$device>>::ask(self, |reply| $message::$variant { reply })
                            .await
                    }
                )*
            }
        }
    };
}

/// Like [`ask_methods!`] for variants whose reply is itself a
/// `Result<_, $error>`; transport and device errors are flattened.
#[macro_export]
macro_rules! try_ask_methods {
    ($client:ident, $device:ty, $message:ident, $error:ty, [$($variant:ident => $ret:ty),* $(,)?]) => {
        paste::paste! {
            impl $client {
                $(
                    #[tracing::instrument(skip(self))]
                    pub async fn [<$variant:snake>](&self) -> Result<$ret, $error> {
                        <Self as device_actor::DeviceClient<$device>>::ask(self, |reply| $message::$variant { reply })
                            .await
                            .and_then(std::convert::identity)
                    }
                )*
            }
        }
    };
}
