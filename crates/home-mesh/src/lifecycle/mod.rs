//! # System Lifecycle & Orchestration
//!
//! Individual devices are simple; wiring them together is where the
//! complexity lives. This module is the conductor.
//!
//! 1. **Configuration** ([`Config`]) - `home-mesh.toml` plus environment overrides
//! 2. **Observability** ([`setup_tracing`]) - structured logging
//! 3. **Orchestration** ([`HomeSystem`]) - create, wire, start and stop every device
//!
//! ## Dependency Injection via Context
//!
//! Devices are constructed without dependencies and receive them through
//! `run(context)`:
//!
//! ```rust,ignore
//! impl Device for MediaStation {
//!     type Context = DeviceRef<Blinds>;
//! }
//!
//! impl Device for Fridge {
//!     type Context = Arc<dyn OrderBackend>;
//! }
//! ```
//!
//! ## Shutdown
//!
//! The mesh is cyclic (a sensor reports to the device that owns it, the
//! environment sources publish to the supervisor that controls them), so
//! channel closure never ends it on its own. [`HomeSystem::shutdown`] sends
//! every device an explicit stop and joins the tasks.

pub mod config;
pub mod home_system;
pub mod tracing;

pub use config::*;
pub use home_system::*;
pub use self::tracing::setup_tracing;
