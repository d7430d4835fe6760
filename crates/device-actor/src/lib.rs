//! # Device Actor
//!
//! Building blocks for meshes of small, independently scheduled state machines
//! ("devices") that talk to each other only through asynchronous messages.
//!
//! Each device owns its state exclusively. A single Tokio task drains the
//! device's mailbox one message at a time, so handlers mutate `&mut self`
//! without locks. Devices never block on each other: cross-device calls are
//! enqueue operations, and when a result is needed the request carries a
//! one-shot reply channel.
//!
//! ## Architecture Overview
//!
//! 1. **Device Layer** ([`Device`]) - the state machine and its message enum
//! 2. **Runtime Layer** ([`DeviceActor`]) - mailbox loop, lifecycle hooks, timers
//! 3. **Interface Layer** ([`DeviceRef`], [`Recipient`], [`DeviceClient`]) - addressing
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use async_trait::async_trait;
//! use device_actor::{Device, DeviceActor, Reply, Scope};
//!
//! #[derive(Default)]
//! struct Lamp {
//!     on: bool,
//! }
//!
//! #[derive(Debug)]
//! enum LampMessage {
//!     Toggle,
//!     IsOn { reply: Reply<bool> },
//! }
//!
//! #[async_trait]
//! impl Device for Lamp {
//!     type Message = LampMessage;
//!     type Context = ();
//!
//!     async fn handle(&mut self, message: LampMessage, _scope: &mut Scope<Self>, _ctx: &()) {
//!         match message {
//!             LampMessage::Toggle => self.on = !self.on,
//!             LampMessage::IsOn { reply } => {
//!                 let _ = reply.send(self.on);
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, lamp) = DeviceActor::new(Lamp::default());
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     lamp.tell(LampMessage::Toggle).unwrap();
//!     let on = lamp
//!         .ask(|reply| LampMessage::IsOn { reply }, Duration::from_secs(1))
//!         .await
//!         .unwrap();
//!     assert!(on);
//!
//!     lamp.stop().unwrap();
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`DeviceActor::run`], not to the constructor. All
//! addresses can therefore be created first and wired afterwards, which is how
//! cyclic meshes (A notifies B, B reports back to A) are assembled.
//!
//! ## Ordering and Timeouts
//!
//! - Messages from one sender to one device arrive in send order.
//! - [`DeviceRef::ask`] fails with [`FrameworkError::Timeout`] when no reply
//!   arrives in time. The request stays in the mailbox and may still be handled.
//! - Timers and completed background futures re-enter the device through its
//!   own mailbox (see [`Scope::pipe_to_self`] and [`TimerScheduler`]).
//!
//! ## Testing
//!
//! The [`mock`] module hands out probe addresses whose mailbox the test reads
//! directly, so a single device can be exercised without its collaborators.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod scope;
pub mod timer;

pub use actor::DeviceActor;
pub use client::{DeviceRef, Recipient};
pub use client_trait::DeviceClient;
pub use entity::Device;
pub use error::FrameworkError;
pub use message::{Envelope, Reply};
pub use scope::Scope;
pub use timer::TimerScheduler;
