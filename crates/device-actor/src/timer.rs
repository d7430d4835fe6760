//! # Timers
//!
//! Timers deliver messages into the owning device's mailbox, so a firing timer
//! is handled like any other message and never touches device state directly.

use crate::message::Envelope;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

/// Named timers owned by one device.
///
/// Keys are logical timer names. Starting a timer under a key that is already
/// in use aborts the previous timer first, so at most one timer per key is ever
/// live. Every keyed timer is aborted when the scheduler is dropped, which
/// happens when the device stops.
pub struct TimerScheduler<M: Send + 'static> {
    mailbox: mpsc::WeakUnboundedSender<Envelope<M>>,
    timers: HashMap<String, JoinHandle<()>>,
}

impl<M: Send + 'static> TimerScheduler<M> {
    pub(crate) fn new(mailbox: mpsc::WeakUnboundedSender<Envelope<M>>) -> Self {
        Self {
            mailbox,
            timers: HashMap::new(),
        }
    }

    /// Delivers `message()` every `period`, first after one full period.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn start_periodic<F>(&mut self, key: impl Into<String>, period: Duration, message: F)
    where
        F: Fn() -> M + Send + 'static,
    {
        let key = key.into();
        let mailbox = self.mailbox.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !deliver(&mailbox, message()) {
                    break;
                }
            }
        });
        self.replace(key, handle);
    }

    /// Delivers `message` once after `delay`. Cancellable through its key.
    pub fn start_single(&mut self, key: impl Into<String>, delay: Duration, message: M) {
        let key = key.into();
        let mailbox = self.mailbox.clone();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            deliver(&mailbox, message);
        });
        self.replace(key, handle);
    }

    /// Delivers `message` once after `delay`.
    ///
    /// Unkeyed and not cancellable: once scheduled it fires even if the device
    /// state it was meant for has moved on. Handlers of such messages compare
    /// the payload against current state before acting.
    pub fn schedule_once(&self, delay: Duration, message: M) {
        let mailbox = self.mailbox.clone();
        tokio::spawn(async move {
            time::sleep(delay).await;
            deliver(&mailbox, message);
        });
    }

    /// Cancels the timer under `key`. Returns whether one was running.
    pub fn cancel(&mut self, key: &str) -> bool {
        match self.timers.remove(key) {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                trace!(key, "Timer cancelled");
                was_running
            }
            None => false,
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.timers
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    fn replace(&mut self, key: String, handle: JoinHandle<()>) {
        if let Some(previous) = self.timers.insert(key.clone(), handle) {
            previous.abort();
            trace!(key, "Timer replaced");
        }
    }
}

impl<M: Send + 'static> Drop for TimerScheduler<M> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Returns false once the mailbox is gone.
fn deliver<M>(mailbox: &mpsc::WeakUnboundedSender<Envelope<M>>, message: M) -> bool {
    match mailbox.upgrade() {
        Some(sender) => sender.send(Envelope::Message(message)).is_ok(),
        None => false,
    }
}
