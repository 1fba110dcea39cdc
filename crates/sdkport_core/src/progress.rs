//! Progress reporting side channel.
//!
//! # Responsibility
//! - Carry free-text migration messages to whatever front end hosts the run.
//! - Disclose precedence overrides for audit visibility.
//!
//! # Invariants
//! - `report` is fire and forget; a sink failure never affects the outcome
//!   of the stage that reported.
//! - A no-op sink is a valid substitute anywhere a sink is required.

use log::info;
use std::sync::Mutex;

/// Free-text report sink injected into migration stages.
pub trait ProgressSink {
    /// Delivers one human-readable message.
    fn report(&self, message: &str);
}

/// Sink forwarding messages to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn report(&self, message: &str) {
        info!("event=progress module=progress message=\"{message}\"");
    }
}

/// Sink that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn report(&self, _message: &str) {}
}

/// Sink that records messages for later display or audit.
#[derive(Debug, Default)]
pub struct CollectingProgressSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingProgressSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every message reported so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl ProgressSink for CollectingProgressSink {
    fn report(&self, message: &str) {
        // A poisoned lock drops the message rather than failing the caller.
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
