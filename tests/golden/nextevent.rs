//! Code generated by nextevent from `tools/events.rs`. DO NOT EDIT.
//!
//! Each event type gets a blocking accessor and a channel accessor. The
//! blocking accessor waits forever if the event never arrives.

use std::sync::mpsc;

use crate::Bot;
use crate::events;

/// Dispatcher keys for the generated accessors.
pub mod kind {
    pub const MESSAGE_CREATE: &str = "messageCreate";
    pub const __RATE_LIMIT__: &str = "rateLimit";
}

impl Bot {
    /// Blocks until the next [`events::MessageCreate`] gateway event is dispatched.
    pub fn next_message_create(&self) -> Result<events::MessageCreate, mpsc::RecvError> {
        self.next_message_create_chan().recv()
    }

    /// Blocks until the next [`events::RateLimit`] session event is dispatched.
    pub fn next_rate_limit(&self) -> Result<events::RateLimit, mpsc::RecvError> {
        self.next_rate_limit_chan().recv()
    }

    /// Returns a channel that receives the next [`events::MessageCreate`] gateway event.
    pub fn next_message_create_chan(&self) -> mpsc::Receiver<events::MessageCreate> {
        let (tx, rx) = mpsc::sync_channel(1);
        self.dispatcher.add_handler_once(kind::MESSAGE_CREATE, move |event: events::MessageCreate| {
            let _ = tx.send(event);
        });
        rx
    }

    /// Returns a channel that receives the next [`events::RateLimit`] session event.
    pub fn next_rate_limit_chan(&self) -> mpsc::Receiver<events::RateLimit> {
        let (tx, rx) = mpsc::sync_channel(1);
        self.dispatcher.add_handler_once(kind::__RATE_LIMIT__, move |event: events::RateLimit| {
            let _ = tx.send(event);
        });
        rx
    }
}
