//! Chat notifications for version-control events.
//!
//! This library turns already-parsed push, pull request and issue events into
//! Markdown messages for a chat stream, along with the topic each message
//! belongs under. Receiving webhooks and delivering messages are left to the
//! caller.

pub mod events;
pub mod messages;
pub mod types;

pub use events::{PushKind, VcsEvent};

#[cfg(test)]
mod test_utils;
