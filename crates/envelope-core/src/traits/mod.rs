//! Core traits defined in `envelope-core` and implemented by hosts.

pub mod messages;

pub use messages::{MessageProvider, StaticMessages};
