//! # envelope-core
//!
//! Core crate for the response envelope service. Contains the
//! [`ResponseEnvelope`](types::envelope::ResponseEnvelope) builder, the
//! dotted-path helper used to render it, the message provider trait,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other envelope crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use traits::MessageProvider;
pub use types::{ResponseEnvelope, ResponseStatus};
