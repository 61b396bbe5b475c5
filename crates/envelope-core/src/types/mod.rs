//! Envelope types and the helpers used to render them.

pub mod envelope;
pub mod path;
pub mod status;

pub use envelope::ResponseEnvelope;
pub use path::set_path;
pub use status::ResponseStatus;
