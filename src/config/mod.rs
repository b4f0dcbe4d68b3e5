//! The path-addressed dynamic configuration container.

mod access;
mod error;
mod io;
mod tree;
mod validate;

pub use error::ConfigError;
pub use tree::Config;
pub use validate::{is_required_marker, REQUIRED};
