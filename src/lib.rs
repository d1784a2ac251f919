// SHA-256 digest engine. The algorithmic modules live under src/core/;
// `hash` is the only entry point callers need.
pub mod core;

pub use crate::core::engine::{hash, Digest};
pub use crate::core::error::HashError;
