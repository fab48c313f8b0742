//! Document model, code families and the reader error type.
//!
//! These types are a passive data sink: the reader in [`crate::reader`]
//! populates them once and never mutates a document after returning it.

mod codes;
mod error;
mod types;

pub use codes::*;
pub use error::*;
pub use types::*;
