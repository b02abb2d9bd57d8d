//! Core addressing types for the ZeonDB client
//!
//! This crate defines the values that name locations in the engine's key space:
//! - KeyPath: chained, branch- and index-qualified key expression
//! - KeyError: validation errors for keys and bare command tokens
//! - Token validation shared by every command the client renders

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod key;
pub mod path;

pub use key::{validate_segment, validate_token, KeyError};
pub use path::{KeyPath, Segments};
