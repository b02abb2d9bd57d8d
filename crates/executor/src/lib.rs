//! # ZeonDB Executor
//!
//! The client API for ZeonDB, a key-path-addressed data store reached through
//! a small synchronous connection primitive.
//!
//! This is the only crate users need to import. It provides:
//! - [`Session`] - One owned connection, the login identity, typed operations
//! - [`Command`]/[`Output`] - Low-level command interface
//! - [`CommandBuilder`] - Renders commands to engine command lines
//! - [`ResultDecoder`] - Turns the engine's result slot into `Result<Output>`
//! - [`KeyPath`], [`Permission`], [`Account`] - Addressing and access control values
//!
//! ## Quick Start
//!
//! ```text
//! use zeondb_executor::{ClientConfig, KeyPath, Session};
//!
//! let session = Session::open(&ClientConfig::default())?;
//!
//! if session.login("admin", "admin")? {
//!     session.set(&KeyPath::new("hello").chain(KeyPath::new("world")), &"hey")?;
//!     let value = session.get(&KeyPath::new("hello"))?;
//! }
//!
//! session.disconnect();
//! ```
//!
//! ## Command Lines
//!
//! | Operation | Line |
//! |-----------|------|
//! | `set` | `set users@theo[2].name "Theo"` |
//! | `merge` | `branches merge users default theo` |
//! | `use_template` | `template set company companies@Oven` |
//! | `auth` (other user) | `auth get users of theo` |

#![warn(missing_docs)]

mod api;
mod builder;
mod command;
mod config;
mod connection;
mod decode;
mod error;
mod native;
mod output;
mod session;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use builder::CommandBuilder;
pub use command::{Command, FORMAT_OPTION, JSON_FORMAT};
pub use config::{ClientConfig, CONFIG_FILE_NAME, DEFAULT_PORT};
pub use connection::Connection;
pub use decode::ResultDecoder;
pub use error::Error;
pub use native::{NativeConnection, ZeonLibrary};
pub use output::Output;
pub use session::Session;

// Re-export addressing and access control types so users don't need the
// lower crates directly
pub use zeondb_core::{KeyError, KeyPath};
pub use zeondb_security::{Account, AuthIntent, Permission};

/// JSON value type used for payloads and decoded results.
pub use serde_json::Value;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;
