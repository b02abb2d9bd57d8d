//! Error types for command execution.
//!
//! All failures surfaced by the client are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Categorized**: Client-side validation never touches the engine

use serde::{Deserialize, Serialize};
use zeondb_core::KeyError;

/// Client errors.
///
/// # Categories
///
/// | Category | Variants | Engine contacted? |
/// |----------|----------|-------------------|
/// | Validation | `InvalidKey`, `InvalidInput` | No |
/// | Identity | `NotAuthenticated` | No |
/// | Engine | `Engine` | Yes, command failed |
/// | Protocol | `Decode` | Yes, output unreadable |
/// | System | `Connection`, `Config`, `Serialization` | Varies |
///
/// # Example
///
/// ```ignore
/// use zeondb_executor::{Error, KeyPath};
///
/// match session.get(&KeyPath::new("users")) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::Engine { message }) => {
///         println!("engine refused: {}", message);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Invalid key path
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    /// Invalid command argument
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== Identity Errors ====================
    /// Operation needs the active login identity but no login succeeded
    #[error("not authenticated: log in before issuing this command")]
    NotAuthenticated,

    // ==================== Engine Errors ====================
    /// The engine rejected the command
    #[error("{message}")]
    Engine { message: String },

    /// The engine reported success but its output is neither the
    /// acknowledgement nor a JSON document
    #[error("malformed engine output {output:?}: {reason}")]
    Decode { output: String, reason: String },

    // ==================== System Errors ====================
    /// Library loading or handle creation failed
    #[error("connection error: {reason}")]
    Connection { reason: String },

    /// Configuration file could not be read or parsed
    #[error("config error: {reason}")]
    Config { reason: String },

    /// Payload could not be encoded
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl Error {
    /// Whether the error was raised before any engine round trip.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Error::InvalidKey { .. }
                | Error::InvalidInput { .. }
                | Error::NotAuthenticated
                | Error::Serialization { .. }
        )
    }
}

impl From<KeyError> for Error {
    fn from(e: KeyError) -> Self {
        Error::InvalidKey {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}
