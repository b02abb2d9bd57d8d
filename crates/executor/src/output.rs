//! Output enum for successful command results.
//!
//! The engine answers every successful command either with the two-character
//! acknowledgement `OK` or with a JSON document. Failures never produce an
//! `Output`; they surface as [`Error`](crate::Error).

use serde::{Deserialize, Serialize};

use crate::Value;

/// Successful command result.
///
/// # Example
///
/// ```text
/// use zeondb_executor::Output;
///
/// match session.get(&KeyPath::new("users"))? {
///     Output::Value(v) => println!("users = {}", v),
///     Output::Ack => println!("acknowledged"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// The engine acknowledged the command with `OK`
    Ack,

    /// The engine returned a JSON document
    Value(Value),
}

impl Output {
    /// The literal the engine sends for commands without a result.
    pub const ACK_LITERAL: &'static str = "OK";

    /// Whether this is the bare acknowledgement.
    pub fn is_ack(&self) -> bool {
        matches!(self, Output::Ack)
    }

    /// Borrow the decoded value, if any.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Output::Value(v) => Some(v),
            Output::Ack => None,
        }
    }

    /// Take the decoded value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Output::Value(v) => Some(v),
            Output::Ack => None,
        }
    }

    /// The result as a JSON value; the acknowledgement becomes the string `"OK"`.
    pub fn to_json(&self) -> Value {
        match self {
            Output::Value(v) => v.clone(),
            Output::Ack => Value::String(Self::ACK_LITERAL.to_string()),
        }
    }
}
