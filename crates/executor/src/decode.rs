//! Interpretation of the engine's last-result slot.

use crate::{Connection, Error, Output, Result};

/// Turns a success flag plus the handle's error/output slot into a typed result.
///
/// | Flag | Slot | Result |
/// |------|------|--------|
/// | `false` | error `msg` | `Err(Error::Engine { message: msg })` |
/// | `true` | output `OK` | `Ok(Output::Ack)` |
/// | `true` | output JSON | `Ok(Output::Value(..))` |
/// | `true` | anything else | `Err(Error::Decode { .. })` |
pub struct ResultDecoder;

impl ResultDecoder {
    /// Decode the outcome of the command that just ran on `conn`.
    pub fn decode<C: Connection + ?Sized>(success: bool, conn: &C) -> Result<Output> {
        if !success {
            let message = conn.last_error()?;
            return Err(Error::Engine { message });
        }
        Self::parse_output(conn.last_output()?)
    }

    /// Decode the output text of a successful command.
    pub fn parse_output(output: String) -> Result<Output> {
        if output == Output::ACK_LITERAL {
            return Ok(Output::Ack);
        }
        match serde_json::from_str(&output) {
            Ok(value) => Ok(Output::Value(value)),
            Err(e) => Err(Error::Decode {
                reason: e.to_string(),
                output,
            }),
        }
    }
}
