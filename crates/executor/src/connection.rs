//! The connection primitive the engine exposes.
//!
//! A connection owns one engine handle. The engine keeps a single
//! last-error / last-output slot per handle that every `execute` overwrites,
//! so callers must read the slot before issuing the next command. The
//! [`Session`](crate::Session) takes care of that.

use crate::Result;

/// One engine handle.
///
/// Creating a connection corresponds to the engine's `create(address, port)`;
/// the handle is destroyed when the value is dropped, so it is released
/// exactly once and cannot be used afterwards.
///
/// Methods return `Result` only for client-side failures (for example a
/// string argument that cannot be passed to the engine). Engine-side failure
/// is reported through the `bool` success flags.
pub trait Connection: Send {
    /// Liveness of the underlying handle.
    fn is_up(&self) -> bool;

    /// Authenticate the handle. Returns the engine's success flag.
    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool>;

    /// Run one command line. Returns the engine's success flag and updates
    /// the handle's error/output slot.
    fn execute(&mut self, command: &str) -> Result<bool>;

    /// Message left by the last failed command.
    fn last_error(&self) -> Result<String>;

    /// Output left by the last successful command.
    fn last_output(&self) -> Result<String>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn is_up(&self) -> bool {
        (**self).is_up()
    }

    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool> {
        (**self).authenticate(username, password)
    }

    fn execute(&mut self, command: &str) -> Result<bool> {
        (**self).execute(command)
    }

    fn last_error(&self) -> Result<String> {
        (**self).last_error()
    }

    fn last_output(&self) -> Result<String> {
        (**self).last_output()
    }
}
