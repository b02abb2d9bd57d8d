//! Session: one owned connection plus the active login identity.
//!
//! The engine keeps one last-error / last-output slot per handle and every
//! command overwrites it. A [`Session`] therefore runs each command cycle
//! (render with the current identity, execute, read the slot) under a
//! single lock, so a `Session` can be shared across threads without two
//! commands interleaving on the handle.
//!
//! # Usage
//!
//! ```ignore
//! use zeondb_executor::{Command, KeyPath, Session};
//!
//! let session = Session::new(connection);
//!
//! if session.login("admin", "admin")? {
//!     session.set(&KeyPath::new("hello"), &"world")?;
//!     let out = session.execute(Command::Get { key: KeyPath::new("hello") })?;
//! }
//!
//! session.disconnect();
//! ```

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::{Command, CommandBuilder, Connection, Output, Result, ResultDecoder};

/// An exclusively owned engine connection and its login identity.
///
/// Dropping the session, or calling [`disconnect`](Session::disconnect),
/// releases the handle exactly once.
pub struct Session<C: Connection> {
    inner: Mutex<Inner<C>>,
}

struct Inner<C> {
    conn: C,
    identity: Option<String>,
}

impl<C: Connection> Session<C> {
    /// Wrap an open connection. No identity is active until [`login`](Session::login).
    pub fn new(conn: C) -> Self {
        Self {
            inner: Mutex::new(Inner {
                conn,
                identity: None,
            }),
        }
    }

    /// Authenticate as `username`.
    ///
    /// On success the username becomes the active identity and the engine is
    /// switched to JSON output so results can be decoded. The outcome of that
    /// follow-up is logged, not returned: the return value is only the
    /// authentication result. A failed login leaves any previous identity in place.
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        let mut inner = self.inner.lock();

        let ok = inner.conn.authenticate(username, password)?;
        info!(target: "zeondb::session", username, ok, "Login");
        if !ok {
            return Ok(false);
        }

        inner.identity = Some(username.to_string());
        if let Err(e) = Self::cycle(&mut inner, &Command::json_format()) {
            warn!(target: "zeondb::session", error = %e, "Failed to switch output format to JSON");
        }
        Ok(true)
    }

    /// The username of the last successful login.
    pub fn identity(&self) -> Option<String> {
        self.inner.lock().identity.clone()
    }

    /// Liveness of the underlying handle. Not checked before commands.
    pub fn is_up(&self) -> bool {
        self.inner.lock().conn.is_up()
    }

    /// Message left in the handle's error slot by the last failure,
    /// including a failed login.
    pub fn last_error(&self) -> Result<String> {
        self.inner.lock().conn.last_error()
    }

    /// Execute one command and decode its result.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let mut inner = self.inner.lock();
        Self::cycle(&mut inner, &cmd)
    }

    /// Release the connection handle.
    pub fn disconnect(self) {
        info!(target: "zeondb::session", "Disconnecting");
        drop(self);
    }

    /// Consume the session and hand back the connection without releasing it.
    pub fn into_connection(self) -> C {
        self.inner.into_inner().conn
    }

    fn cycle(inner: &mut Inner<C>, cmd: &Command) -> Result<Output> {
        let line = CommandBuilder::new(inner.identity.as_deref()).build(cmd)?;
        debug!(target: "zeondb::session", command = cmd.name(), "Executing command");

        let ok = inner.conn.execute(&line)?;
        let result = ResultDecoder::decode(ok, &inner.conn);

        if let Err(e) = &result {
            debug!(target: "zeondb::session", command = cmd.name(), error = %e, "Command failed");
        }
        result
    }
}
