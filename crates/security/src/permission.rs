//! Read/write capability pair attached to accounts and keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Two independent capability flags.
///
/// Renders to the engine's permission literal. The write flag always comes
/// first, whichever order the flags were supplied in:
///
/// ```
/// use zeondb_security::Permission;
///
/// let perms = Permission::new(true, false);
/// assert_eq!(perms.to_string(), "{can_write: false, can_read: true }");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    read: bool,
    write: bool,
}

impl Permission {
    /// Create a permission from its read and write flags.
    pub const fn new(read: bool, write: bool) -> Self {
        Self { read, write }
    }

    /// Read and write.
    pub const fn full() -> Self {
        Self::new(true, true)
    }

    /// Read only.
    pub const fn read_only() -> Self {
        Self::new(true, false)
    }

    /// No access.
    pub const fn none() -> Self {
        Self::new(false, false)
    }

    /// Whether reads are permitted.
    pub const fn read(&self) -> bool {
        self.read
    }

    /// Whether writes are permitted.
    pub const fn write(&self) -> bool {
        self.write
    }
}

impl Default for Permission {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{can_write: {}, can_read: {} }}",
            self.write, self.read
        )
    }
}
