//! Account administration intents.
//!
//! An [`Account`] is bound to one username and produces [`AuthIntent`]
//! values describing what should happen to that user. Intents are plain
//! data; turning them into engine commands happens in the executor.

use serde::{Deserialize, Serialize};
use zeondb_core::KeyPath;

use crate::Permission;

/// One administrative operation on a user account.
///
/// Each variant carries exactly the payload its operation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AuthIntent {
    /// Create a user with a password and global permissions.
    Create {
        /// User to create
        username: String,
        /// Initial password
        password: String,
        /// Initial permissions
        perms: Permission,
    },

    /// Read a user's permissions on a key.
    GetPerms {
        /// User whose permissions are read
        username: String,
        /// Key the permissions apply to
        key: KeyPath,
    },

    /// Set a user's permissions on a key.
    SetPerms {
        /// User whose permissions are changed
        username: String,
        /// Key the permissions apply to
        key: KeyPath,
        /// New permissions
        perms: Permission,
    },

    /// Grant a user administrator rights.
    Promote {
        /// User to promote
        username: String,
    },

    /// Revoke a user's administrator rights.
    Demote {
        /// User to demote
        username: String,
    },

    /// Remove a user.
    Delete {
        /// User to delete
        username: String,
    },
}

impl AuthIntent {
    /// The user this intent targets.
    pub fn username(&self) -> &str {
        match self {
            AuthIntent::Create { username, .. }
            | AuthIntent::GetPerms { username, .. }
            | AuthIntent::SetPerms { username, .. }
            | AuthIntent::Promote { username }
            | AuthIntent::Demote { username }
            | AuthIntent::Delete { username } => username,
        }
    }
}

/// Builder bound to a single username.
///
/// ```
/// use zeondb_security::{Account, AuthIntent, Permission};
///
/// let theo = Account::new("theo");
/// let intent = theo.create("paris");
///
/// assert_eq!(
///     intent,
///     AuthIntent::Create {
///         username: "theo".into(),
///         password: "paris".into(),
///         perms: Permission::full(),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    username: String,
}

impl Account {
    /// Bind a builder to `username`.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// The bound username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Create the user with full read and write permission.
    pub fn create(&self, password: impl Into<String>) -> AuthIntent {
        self.create_with(password, Permission::full())
    }

    /// Create the user with explicit permissions.
    pub fn create_with(&self, password: impl Into<String>, perms: Permission) -> AuthIntent {
        AuthIntent::Create {
            username: self.username.clone(),
            password: password.into(),
            perms,
        }
    }

    /// Read the user's permissions on `key`.
    pub fn get_perms(&self, key: KeyPath) -> AuthIntent {
        AuthIntent::GetPerms {
            username: self.username.clone(),
            key,
        }
    }

    /// Set the user's permissions on `key`.
    pub fn set_perms(&self, key: KeyPath, perms: Permission) -> AuthIntent {
        AuthIntent::SetPerms {
            username: self.username.clone(),
            key,
            perms,
        }
    }

    /// Grant administrator rights.
    pub fn promote(&self) -> AuthIntent {
        AuthIntent::Promote {
            username: self.username.clone(),
        }
    }

    /// Revoke administrator rights.
    pub fn demote(&self) -> AuthIntent {
        AuthIntent::Demote {
            username: self.username.clone(),
        }
    }

    /// Remove the user.
    pub fn delete(&self) -> AuthIntent {
        AuthIntent::Delete {
            username: self.username.clone(),
        }
    }
}
