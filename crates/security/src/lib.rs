//! Access control intents for the ZeonDB client.
//!
//! This crate provides the [`Permission`] capability pair and the
//! [`Account`] builder that produces [`AuthIntent`] values for the engine's
//! permission subsystem.
//!
//! ```
//! use zeondb_core::KeyPath;
//! use zeondb_security::{Account, Permission};
//!
//! let theo = Account::new("theo");
//! let grant = theo.set_perms(KeyPath::new("users"), Permission::read_only());
//! assert_eq!(grant.username(), "theo");
//! ```

#![warn(missing_docs)]

mod account;
mod permission;

pub use account::{Account, AuthIntent};
pub use permission::Permission;
