//! ZeonDB - client command layer for a key-path-addressed data store
//!
//! ZeonDB addresses values by key paths (`users@theo[2].name`) and speaks a
//! line-oriented textual command protocol. This crate turns typed intents
//! into those command lines and turns the engine's replies back into typed
//! results.
//!
//! # Quick Start
//!
//! ```ignore
//! use zeondb::{ClientConfig, KeyPath, Session};
//!
//! let session = Session::open(&ClientConfig::default())?;
//!
//! if session.login("admin", "admin")? {
//!     let doc = KeyPath::new("users").with_branch("theo");
//!     session.set(&doc, &serde_json::json!({"name": "Theo"}))?;
//!     let value = session.get(&doc)?;
//! }
//!
//! session.disconnect();
//! ```
//!
//! # Architecture
//!
//! Everything goes through a [`Session`], which owns one [`Connection`] and
//! serializes command cycles on it. Any type implementing [`Connection`] can
//! back a session; [`NativeConnection`] binds the engine's C library.

// Re-export the public API from zeondb-executor
pub use zeondb_executor::*;
