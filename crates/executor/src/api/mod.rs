//! Typed operations on a [`Session`].
//!
//! Each method builds one [`Command`](crate::Command), executes it, and
//! returns the decoded [`Output`](crate::Output). Payloads accept anything
//! that implements `Serialize`; struct fields and map entries keep their
//! order in the rendered command.
//!
//! # Example
//!
//! ```text
//! use zeondb_executor::{Account, ClientConfig, KeyPath, Session};
//!
//! let session = Session::open(&ClientConfig::default())?;
//! if session.login("admin", "admin")? {
//!     let users = KeyPath::new("users").with_branch("theo");
//!     session.set(&users, &serde_json::json!([{"title": "blog"}]))?;
//!     let value = session.get(&users)?;
//!
//!     session.auth(&Account::new("theo").create("paris"))?;
//! }
//! session.disconnect();
//! ```

mod array;
mod auth;
mod branches;
mod data;
mod options;
mod template;

use serde::Serialize;

use crate::native::{NativeConnection, ZeonLibrary};
use crate::{ClientConfig, Result, Session, Value};

impl Session<NativeConnection> {
    /// Load the engine library named in `config` and connect to the engine.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let library = ZeonLibrary::open(&config.library)?;
        let conn = library.connect(&config.address, config.port)?;
        Ok(Session::new(conn))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
