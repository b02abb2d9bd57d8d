//! Key operations: set, get, delete, link.

use serde::Serialize;

use super::to_value;
use crate::{Command, Connection, KeyPath, Output, Result, Session};

impl<C: Connection> Session<C> {
    /// Store `value` at `key`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// session.set(&KeyPath::new("hello").chain(KeyPath::new("world")), &"hey")?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &KeyPath, value: &T) -> Result<Output> {
        self.execute(Command::Set {
            key: key.clone(),
            value: to_value(value)?,
        })
    }

    /// Read the value at `key`.
    pub fn get(&self, key: &KeyPath) -> Result<Output> {
        self.execute(Command::Get { key: key.clone() })
    }

    /// Remove `key`.
    pub fn delete(&self, key: &KeyPath) -> Result<Output> {
        self.execute(Command::Delete { key: key.clone() })
    }

    /// Make `key` refer to `target`.
    pub fn link(&self, key: &KeyPath, target: &KeyPath) -> Result<Output> {
        self.execute(Command::Link {
            key: key.clone(),
            target: target.clone(),
        })
    }
}
