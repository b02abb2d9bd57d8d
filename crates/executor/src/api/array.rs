//! Array operations.
//!
//! None of these are retried; `array_push` and `array_insert` are not
//! idempotent.

use serde::Serialize;

use super::to_value;
use crate::{Command, Connection, KeyPath, Output, Result, Session};

impl<C: Connection> Session<C> {
    /// Append `value` to the array at `key`.
    pub fn array_push<T: Serialize + ?Sized>(&self, key: &KeyPath, value: &T) -> Result<Output> {
        self.execute(Command::ArrayPush {
            key: key.clone(),
            value: to_value(value)?,
        })
    }

    /// Insert `value` at position `index` of the array at `key`.
    pub fn array_insert<T: Serialize + ?Sized>(
        &self,
        key: &KeyPath,
        index: usize,
        value: &T,
    ) -> Result<Output> {
        self.execute(Command::ArrayInsert {
            key: key.clone(),
            index,
            value: to_value(value)?,
        })
    }

    /// Remove position `index` from the array at `key`.
    pub fn array_erase(&self, key: &KeyPath, index: usize) -> Result<Output> {
        self.execute(Command::ArrayErase {
            key: key.clone(),
            index,
        })
    }

    /// Length of the array at `key`.
    pub fn array_length(&self, key: &KeyPath) -> Result<Output> {
        self.execute(Command::ArrayLength { key: key.clone() })
    }
}
