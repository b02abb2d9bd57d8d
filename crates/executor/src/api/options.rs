//! Connection option operations.

use serde::Serialize;

use super::to_value;
use crate::{Command, Connection, Output, Result, Session, Value};

impl<C: Connection> Session<C> {
    /// Combined option access.
    ///
    /// | `key` | `value` | Command |
    /// |-------|---------|---------|
    /// | `Some` | `Some` | `options set` |
    /// | `Some` | `None` | `options get` |
    /// | `None` | any | `options print` |
    ///
    /// Setting `format` to anything but `"JSON"` fails before the engine is
    /// contacted.
    pub fn config(&self, key: Option<&str>, value: Option<Value>) -> Result<Output> {
        let cmd = match (key, value) {
            (Some(key), Some(value)) => Command::OptionsSet {
                key: key.to_string(),
                value,
            },
            (Some(key), None) => Command::OptionsGet {
                key: key.to_string(),
            },
            (None, _) => Command::OptionsPrint,
        };
        self.execute(cmd)
    }

    /// Set option `key` to `value`.
    pub fn set_option<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<Output> {
        self.execute(Command::OptionsSet {
            key: key.to_string(),
            value: to_value(value)?,
        })
    }

    /// Read option `key`.
    pub fn option(&self, key: &str) -> Result<Output> {
        self.execute(Command::OptionsGet {
            key: key.to_string(),
        })
    }

    /// Read every option.
    pub fn options(&self) -> Result<Output> {
        self.execute(Command::OptionsPrint)
    }
}
