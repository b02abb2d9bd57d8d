//! Branch operations.

use crate::{Command, Connection, KeyPath, Output, Result, Session};

impl<C: Connection> Session<C> {
    /// Merge branches `first` and `second` of `key`.
    ///
    /// How conflicts resolve is up to the engine.
    pub fn merge(&self, key: &KeyPath, first: &str, second: &str) -> Result<Output> {
        self.execute(Command::BranchMerge {
            key: key.clone(),
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// List the branch names of `key`.
    pub fn branches(&self, key: &KeyPath) -> Result<Output> {
        self.execute(Command::BranchList { key: key.clone() })
    }
}
