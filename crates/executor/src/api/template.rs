//! Template operations.

use serde::Serialize;

use super::to_value;
use crate::{Command, Connection, KeyPath, Output, Result, Session};

impl<C: Connection> Session<C> {
    /// Read the template called `name`.
    pub fn template(&self, name: &str) -> Result<Output> {
        self.execute(Command::TemplateGet {
            name: name.to_string(),
        })
    }

    /// Instantiate template `name` at `key`.
    pub fn use_template(&self, name: &str, key: &KeyPath) -> Result<Output> {
        self.execute(Command::TemplateApply {
            name: name.to_string(),
            key: key.clone(),
        })
    }

    /// Store `template` under `name`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// session.new_template("company", &json!({"name": "", "employees": [], "projects": []}))?;
    /// ```
    pub fn new_template<T: Serialize + ?Sized>(&self, name: &str, template: &T) -> Result<Output> {
        self.execute(Command::TemplateCreate {
            name: name.to_string(),
            template: to_value(template)?,
        })
    }
}
