//! Command enum defining all engine operations.
//!
//! Commands are the typed form of the engine's textual instruction set.
//! Every operation the client can send is represented as a variant here, and
//! [`CommandBuilder`](crate::CommandBuilder) renders each variant to exactly
//! one command line.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for rendering are in the variant
//! - **Serializable**: Can be converted to/from JSON for logging or replay
//! - **Pure data**: Rendering happens separately, with the session identity

use serde::{Deserialize, Serialize};
use zeondb_core::KeyPath;
use zeondb_security::AuthIntent;

use crate::Value;

/// A typed engine command.
///
/// # Command Categories
///
/// | Category | Count | Line prefix |
/// |----------|-------|-------------|
/// | Data | 4 | `set`, `get`, `delete`, `link` |
/// | Branches | 2 | `branches` |
/// | Templates | 3 | `template` |
/// | Options | 3 | `options` |
/// | Arrays | 4 | `array` |
/// | Auth | 1 (6 intents) | `auth` |
///
/// # Example
///
/// ```ignore
/// use zeondb_executor::{Command, KeyPath};
///
/// let cmd = Command::Set {
///     key: KeyPath::new("users").with_branch("theo"),
///     value: serde_json::json!({"name": "Theo"}),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Data (4) ====================
    /// Store a value at a key.
    /// Line: `set K <json>`
    Set { key: KeyPath, value: Value },

    /// Read the value at a key.
    /// Line: `get K`
    Get { key: KeyPath },

    /// Remove a key.
    /// Line: `delete K`
    Delete { key: KeyPath },

    /// Make `key` refer to `target`.
    /// Line: `link K T`
    Link { key: KeyPath, target: KeyPath },

    // ==================== Branches (2) ====================
    /// Merge two branches of a key.
    /// Line: `branches merge K B1 B2`
    BranchMerge {
        key: KeyPath,
        first: String,
        second: String,
    },

    /// List the branches of a key.
    /// Line: `branches get K`
    BranchList { key: KeyPath },

    // ==================== Templates (3) ====================
    /// Read a stored template.
    /// Line: `template get N`
    TemplateGet { name: String },

    /// Instantiate a template at a key.
    /// Line: `template set N K`
    TemplateApply { name: String, key: KeyPath },

    /// Store a new template.
    /// Line: `template create N <json>`
    TemplateCreate { name: String, template: Value },

    // ==================== Options (3) ====================
    /// Set a connection option.
    /// Line: `options set O <json>`
    OptionsSet { key: String, value: Value },

    /// Read a connection option.
    /// Line: `options get O`
    OptionsGet { key: String },

    /// Read all connection options.
    /// Line: `options print`
    OptionsPrint,

    // ==================== Arrays (4) ====================
    /// Append to the array at a key. Not idempotent.
    /// Line: `array push K <json>`
    ArrayPush { key: KeyPath, value: Value },

    /// Insert into the array at a key.
    /// Line: `array insert K I <json>`
    ArrayInsert {
        key: KeyPath,
        index: usize,
        value: Value,
    },

    /// Remove one element of the array at a key.
    /// Line: `array erase K I`
    ArrayErase { key: KeyPath, index: usize },

    /// Length of the array at a key.
    /// Line: `array length K`
    ArrayLength { key: KeyPath },

    // ==================== Auth (1) ====================
    /// Account and permission administration.
    /// Line: `auth ...`, see [`CommandBuilder`](crate::CommandBuilder)
    Auth(AuthIntent),
}

impl Command {
    /// Stable label for logs. Never includes payloads or credentials.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "set",
            Command::Get { .. } => "get",
            Command::Delete { .. } => "delete",
            Command::Link { .. } => "link",
            Command::BranchMerge { .. } => "branches merge",
            Command::BranchList { .. } => "branches get",
            Command::TemplateGet { .. } => "template get",
            Command::TemplateApply { .. } => "template set",
            Command::TemplateCreate { .. } => "template create",
            Command::OptionsSet { .. } => "options set",
            Command::OptionsGet { .. } => "options get",
            Command::OptionsPrint => "options print",
            Command::ArrayPush { .. } => "array push",
            Command::ArrayInsert { .. } => "array insert",
            Command::ArrayErase { .. } => "array erase",
            Command::ArrayLength { .. } => "array length",
            Command::Auth(intent) => match intent {
                AuthIntent::Create { .. } => "auth create",
                AuthIntent::GetPerms { .. } => "auth get",
                AuthIntent::SetPerms { .. } => "auth set",
                AuthIntent::Promote { .. } => "auth promote",
                AuthIntent::Demote { .. } => "auth demote",
                AuthIntent::Delete { .. } => "auth delete",
            },
        }
    }

    /// Whether rendering this command depends on the active login identity.
    pub fn needs_identity(&self) -> bool {
        matches!(
            self,
            Command::Auth(AuthIntent::GetPerms { .. }) | Command::Auth(AuthIntent::SetPerms { .. })
        )
    }

    /// The option command that forces JSON output, issued after login.
    pub fn json_format() -> Self {
        Command::OptionsSet {
            key: FORMAT_OPTION.to_string(),
            value: Value::String(JSON_FORMAT.to_string()),
        }
    }
}

/// Option controlling the engine's output format.
pub const FORMAT_OPTION: &str = "format";

/// The only output format the decoder understands.
pub const JSON_FORMAT: &str = "JSON";
