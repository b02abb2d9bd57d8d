//! Rendering of typed commands into engine command lines.
//!
//! Every [`Command`] maps to exactly one line of space-separated tokens.
//! JSON payloads are encoded compactly with `serde_json`; object keys keep
//! their insertion order and strings are escaped, so a payload never
//! introduces a raw line break. Bare tokens are validated before use.

use zeondb_core::{validate_token, KeyPath};
use zeondb_security::AuthIntent;

use crate::command::{FORMAT_OPTION, JSON_FORMAT};
use crate::{Command, Error, Result, Value};

/// Renders commands for one session identity.
///
/// The identity only matters for `auth get` and `auth set`: when the target
/// user is the logged-in user, the `of <user>` / `to <user>` suffix is left
/// out and the engine applies the command to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandBuilder<'a> {
    identity: Option<&'a str>,
}

impl<'a> CommandBuilder<'a> {
    /// Builder for a session whose active identity is `identity`.
    pub fn new(identity: Option<&'a str>) -> Self {
        Self { identity }
    }

    /// Builder with no active identity.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    /// Render `cmd` to a single command line.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` / `InvalidInput` when a token fails validation
    /// - `InvalidInput` when setting the `format` option to anything but `"JSON"`
    /// - `NotAuthenticated` for `auth get`/`auth set` without an identity
    pub fn build(&self, cmd: &Command) -> Result<String> {
        if cmd.needs_identity() && self.identity.is_none() {
            return Err(Error::NotAuthenticated);
        }
        let line = match cmd {
            Command::Set { key, value } => format!("set {} {}", render_key(key)?, encode(value)?),
            Command::Get { key } => format!("get {}", render_key(key)?),
            Command::Delete { key } => format!("delete {}", render_key(key)?),
            Command::Link { key, target } => {
                format!("link {} {}", render_key(key)?, render_key(target)?)
            }

            Command::BranchMerge { key, first, second } => format!(
                "branches merge {} {} {}",
                render_key(key)?,
                token("branch", first)?,
                token("branch", second)?
            ),
            Command::BranchList { key } => format!("branches get {}", render_key(key)?),

            Command::TemplateGet { name } => format!("template get {}", token("template", name)?),
            Command::TemplateApply { name, key } => format!(
                "template set {} {}",
                token("template", name)?,
                render_key(key)?
            ),
            Command::TemplateCreate { name, template } => format!(
                "template create {} {}",
                token("template", name)?,
                encode(template)?
            ),

            Command::OptionsSet { key, value } => {
                check_format_option(key, value)?;
                format!("options set {} {}", token("option", key)?, encode(value)?)
            }
            Command::OptionsGet { key } => format!("options get {}", token("option", key)?),
            Command::OptionsPrint => "options print".to_string(),

            Command::ArrayPush { key, value } => {
                format!("array push {} {}", render_key(key)?, encode(value)?)
            }
            Command::ArrayInsert { key, index, value } => format!(
                "array insert {} {} {}",
                render_key(key)?,
                index,
                encode(value)?
            ),
            Command::ArrayErase { key, index } => {
                format!("array erase {} {}", render_key(key)?, index)
            }
            Command::ArrayLength { key } => format!("array length {}", render_key(key)?),

            Command::Auth(intent) => self.build_auth(intent)?,
        };

        debug_assert!(!line.contains(|c: char| matches!(c, '\n' | '\r' | '\0')));
        Ok(line)
    }

    fn build_auth(&self, intent: &AuthIntent) -> Result<String> {
        let line = match intent {
            AuthIntent::Create {
                username,
                password,
                perms,
            } => format!(
                "auth create {} {} {}",
                token("username", username)?,
                secret(password)?,
                perms
            ),
            AuthIntent::GetPerms { username, key } => {
                let key = render_key(key)?;
                if self.is_self(username) {
                    format!("auth get {}", key)
                } else {
                    format!("auth get {} of {}", key, token("username", username)?)
                }
            }
            AuthIntent::SetPerms {
                username,
                key,
                perms,
            } => {
                let key = render_key(key)?;
                if self.is_self(username) {
                    format!("auth set {} {}", key, perms)
                } else {
                    format!(
                        "auth set {} {} to {}",
                        key,
                        perms,
                        token("username", username)?
                    )
                }
            }
            AuthIntent::Promote { username } => {
                format!("auth promote {}", token("username", username)?)
            }
            AuthIntent::Demote { username } => {
                format!("auth demote {}", token("username", username)?)
            }
            AuthIntent::Delete { username } => {
                format!("auth delete {}", token("username", username)?)
            }
        };
        Ok(line)
    }

    fn is_self(&self, username: &str) -> bool {
        self.identity == Some(username)
    }
}

fn render_key(key: &KeyPath) -> Result<String> {
    key.validate()?;
    Ok(key.render())
}

fn token<'t>(kind: &str, value: &'t str) -> Result<&'t str> {
    validate_token(value).map_err(|e| Error::InvalidInput {
        reason: format!("invalid {}: {}", kind, e),
    })?;
    Ok(value)
}

fn secret(value: &str) -> Result<&str> {
    validate_token(value).map_err(|e| Error::InvalidInput {
        reason: format!("invalid password ({})", e.reason_code()),
    })?;
    Ok(value)
}

fn encode(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn check_format_option(key: &str, value: &Value) -> Result<()> {
    if key == FORMAT_OPTION && value.as_str() != Some(JSON_FORMAT) {
        return Err(Error::InvalidInput {
            reason: "Format must be JSON".to_string(),
        });
    }
    Ok(())
}
