//! Token validation for ZeonDB commands
//!
//! The engine's command protocol is a single line of space-separated tokens.
//! Every bare token the client emits (key segments, branch names, template
//! names, usernames, ...) is checked here before it reaches a command line.
//!
//! ## Rules
//!
//! - Tokens must not be empty
//! - Tokens must not contain NUL bytes (\0), which terminate wire strings
//! - Tokens must not contain whitespace, which separates tokens
//! - Key segments must not contain the grammar characters `@ [ ] .`

use thiserror::Error;

/// Characters with meaning inside the key-path grammar.
pub const KEY_GRAMMAR_CHARS: &[char] = &['@', '[', ']', '.'];

/// Validate a bare command token.
///
/// # Examples
///
/// ```
/// use zeondb_core::key::validate_token;
///
/// assert!(validate_token("users").is_ok());
/// assert!(validate_token("user:123").is_ok());
///
/// assert!(validate_token("").is_err()); // empty
/// assert!(validate_token("a b").is_err()); // whitespace
/// assert!(validate_token("a\x00b").is_err()); // NUL
/// ```
pub fn validate_token(token: &str) -> Result<(), KeyError> {
    if token.is_empty() {
        return Err(KeyError::Empty);
    }

    if token.contains('\x00') {
        return Err(KeyError::ContainsNul);
    }

    if token.chars().any(char::is_whitespace) {
        return Err(KeyError::ContainsWhitespace {
            token: token.to_string(),
        });
    }

    Ok(())
}

/// Validate one segment of a key path (path or branch name).
///
/// Same rules as [`validate_token`], and additionally rejects the
/// characters the key-path grammar uses as separators.
pub fn validate_segment(segment: &str) -> Result<(), KeyError> {
    validate_token(segment)?;

    if let Some(c) = segment.chars().find(|c| KEY_GRAMMAR_CHARS.contains(c)) {
        return Err(KeyError::ReservedChar {
            segment: segment.to_string(),
            found: c,
        });
    }

    Ok(())
}

/// Key and token validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Token is empty (length 0)
    #[error("token cannot be empty")]
    Empty,

    /// Token contains NUL byte (\0)
    #[error("token cannot contain NUL bytes")]
    ContainsNul,

    /// Token contains whitespace or a line break
    #[error("token '{token}' cannot contain whitespace")]
    ContainsWhitespace {
        /// The offending token
        token: String,
    },

    /// Key segment contains a character reserved by the key-path grammar
    #[error("key segment '{segment}' cannot contain '{found}'")]
    ReservedChar {
        /// The offending segment
        segment: String,
        /// The reserved character found
        found: char,
    },

    /// Index was negative
    #[error("index cannot be less than 0 (got {index})")]
    NegativeIndex {
        /// The rejected index
        index: i64,
    },
}

impl KeyError {
    /// Short machine-readable reason code.
    pub fn reason_code(&self) -> &'static str {
        match self {
            KeyError::Empty => "empty_token",
            KeyError::ContainsNul => "contains_nul",
            KeyError::ContainsWhitespace { .. } => "contains_whitespace",
            KeyError::ReservedChar { .. } => "reserved_char",
            KeyError::NegativeIndex { .. } => "negative_index",
        }
    }
}
