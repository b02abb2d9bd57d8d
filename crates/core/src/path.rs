//! Key paths: the addressing expressions of the engine's key space.
//!
//! A [`KeyPath`] is a chain of segments. Each segment names a key and may be
//! qualified with a branch and an array index. The canonical rendering is:
//!
//! ```text
//! path ["@" branch] ["[" index "]"] ["." next]
//! ```
//!
//! Key paths are immutable values. Derivation methods consume the value and
//! return the derived one, so a cached key can be cloned and specialized
//! without affecting the original:
//!
//! ```
//! use zeondb_core::KeyPath;
//!
//! let users = KeyPath::new("users");
//! let theo = users.clone().with_branch("theo");
//!
//! assert_eq!(users.to_string(), "users");
//! assert_eq!(theo.to_string(), "users@theo");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::{validate_segment, KeyError};

/// An addressing expression naming a location in the engine's key space.
///
/// `Clone` produces a fully independent copy, including the attached chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPath {
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next: Option<Box<KeyPath>>,
}

impl KeyPath {
    /// Create a key path with a single unqualified segment.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            branch: None,
            index: None,
            next: None,
        }
    }

    /// Qualify this segment with a branch.
    ///
    /// An empty branch name means the default branch and is not rendered.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        let branch = branch.into();
        self.branch = if branch.is_empty() { None } else { Some(branch) };
        self
    }

    /// Qualify this segment with an array index.
    pub fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    /// Qualify this segment with a signed index.
    ///
    /// Fails with [`KeyError::NegativeIndex`] when `index < 0`. The receiver
    /// is only borrowed, so on failure the original value is untouched.
    pub fn try_with_index(&self, index: i64) -> Result<Self, KeyError> {
        let index = u64::try_from(index).map_err(|_| KeyError::NegativeIndex { index })?;
        Ok(self.clone().with_index(index))
    }

    /// Attach a nested key path. Replaces any previously attached chain.
    pub fn chain(mut self, next: KeyPath) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    /// The key name of the first segment.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The branch of the first segment, if one was set.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// The index of the first segment, if one was set.
    pub fn index(&self) -> Option<u64> {
        self.index
    }

    /// The attached nested key path, if any.
    pub fn next(&self) -> Option<&KeyPath> {
        self.next.as_deref()
    }

    /// Iterate over the segments of the chain, first to last.
    pub fn segments(&self) -> Segments<'_> {
        Segments { cur: Some(self) }
    }

    /// Number of segments in the chain.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Check every segment of the chain against the token rules.
    pub fn validate(&self) -> Result<(), KeyError> {
        for seg in self.segments() {
            validate_segment(&seg.path)?;
            if let Some(branch) = &seg.branch {
                validate_segment(branch)?;
            }
        }
        Ok(())
    }

    /// Render the canonical command token.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&seg.path)?;
            if let Some(branch) = &seg.branch {
                write!(f, "@{}", branch)?;
            }
            if let Some(index) = seg.index {
                write!(f, "[{}]", index)?;
            }
        }
        Ok(())
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        KeyPath::new(path)
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        KeyPath::new(path)
    }
}

/// Iterator over the segments of a [`KeyPath`] chain.
pub struct Segments<'a> {
    cur: Option<&'a KeyPath>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a KeyPath;

    fn next(&mut self) -> Option<Self::Item> {
        let seg = self.cur?;
        self.cur = seg.next.as_deref();
        Some(seg)
    }
}
