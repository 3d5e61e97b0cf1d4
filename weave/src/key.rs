//! Option keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one option within a single choice group.
///
/// Keys are either text or integers. They deserialize from plain JSON strings
/// and numbers, and compare structurally: `"1"` and `1` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionKey {
    /// Numeric key.
    Number(i64),
    /// Text key.
    Text(String),
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::Number(n) => write!(f, "{}", n),
            OptionKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionKey {
    fn from(s: &str) -> Self {
        OptionKey::Text(s.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(s: String) -> Self {
        OptionKey::Text(s)
    }
}

impl From<i64> for OptionKey {
    fn from(n: i64) -> Self {
        OptionKey::Number(n)
    }
}

impl From<i32> for OptionKey {
    fn from(n: i32) -> Self {
        OptionKey::Number(n.into())
    }
}
