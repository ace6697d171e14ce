// used to print out readable forms of a value
use std::fmt;
use std::hash::BuildHasherDefault;

use seahash::SeaHasher;
use serde::Serialize;

// used for the sets of notes and crns
pub type OtherHasher = BuildHasherDefault<SeaHasher>;

/// An identifier that is numeric most of the time.
///
/// The catalog feed mixes numeric identifiers with symbolic ones (sentinel
/// CRNs, administrative section labels), so a field that fails to parse as
/// an integer keeps its original text instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum SafeInt {
    Integer(i64),
    Raw(String),
}

impl SafeInt {
    /// Strict integer parse, ignoring surrounding whitespace. On failure the
    /// original string is retained unchanged. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(i) => SafeInt::Integer(i),
            Err(_) => {
                tracing::trace!(raw, "keeping non-numeric identifier as text");
                SafeInt::Raw(raw.to_string())
            }
        }
    }
    pub fn is_integer(&self) -> bool {
        matches!(self, SafeInt::Integer(_))
    }
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SafeInt::Integer(i) => Some(*i),
            SafeInt::Raw(_) => None,
        }
    }
}

impl fmt::Display for SafeInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SafeInt::Integer(i) => write!(f, "{}", i),
            SafeInt::Raw(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for SafeInt {
    fn from(i: i64) -> Self {
        SafeInt::Integer(i)
    }
}
impl From<&str> for SafeInt {
    fn from(s: &str) -> Self {
        SafeInt::parse(s)
    }
}
