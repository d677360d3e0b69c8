//! Textual mutations that can be replayed against a [`Tree`][crate::Tree].
//!
//! An op is a verb and a key separated by a colon: `insert:5` (or `i:5`)
//! inserts 5 and `remove:5` (or `r:5`) removes one copy of 5.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::{Op, ParseOpError};
//!
//! assert_eq!("insert:-3".parse(), Ok(Op::Insert(-3)));
//! assert_eq!("r:7".parse(), Ok(Op::Remove(7)));
//! assert_eq!(
//!     "delete:7".parse::<Op<i32>>(),
//!     Err(ParseOpError::UnknownVerb("delete".to_string()))
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single mutation of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op<K> {
    /// Insert the key into the tree.
    Insert(K),
    /// Remove one copy of the key from the tree.
    Remove(K),
}

/// Why a string couldn't be parsed into an [`Op`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOpError {
    /// The input had no `:` between the verb and the key.
    #[error("expected `<verb>:<key>`, got `{0}`")]
    MissingSeparator(String),

    /// The verb wasn't one of `insert`, `i`, `remove`, or `r`.
    #[error("unknown op `{0}`, expected `insert` or `remove`")]
    UnknownVerb(String),

    /// The key couldn't be parsed.
    #[error("invalid key `{key}`: {reason}")]
    InvalidKey {
        /// The text after the separator.
        key: String,
        /// The key parser's error message.
        reason: String,
    },
}

impl<K> FromStr for Op<K>
where
    K: FromStr,
    K::Err: fmt::Display,
{
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, key) = s
            .split_once(':')
            .ok_or_else(|| ParseOpError::MissingSeparator(s.to_string()))?;

        let parse_key = || {
            key.trim().parse().map_err(|e: K::Err| ParseOpError::InvalidKey {
                key: key.to_string(),
                reason: e.to_string(),
            })
        };

        match verb.trim() {
            "insert" | "i" => parse_key().map(Op::Insert),
            "remove" | "r" => parse_key().map(Op::Remove),
            other => Err(ParseOpError::UnknownVerb(other.to_string())),
        }
    }
}

impl<K> fmt::Display for Op<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert(key) => write!(f, "insert:{key}"),
            Self::Remove(key) => write!(f, "remove:{key}"),
        }
    }
}
