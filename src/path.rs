// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Path shapes accepted by the resolver and the helpers that take them apart.

use crate::value::Value;

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A path into a [`Value`].
///
/// A dotted path is split on the resolver's separator while it is walked.
/// Keys of a [`PropertyPath::Segments`] path are applied verbatim and are
/// never split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyPath<'p> {
    /// Separator delimited path such as `a.b.c`.
    Dotted(Cow<'p, str>),
    /// A single key. Objects may be keyed by any value, not only strings.
    Key(Value),
    /// Pre-split ordered sequence of keys.
    Segments(Vec<Value>),
    /// Not a usable path. Resolving it always yields the default.
    Invalid,
}

impl PropertyPath<'_> {
    /// Returns false for paths that cannot be traversed at all.
    pub fn is_usable(&self) -> bool {
        match self {
            PropertyPath::Invalid => false,
            PropertyPath::Segments(keys) => !keys.is_empty(),
            _ => true,
        }
    }
}

impl<'p> From<&'p str> for PropertyPath<'p> {
    fn from(path: &'p str) -> Self {
        PropertyPath::Dotted(Cow::Borrowed(path))
    }
}

impl<'p> From<&'p String> for PropertyPath<'p> {
    fn from(path: &'p String) -> Self {
        PropertyPath::Dotted(Cow::Borrowed(path.as_str()))
    }
}

impl From<String> for PropertyPath<'_> {
    fn from(path: String) -> Self {
        PropertyPath::Dotted(Cow::Owned(path))
    }
}

impl From<u64> for PropertyPath<'_> {
    fn from(index: u64) -> Self {
        PropertyPath::Key(Value::from(index))
    }
}

impl From<usize> for PropertyPath<'_> {
    fn from(index: usize) -> Self {
        PropertyPath::Key(Value::from(index))
    }
}

impl From<i64> for PropertyPath<'_> {
    fn from(index: i64) -> Self {
        PropertyPath::Key(Value::from(index))
    }
}

impl From<u32> for PropertyPath<'_> {
    fn from(index: u32) -> Self {
        PropertyPath::Key(Value::from(u64::from(index)))
    }
}

// Unsuffixed integer literals such as `get(&v, 1)` are `i32`.
impl From<i32> for PropertyPath<'_> {
    fn from(index: i32) -> Self {
        PropertyPath::Key(Value::from(i64::from(index)))
    }
}

impl From<Vec<Value>> for PropertyPath<'_> {
    fn from(keys: Vec<Value>) -> Self {
        PropertyPath::Segments(keys)
    }
}

impl From<&[&str]> for PropertyPath<'_> {
    fn from(keys: &[&str]) -> Self {
        PropertyPath::Segments(keys.iter().map(|k| Value::from(*k)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyPath<'_> {
    fn from(keys: [&str; N]) -> Self {
        PropertyPath::Segments(keys.iter().map(|k| Value::from(*k)).collect())
    }
}

// A path that arrives as data: strings are dotted paths, arrays are pre-split
// sequences and other scalars are single keys.
impl<'p> From<&'p Value> for PropertyPath<'p> {
    fn from(path: &'p Value) -> Self {
        match path {
            Value::String(s) => PropertyPath::Dotted(Cow::Borrowed(s.as_ref())),
            Value::Number(_) | Value::Bool(_) => PropertyPath::Key(path.clone()),
            Value::Array(keys) => PropertyPath::Segments(keys.to_vec()),
            Value::Null | Value::Undefined | Value::Object(_) => PropertyPath::Invalid,
        }
    }
}

impl From<Value> for PropertyPath<'_> {
    fn from(path: Value) -> Self {
        match path {
            Value::String(s) => PropertyPath::Dotted(Cow::Owned(s.to_string())),
            other => PropertyPath::from(&other).into_owned(),
        }
    }
}

impl PropertyPath<'_> {
    /// Detaches the path from any borrowed text.
    pub fn into_owned(self) -> PropertyPath<'static> {
        match self {
            PropertyPath::Dotted(p) => PropertyPath::Dotted(Cow::Owned(p.into_owned())),
            PropertyPath::Key(k) => PropertyPath::Key(k),
            PropertyPath::Segments(keys) => PropertyPath::Segments(keys),
            PropertyPath::Invalid => PropertyPath::Invalid,
        }
    }
}

/// Parses a canonical array index: `0` or a decimal without leading zeros.
pub(crate) fn parse_index(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => s.parse().ok(),
        _ => None,
    }
}

/// Splits `field[i][j]` into `field` and its bracketed indices.
///
/// Returns `None` when the segment is not well formed bracket syntax; such a
/// segment is looked up as a literal key.
pub(crate) fn split_brackets(segment: &str) -> Option<(&str, Vec<&str>)> {
    let open = segment.find('[')?;
    let (field, mut rest) = segment.split_at(open);
    if field.contains(']') {
        return None;
    }

    let mut indices = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        let index = &inner[..close];
        if index.is_empty() || index.contains('[') {
            return None;
        }
        indices.push(index);
        rest = &inner[close + 1..];
    }

    Some((field, indices))
}
