// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Null-safe traversal of nested values.
//!
//! Resolution never fails. A missing key, an out of range index, a scalar in
//! the middle of a path, a `null` root or an unusable path all end the walk
//! and yield the caller's default, or the absence marker when there is none.

use crate::error::ConfigError;
use crate::path::{self, PropertyPath};
use crate::value::Value;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Settings for a [`Resolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Character that delimits segments of a dotted path.
    pub separator: char,

    /// Treat `field[index]` inside a segment as a lookup of `field` followed by `index`.
    /// When off, brackets are ordinary characters of the key.
    pub bracket_indices: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

const DEFAULT_CONFIG: ResolverConfig = ResolverConfig {
    separator: '.',
    bracket_indices: false,
};

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bracket_indices && matches!(self.separator, '[' | ']') {
            return Err(ConfigError::SeparatorIsBracket(self.separator));
        }
        Ok(())
    }
}

/// Walks values along paths according to a [`ResolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

const DEFAULT_RESOLVER: Resolver = Resolver {
    config: DEFAULT_CONFIG,
};

impl Resolver {
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if config != DEFAULT_CONFIG {
            debug!(
                separator = %config.separator,
                bracket_indices = config.bracket_indices,
                "created resolver with custom config"
            );
        }
        Ok(Self { config })
    }

    /// Builds a resolver from a JSON config such as `{"separator": "/"}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ResolverConfig =
            serde_json::from_str(json).map_err(|e| anyhow!("invalid resolver config: {e}"))?;
        Ok(Self::new(config)?)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Value at `path`, or the absence marker that ended the walk.
    pub fn get<'a, 'p>(&self, root: &'a Value, path: impl Into<PropertyPath<'p>>) -> &'a Value {
        self.resolve(root, &path.into(), None)
    }

    /// Value at `path`, or `default` when the walk ends in absence.
    pub fn get_or<'a, 'p>(
        &self,
        root: &'a Value,
        path: impl Into<PropertyPath<'p>>,
        default: &'a Value,
    ) -> &'a Value {
        self.resolve(root, &path.into(), Some(default))
    }

    /// Resolves `path` against `root`.
    ///
    /// Traversal stops at the first `null` or `undefined` cursor. The result
    /// is then `default`, unless it is `None` or `undefined`, in which case
    /// the absent value itself is returned. A `null` root or an unusable path
    /// yields `default` or `undefined`. Falsy values such as `0`, `false` and
    /// `""` are present and returned as is.
    pub fn resolve<'a>(
        &self,
        root: &'a Value,
        path: &PropertyPath<'_>,
        default: Option<&'a Value>,
    ) -> &'a Value {
        let default = default.filter(|d| !d.is_undefined());

        if root.is_absent() || !path.is_usable() {
            trace!(?path, "nothing to traverse");
            return default.unwrap_or(&Value::Undefined);
        }

        let found = match path {
            PropertyPath::Dotted(p) => self.walk_dotted(root, p),
            PropertyPath::Key(k) => lookup(root, k),
            PropertyPath::Segments(keys) => walk_keys(root, keys),
            PropertyPath::Invalid => &Value::Undefined,
        };

        match default {
            Some(d) if found.is_absent() => d,
            _ => found,
        }
    }

    fn walk_dotted<'a>(&self, root: &'a Value, path: &str) -> &'a Value {
        let separator = self.config.separator;
        if !path.contains(separator) {
            return self.step(root, path);
        }

        let mut cursor = root;
        for segment in path.split(separator) {
            cursor = self.step(cursor, segment);
            if cursor.is_absent() {
                trace!(path, segment, "segment resolved to absence");
                break;
            }
        }
        cursor
    }

    fn step<'a>(&self, cursor: &'a Value, segment: &str) -> &'a Value {
        if self.config.bracket_indices {
            if let Some((field, indices)) = path::split_brackets(segment) {
                let mut cursor = match field {
                    "" => cursor,
                    _ => lookup_name(cursor, field),
                };
                for index in indices {
                    if cursor.is_absent() {
                        break;
                    }
                    cursor = lookup_name(cursor, index);
                }
                return cursor;
            }
        }
        lookup_name(cursor, segment)
    }
}

fn walk_keys<'a>(root: &'a Value, keys: &[Value]) -> &'a Value {
    let mut cursor = root;
    for key in keys {
        cursor = lookup(cursor, key);
        if cursor.is_absent() {
            trace!(%key, "key resolved to absence");
            break;
        }
    }
    cursor
}

/// Value at `path` in `root`, using `.` as separator.
///
/// ```text
/// get({"a": [{"b": {"c": 3}}]}, "a.0.b.c") => 3
/// get({"a": {"b": null}}, "a.b")           => null
/// get(null, "a")                           => undefined
/// ```
pub fn get<'a, 'p>(root: &'a Value, path: impl Into<PropertyPath<'p>>) -> &'a Value {
    DEFAULT_RESOLVER.get(root, path)
}

/// Value at `path` in `root`, or `default` when it is `null` or `undefined`.
pub fn get_or<'a, 'p>(
    root: &'a Value,
    path: impl Into<PropertyPath<'p>>,
    default: &'a Value,
) -> &'a Value {
    DEFAULT_RESOLVER.get_or(root, path, default)
}

/// See [`Resolver::resolve`].
pub fn resolve<'a, 'p>(
    root: &'a Value,
    path: impl Into<PropertyPath<'p>>,
    default: Option<&'a Value>,
) -> &'a Value {
    DEFAULT_RESOLVER.resolve(root, &path.into(), default)
}

/// Single level lookup of `key` in `cursor`.
///
/// Objects are searched for the key itself and then for its text form, so
/// that `0` and `"0"` address the same entry. Arrays accept integral numbers
/// and canonical index strings. Everything else has no entries.
pub(crate) fn lookup<'a>(cursor: &'a Value, key: &Value) -> &'a Value {
    match (cursor, key) {
        (_, Value::String(name)) => lookup_name(cursor, name),
        (Value::Object(fields), _) => match fields.get(key) {
            Some(v) => v,
            None => match key.to_key_string() {
                Some(name) => fields
                    .get(&Value::from(name))
                    .unwrap_or(&Value::Undefined),
                None => &Value::Undefined,
            },
        },
        (Value::Array(items), Value::Number(n)) => n
            .as_index()
            .and_then(|i| items.get(i))
            .unwrap_or(&Value::Undefined),
        _ => &Value::Undefined,
    }
}

/// Single level lookup of a textual key in `cursor`.
pub(crate) fn lookup_name<'a>(cursor: &'a Value, name: &str) -> &'a Value {
    match cursor {
        Value::Object(fields) => match fields.get(&Value::from(name)) {
            Some(v) => v,
            None => match key_from_name(name) {
                Some(key) => fields.get(&key).unwrap_or(&Value::Undefined),
                None => &Value::Undefined,
            },
        },
        Value::Array(items) => path::parse_index(name)
            .and_then(|i| items.get(i))
            .unwrap_or(&Value::Undefined),
        _ => &Value::Undefined,
    }
}

// Non-string key whose text form is exactly `name`.
fn key_from_name(name: &str) -> Option<Value> {
    let key = match name {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::Number(name.parse().ok()?),
    };
    match key.to_key_string() {
        Some(text) if text == name => Some(key),
        _ => None,
    }
}
