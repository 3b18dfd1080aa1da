// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Errors reported when a [`ResolverConfig`](crate::ResolverConfig) cannot be used.
///
/// Path resolution itself never fails; only building a resolver can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The separator collides with bracket index syntax.
    #[error("separator `{0}` cannot be used while bracket indices are enabled")]
    SeparatorIsBracket(char),
}
