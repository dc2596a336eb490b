//! Error types for theme configuration building.
//!
//! The factory itself never fails: every error originates in the token
//! resolver a caller supplies and is propagated unchanged.

use thiserror::Error;

/// Errors surfaced while resolving design tokens.
///
/// # Examples
///
/// ```rust
/// use prose_theme::{build_theme_config, ThemeError, TokenTable};
///
/// // An empty table cannot resolve any of the token paths the
/// // prose rules query, so building fails on the first lookup.
/// let result = build_theme_config(&TokenTable::new());
/// assert!(matches!(result, Err(ThemeError::UnknownToken { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A dotted token path had no value in the resolver.
    ///
    /// Raised by [`TokenTable`](crate::TokenTable) lookups; custom resolvers
    /// may raise it for malformed paths as well.
    #[error("unknown token path: {path}")]
    UnknownToken {
        /// The dotted path that failed to resolve, e.g. `colors.gray.400`.
        path: String,
    },
}
