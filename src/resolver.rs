//! Design-token resolution.
//!
//! Style rules reference themable values through dotted token paths
//! (`colors.orange.DEFAULT`) instead of literal colors. A [`TokenResolver`]
//! turns a path into a concrete value at configuration-build time; the
//! factory borrows it for one call and never retains it, so swapping
//! resolvers swaps palettes.
//!
//! Two implementations ship with the crate:
//!
//! - any `Fn(&str) -> Result<String, ThemeError>` closure, handy for tests
//! - [`TokenTable`], a map-backed resolver with an optional built-in palette

use std::collections::HashMap;

use crate::error::ThemeError;

/// Capability for resolving a dotted token path to a concrete value.
///
/// Implementations must be referentially transparent within one
/// configuration build: the same path always yields the same value.
pub trait TokenResolver {
    /// Resolves `path` to a value, or fails if the path is unknown.
    fn resolve(&self, path: &str) -> Result<String, ThemeError>;
}

impl<F> TokenResolver for F
where
    F: Fn(&str) -> Result<String, ThemeError>,
{
    fn resolve(&self, path: &str) -> Result<String, ThemeError> {
        self(path)
    }
}

/// Default palette entries, keyed by full token path.
///
/// Covers the gray and orange scales referenced by the prose rules so the
/// crate works standalone without a host pipeline supplying tokens.
static DEFAULT_TOKENS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "colors.gray.50" => "#f9fafb",
    "colors.gray.100" => "#f3f4f6",
    "colors.gray.200" => "#e5e7eb",
    "colors.gray.300" => "#d1d5db",
    "colors.gray.400" => "#9ca3af",
    "colors.gray.500" => "#6b7280",
    "colors.gray.600" => "#4b5563",
    "colors.gray.700" => "#374151",
    "colors.gray.800" => "#1f2937",
    "colors.gray.900" => "#111827",
    "colors.orange.50" => "#fff7ed",
    "colors.orange.100" => "#ffedd5",
    "colors.orange.200" => "#fed7aa",
    "colors.orange.300" => "#fdba74",
    "colors.orange.400" => "#fb923c",
    "colors.orange.500" => "#f97316",
    "colors.orange.600" => "#ea580c",
    "colors.orange.700" => "#c2410c",
    "colors.orange.800" => "#9a3412",
    "colors.orange.900" => "#7c2d12",
    "colors.orange.DEFAULT" => "#f97316",
};

/// Map-backed token storage.
///
/// Tokens are defined up front and resolved by full dotted path. Unknown
/// paths fail with [`ThemeError::UnknownToken`] rather than falling back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    tokens: HashMap<String, String>,
}

impl TokenTable {
    /// Creates an empty token table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-populated with the default gray/orange palette.
    pub fn tailwind_defaults() -> Self {
        let mut table = Self::new();
        for (path, value) in DEFAULT_TOKENS.entries() {
            table.define(*path, *value);
        }
        table
    }

    /// Defines (or overrides) a token at the given dotted path.
    pub fn define(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(path.into(), value.into());
    }

    /// Builder form of [`define`](Self::define).
    pub fn with(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.define(path, value);
        self
    }

    /// Returns the number of defined tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenResolver for TokenTable {
    fn resolve(&self, path: &str) -> Result<String, ThemeError> {
        self.tokens
            .get(path)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownToken { path: path.to_string() })
    }
}
