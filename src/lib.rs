//! # prose-theme
//!
//! Typography theme configuration for utility-CSS pipelines.
//!
//! This crate builds the style tree a "prose" content region renders with:
//! link colors, a heading scale, heading-anchor treatment, and table rules.
//! It produces configuration data only; parsing, cascade, and CSS emission
//! belong to the consuming engine.
//!
//! Color values are not hard-coded. The factory takes a [`TokenResolver`]
//! and looks up dotted token paths (`colors.orange.DEFAULT`) at build time,
//! so the same rules follow whatever palette the host pipeline injects.
//!
//! ## Quick Start
//!
//! ```rust
//! use prose_theme::{build_theme_config, StyleNode, TokenTable};
//!
//! let tokens = TokenTable::tailwind_defaults();
//! let config = build_theme_config(&tokens).expect("default palette covers all tokens");
//!
//! let css = config.default_variant().unwrap().css();
//! let link = css.get("a").and_then(StyleNode::as_nested).unwrap();
//! assert_eq!(link.declarations().get("color").unwrap().to_string(), "#f97316");
//! ```
//!
//! ## Structure
//!
//! The tree is an explicit tagged structure: every node is either a
//! [`StyleNode::Leaf`] of ordered declarations or a [`StyleNode::Nested`]
//! rule with declarations plus child nodes keyed by selector suffix
//! (`&:hover`, `:first-child`). Insertion order is preserved throughout
//! because the consuming engine's override semantics depend on it.
//!
//! ## Modules
//!
//! - [`prose`]: the theme factory and its options
//! - [`tree`]: the style tree data model
//! - [`resolver`]: token resolution ([`TokenTable`] and closure resolvers)
//! - [`lint`]: duplicate-declaration reporting
//! - [`error`]: error types

pub mod error;
pub mod lint;
pub mod prose;
pub mod resolver;
pub mod tree;

pub use error::ThemeError;
pub use lint::{Lint, lints};
pub use prose::{
    ACCENT_TOKEN, HEADINGS_VAR, ProseOptions, RULE_TOKEN, build_theme_config,
    build_theme_config_with,
};
pub use resolver::{TokenResolver, TokenTable};
pub use tree::{
    DeclarationBlock, DuplicateProperty, ProseConfig, ProseVariant, RuleSet, Selector,
    SelectorKind, StyleNode, StyleRule, Value,
};
