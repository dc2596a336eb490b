//! Style configuration tree.
//!
//! The tree is an explicit tagged structure rather than a loose
//! string-keyed object: a [`StyleNode`] is either a [`Leaf`](StyleNode::Leaf)
//! holding a [`DeclarationBlock`], or [`Nested`](StyleNode::Nested) holding a
//! [`StyleRule`] with its own declarations and child nodes keyed by
//! [`Selector`]. Consumers walk the tags instead of sniffing key prefixes.
//!
//! Ordering is load-bearing everywhere: declaration and selector maps
//! preserve insertion order, and a property declared twice keeps the later
//! value (the earlier one is recorded as a duplicate, see
//! [`DeclarationBlock::duplicates`]).

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;

/// A single declaration value: raw text or a unitless number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text value, e.g. `"40px"` or `"1px solid #9ca3af"`.
    Text(String),
    /// Numeric value, e.g. a `400` font weight.
    Number(f64),
}

impl Value {
    /// Returns the text content, or `None` for numeric values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

/// Classification of a selector key within a rule map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Plain element/compound selector, e.g. `a` or `h1 > a, h2 > a`.
    Element,
    /// Parent suffix, e.g. `&:hover` (applies to the enclosing selector).
    Parent,
    /// Bare pseudo-class, e.g. `:first-child`.
    Pseudo,
}

/// A selector expression used as a key in the style tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the selector by its leading character.
    pub fn kind(&self) -> SelectorKind {
        match self.0.as_bytes().first() {
            Some(b'&') => SelectorKind::Parent,
            Some(b':') => SelectorKind::Pseudo,
            _ => SelectorKind::Element,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::new(s)
    }
}

impl Borrow<str> for Selector {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Record of a property declared more than once within one block.
///
/// The later value wins in the built configuration; the record exists so a
/// lint pass can surface the conflict instead of it vanishing silently.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateProperty {
    pub property: String,
    pub earlier: Value,
    pub later: Value,
}

/// An ordered property → value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationBlock {
    properties: IndexMap<String, Value>,
    duplicates: Vec<DuplicateProperty>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property. Re-declaring an existing property keeps the new
    /// value, records a [`DuplicateProperty`], and logs a warning.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        let property = property.into();
        let value = value.into();
        if let Some(earlier) = self.properties.get(&property) {
            log::warn!(
                "duplicate declaration of `{property}`: `{earlier}` overridden by `{value}`"
            );
            self.duplicates.push(DuplicateProperty {
                property: property.clone(),
                earlier: earlier.clone(),
                later: value.clone(),
            });
        }
        self.properties.insert(property, value);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(property, value);
        self
    }

    /// Looks up the effective value of a property.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    /// Iterates properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Duplicate-declaration records, in the order they occurred.
    pub fn duplicates(&self) -> &[DuplicateProperty] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A node in the style tree: plain declarations, or a rule that nests.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleNode {
    Leaf(DeclarationBlock),
    Nested(StyleRule),
}

impl StyleNode {
    pub fn as_leaf(&self) -> Option<&DeclarationBlock> {
        match self {
            StyleNode::Leaf(block) => Some(block),
            StyleNode::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&StyleRule> {
        match self {
            StyleNode::Nested(rule) => Some(rule),
            StyleNode::Leaf(_) => None,
        }
    }

    /// The node's own declarations, for either variant.
    pub fn declarations(&self) -> &DeclarationBlock {
        match self {
            StyleNode::Leaf(block) => block,
            StyleNode::Nested(rule) => rule.declarations(),
        }
    }
}

/// A rule carrying its own declarations plus child nodes keyed by selector
/// suffix (`&:hover`, `:first-child`, descendant selectors).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRule {
    declarations: DeclarationBlock,
    children: IndexMap<Selector, StyleNode>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property on the rule's own declaration block.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.declarations.set(property, value);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(property, value);
        self
    }

    /// Adds a child node under a selector suffix.
    pub fn add_child(&mut self, selector: impl Into<Selector>, node: StyleNode) {
        self.children.insert(selector.into(), node);
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn with_child(mut self, selector: impl Into<Selector>, node: StyleNode) -> Self {
        self.add_child(selector, node);
        self
    }

    pub fn declarations(&self) -> &DeclarationBlock {
        &self.declarations
    }

    pub fn child(&self, selector: &str) -> Option<&StyleNode> {
        self.children.get(selector)
    }

    /// Iterates child nodes in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&Selector, &StyleNode)> {
        self.children.iter()
    }
}

/// An ordered selector → node mapping, the body of one variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: IndexMap<Selector, StyleNode>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule. Selector keys are unique; re-inserting replaces.
    pub fn insert(&mut self, selector: impl Into<Selector>, node: StyleNode) {
        self.rules.insert(selector.into(), node);
    }

    pub fn get(&self, selector: &str) -> Option<&StyleNode> {
        self.rules.get(selector)
    }

    /// Selector keys in insertion order.
    pub fn selectors(&self) -> Vec<&str> {
        self.rules.keys().map(Selector::as_str).collect()
    }

    /// Iterates rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &StyleNode)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One named variant of the prose styles, wrapping the rule tree for the
/// styled content region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProseVariant {
    css: RuleSet,
}

impl ProseVariant {
    pub fn new(css: RuleSet) -> Self {
        Self { css }
    }

    /// The rule tree applied to the styled content region.
    pub fn css(&self) -> &RuleSet {
        &self.css
    }
}

/// Root configuration: an ordered variant-name → variant mapping.
///
/// Built once per evaluation pass and handed to the consuming engine; there
/// is no mutation after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProseConfig {
    variants: IndexMap<String, ProseVariant>,
}

impl ProseConfig {
    /// The well-known variant every configuration carries.
    pub const DEFAULT_VARIANT: &'static str = "DEFAULT";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_variant(&mut self, name: impl Into<String>, variant: ProseVariant) {
        self.variants.insert(name.into(), variant);
    }

    pub fn variant(&self, name: &str) -> Option<&ProseVariant> {
        self.variants.get(name)
    }

    /// Shorthand for the [`DEFAULT_VARIANT`](Self::DEFAULT_VARIANT) entry.
    pub fn default_variant(&self) -> Option<&ProseVariant> {
        self.variant(Self::DEFAULT_VARIANT)
    }

    /// Iterates variants in insertion order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &ProseVariant)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v))
    }
}
