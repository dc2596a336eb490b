//! Configuration lints.
//!
//! The tree keeps last-write-wins semantics for duplicated properties, but
//! a duplicate is usually an authoring mistake. [`lints`] walks a built
//! configuration and reports every duplicate-declaration record together
//! with the selector path it occurred under.

use std::fmt;

use crate::tree::{DeclarationBlock, ProseConfig, RuleSet, StyleNode, Value};

/// A finding from the lint pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Lint {
    /// The same property was declared twice within one block.
    DuplicateProperty {
        /// Selector path from the variant root, space-joined.
        selector: String,
        property: String,
        earlier: Value,
        later: Value,
    },
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lint::DuplicateProperty { selector, property, earlier, later } => write!(
                f,
                "duplicate `{property}` under `{selector}`: `{earlier}` overridden by `{later}`"
            ),
        }
    }
}

/// Collects all lint findings from a built configuration.
pub fn lints(config: &ProseConfig) -> Vec<Lint> {
    let mut out = Vec::new();
    for (name, variant) in config.variants() {
        walk_rule_set(name, variant.css(), &mut out);
    }
    out
}

fn walk_rule_set(path: &str, rules: &RuleSet, out: &mut Vec<Lint>) {
    for (selector, node) in rules.iter() {
        let path = format!("{path} {selector}");
        walk_node(&path, node, out);
    }
}

fn walk_node(path: &str, node: &StyleNode, out: &mut Vec<Lint>) {
    match node {
        StyleNode::Leaf(block) => collect_block(path, block, out),
        StyleNode::Nested(rule) => {
            collect_block(path, rule.declarations(), out);
            for (selector, child) in rule.children() {
                let path = format!("{path} {selector}");
                walk_node(&path, child, out);
            }
        }
    }
}

fn collect_block(path: &str, block: &DeclarationBlock, out: &mut Vec<Lint>) {
    for dup in block.duplicates() {
        out.push(Lint::DuplicateProperty {
            selector: path.to_string(),
            property: dup.property.clone(),
            earlier: dup.earlier.clone(),
            later: dup.later.clone(),
        });
    }
}
