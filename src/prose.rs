//! The prose theme factory.
//!
//! [`build_theme_config`] produces the fixed rule tree for rendered
//! long-form content: links, headings, heading anchors, and tables. Colors
//! come from the injected [`TokenResolver`]; everything else is a literal
//! constant. The function is pure aside from invoking the resolver, and a
//! resolver failure propagates unchanged.

use crate::error::ThemeError;
use crate::resolver::TokenResolver;
use crate::tree::{DeclarationBlock, ProseConfig, ProseVariant, RuleSet, StyleNode, StyleRule};

/// Custom property carrying the heading color, resolved by the consuming
/// engine at render time rather than at configuration-build time.
pub const HEADINGS_VAR: &str = "var(--tw-prose-headings)";

/// Token path for the link/accent color.
pub const ACCENT_TOKEN: &str = "colors.orange.DEFAULT";

/// Token path for table rule (border) color.
pub const RULE_TOKEN: &str = "colors.gray.400";

/// Opt-in extensions to the base prose rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProseOptions {
    /// Number ordered-list items with upper-alphabetic counter markers.
    pub alpha_list_markers: bool,
}

impl ProseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder toggle for alphabetic list markers.
    pub fn with_alpha_list_markers(mut self, enabled: bool) -> Self {
        self.alpha_list_markers = enabled;
        self
    }
}

/// Builds the default prose configuration.
///
/// Equivalent to [`build_theme_config_with`] with default options.
pub fn build_theme_config(resolver: &impl TokenResolver) -> Result<ProseConfig, ThemeError> {
    build_theme_config_with(resolver, &ProseOptions::default())
}

/// Builds the prose configuration with explicit options.
///
/// The returned tree always contains the same selector keys for a given
/// option set, whatever the resolver returns; only resolved color values
/// vary between resolvers.
pub fn build_theme_config_with(
    resolver: &impl TokenResolver,
    options: &ProseOptions,
) -> Result<ProseConfig, ThemeError> {
    let accent = resolver.resolve(ACCENT_TOKEN)?;
    let rule_color = resolver.resolve(RULE_TOKEN)?;

    let mut css = RuleSet::new();

    // Hovering a link keeps its color; only the underline goes away.
    css.insert(
        "a",
        StyleNode::Nested(
            StyleRule::new().with("color", accent.as_str()).with_child(
                "&:hover",
                StyleNode::Leaf(
                    DeclarationBlock::new()
                        .with("color", accent.as_str())
                        .with("textDecoration", "none"),
                ),
            ),
        ),
    );

    // All heading levels share weight and bottom margin. The margin carries
    // two conflicting declarations; both are kept so the duplicate surfaces
    // as a lint instead of disappearing.
    let mut headings = DeclarationBlock::new();
    headings.set("fontWeight", 400);
    headings.set("marginBottom", "42px");
    headings.set("marginBottom", "21px");
    css.insert("h1, h2, h3, h4, h5, h6", StyleNode::Leaf(headings));

    // Anchors nested in headings bind the heading custom property instead
    // of a resolved token, and keep their color on hover.
    css.insert(
        "h1 > a, h2 > a, h3 > a, h4 > a, h5 > a, h6 > a",
        StyleNode::Nested(
            StyleRule::new()
                .with("color", HEADINGS_VAR)
                .with("textDecoration", "none")
                .with_child(
                    "&:hover",
                    StyleNode::Leaf(DeclarationBlock::new().with("color", HEADINGS_VAR)),
                ),
        ),
    );

    css.insert(
        "h1",
        StyleNode::Leaf(
            DeclarationBlock::new()
                .with("fontSize", "40px")
                .with("lineHeight", "120%"),
        ),
    );
    css.insert(
        "h2",
        StyleNode::Leaf(
            DeclarationBlock::new()
                .with("fontSize", "32px")
                .with("lineHeight", "130%"),
        ),
    );
    // Levels 3-5 are one grouped rule so their values cannot drift apart.
    css.insert(
        "h3, h4, h5",
        StyleNode::Leaf(
            DeclarationBlock::new()
                .with("fontSize", "16px")
                .with("lineHeight", "150%"),
        ),
    );

    // The last table in a sequence drops its bottom border.
    css.insert(
        "table",
        StyleNode::Nested(StyleRule::new().with_child(
            ":last-child",
            StyleNode::Leaf(DeclarationBlock::new().with("borderBottom", "none")),
        )),
    );

    css.insert(
        "th,td",
        StyleNode::Leaf(
            DeclarationBlock::new()
                .with("borderLeft", format!("1px solid {rule_color}"))
                .with("textAlign", "center")
                .with("fontSize", "16px")
                .with("fontWeight", "400")
                .with("lineHeight", "150%")
                .with("paddingLeft", "0px")
                .with("color", HEADINGS_VAR)
                .with("maxWidth", "117px"),
        ),
    );

    // Rows carry the horizontal rules; the first cell of a row is the
    // left-aligned label column with no leading border.
    css.insert(
        "tr",
        StyleNode::Nested(
            StyleRule::new()
                .with("borderBottom", format!("1px solid {rule_color}"))
                .with_child(
                    ":first-child",
                    StyleNode::Leaf(
                        DeclarationBlock::new()
                            .with("paddingLeft", "0px")
                            .with("borderLeft", "none")
                            .with("textAlign", "left")
                            .with("minWidth", "156px"),
                    ),
                ),
        ),
    );

    if options.alpha_list_markers {
        add_alpha_list_markers(&mut css, &accent);
    }

    let mut config = ProseConfig::new();
    config.insert_variant(ProseConfig::DEFAULT_VARIANT, ProseVariant::new(css));
    Ok(config)
}

/// Ordered-list items numbered `A.`, `B.`, ... via a CSS counter, with the
/// marker rendered at heading scale in the accent color.
fn add_alpha_list_markers(css: &mut RuleSet, accent: &str) {
    css.insert(
        "ol > li",
        StyleNode::Nested(
            StyleRule::new()
                .with("counterIncrement", "listStyle")
                .with("display", "flex")
                .with("alignItems", "flex-start")
                .with_child(
                    "&:before",
                    StyleNode::Leaf(
                        DeclarationBlock::new()
                            .with("display", "block")
                            .with("paddingRight", "2rem")
                            .with("content", "counter(listStyle, upper-alpha)")
                            .with("color", accent)
                            .with("fontSize", "40px")
                            .with("lineHeight", "120%")
                            .with("fontWeight", "400"),
                    ),
                ),
        ),
    );
    css.insert(
        "ol > li > p:first-of-type",
        StyleNode::Leaf(DeclarationBlock::new().with("marginTop", ".75rem")),
    );
}
