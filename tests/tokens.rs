use prose_theme::{
    HEADINGS_VAR, StyleNode, ThemeError, TokenTable, build_theme_config,
};

fn test_palette() -> TokenTable {
    TokenTable::new()
        .with("colors.orange.DEFAULT", "#FF6A00")
        .with("colors.gray.400", "#9CA3AF")
}

#[test]
fn test_link_and_hover_share_resolved_color() {
    let config = build_theme_config(&test_palette()).unwrap();
    let css = config.default_variant().unwrap().css();

    let link = css.get("a").and_then(StyleNode::as_nested).unwrap();
    let color = link.declarations().get("color").unwrap();
    let hover_color = link
        .child("&:hover")
        .and_then(StyleNode::as_leaf)
        .unwrap()
        .get("color")
        .unwrap();

    assert_eq!(color.as_text(), Some("#FF6A00"));
    assert_eq!(color, hover_color);
}

#[test]
fn test_gray_borders_byte_identical() {
    let config = build_theme_config(&test_palette()).unwrap();
    let css = config.default_variant().unwrap().css();

    let cell_border = css
        .get("th,td")
        .and_then(StyleNode::as_leaf)
        .unwrap()
        .get("borderLeft")
        .unwrap();
    let row_border = css
        .get("tr")
        .and_then(StyleNode::as_nested)
        .unwrap()
        .declarations()
        .get("borderBottom")
        .unwrap();

    assert_eq!(cell_border.as_text(), Some("1px solid #9CA3AF"));
    assert_eq!(cell_border, row_border);
}

#[test]
fn test_grouped_heading_levels_share_constants() {
    // Literal constants: any resolver gives the same grouped values.
    let echo = |path: &str| Ok::<_, ThemeError>(path.to_string());
    let config = build_theme_config(&echo).unwrap();
    let css = config.default_variant().unwrap().css();

    let grouped = css.get("h3, h4, h5").and_then(StyleNode::as_leaf).unwrap();
    assert_eq!(grouped.get("fontSize").unwrap().to_string(), "16px");
    assert_eq!(grouped.get("lineHeight").unwrap().to_string(), "150%");

    let h1 = css.get("h1").and_then(StyleNode::as_leaf).unwrap();
    let h2 = css.get("h2").and_then(StyleNode::as_leaf).unwrap();
    assert_eq!(h1.get("fontSize").unwrap().to_string(), "40px");
    assert_eq!(h2.get("fontSize").unwrap().to_string(), "32px");
    assert_ne!(h1.get("fontSize"), h2.get("fontSize"));
}

#[test]
fn test_heading_anchor_binds_custom_property() {
    // Even a resolver that maps everything to one loud color never reaches
    // the heading-anchor rule: it binds the custom property symbolically.
    let loud = |_: &str| Ok::<_, ThemeError>("#123456".to_string());
    let config = build_theme_config(&loud).unwrap();
    let css = config.default_variant().unwrap().css();

    let anchors = css
        .get("h1 > a, h2 > a, h3 > a, h4 > a, h5 > a, h6 > a")
        .and_then(StyleNode::as_nested)
        .unwrap();
    let color = anchors.declarations().get("color").unwrap();
    let hover_color = anchors
        .child("&:hover")
        .and_then(StyleNode::as_leaf)
        .unwrap()
        .get("color")
        .unwrap();

    assert_eq!(color.as_text(), Some(HEADINGS_VAR));
    assert_eq!(hover_color.as_text(), Some(HEADINGS_VAR));
    assert_ne!(color.as_text(), Some("#123456"));
}

#[test]
fn test_cell_color_matches_anchor_custom_property() {
    let config = build_theme_config(&test_palette()).unwrap();
    let css = config.default_variant().unwrap().css();

    let cell_color = css
        .get("th,td")
        .and_then(StyleNode::as_leaf)
        .unwrap()
        .get("color")
        .unwrap();
    assert_eq!(cell_color.as_text(), Some(HEADINGS_VAR));
}

#[test]
fn test_resolver_error_propagates() {
    let failing = |path: &str| {
        Err::<String, _>(ThemeError::UnknownToken { path: path.to_string() })
    };
    let err = build_theme_config(&failing).unwrap_err();
    assert_eq!(
        err,
        ThemeError::UnknownToken { path: "colors.orange.DEFAULT".into() }
    );
}

#[test]
fn test_default_palette_builds() {
    let config = build_theme_config(&TokenTable::tailwind_defaults()).unwrap();
    let css = config.default_variant().unwrap().css();

    let link = css.get("a").and_then(StyleNode::as_nested).unwrap();
    assert_eq!(link.declarations().get("color").unwrap().to_string(), "#f97316");

    let row = css.get("tr").and_then(StyleNode::as_nested).unwrap();
    assert_eq!(
        row.declarations().get("borderBottom").unwrap().to_string(),
        "1px solid #9ca3af"
    );
}
