use prose_theme::{
    Lint, ProseOptions, StyleNode, ThemeError, build_theme_config, build_theme_config_with, lints,
};

fn stub(_: &str) -> Result<String, ThemeError> {
    Ok("#FF6A00".to_string())
}

#[test]
fn test_alpha_list_markers_off_by_default() {
    let config = build_theme_config(&stub).unwrap();
    let css = config.default_variant().unwrap().css();
    assert!(css.get("ol > li").is_none());
    assert!(css.get("ol > li > p:first-of-type").is_none());
}

#[test]
fn test_alpha_list_markers_opt_in() {
    let options = ProseOptions::new().with_alpha_list_markers(true);
    let config = build_theme_config_with(&stub, &options).unwrap();
    let css = config.default_variant().unwrap().css();

    let item = css.get("ol > li").and_then(StyleNode::as_nested).unwrap();
    assert_eq!(
        item.declarations().get("counterIncrement").unwrap().to_string(),
        "listStyle"
    );

    let marker = item
        .child("&:before")
        .and_then(StyleNode::as_leaf)
        .expect("&:before is a leaf");
    assert_eq!(
        marker.get("content").unwrap().to_string(),
        "counter(listStyle, upper-alpha)"
    );
    // The marker takes the same accent the plain link rule resolved.
    assert_eq!(marker.get("color").unwrap().to_string(), "#FF6A00");
    assert_eq!(marker.get("fontSize").unwrap().to_string(), "40px");

    let first_paragraph = css
        .get("ol > li > p:first-of-type")
        .and_then(StyleNode::as_leaf)
        .unwrap();
    assert_eq!(first_paragraph.get("marginTop").unwrap().to_string(), ".75rem");
}

#[test]
fn test_options_do_not_disturb_base_selectors() {
    let base = build_theme_config(&stub).unwrap();
    let options = ProseOptions::new().with_alpha_list_markers(true);
    let extended = build_theme_config_with(&stub, &options).unwrap();

    let base_selectors = base.default_variant().unwrap().css().selectors();
    let extended_selectors = extended.default_variant().unwrap().css().selectors();
    assert_eq!(&extended_selectors[..base_selectors.len()], &base_selectors[..]);
    assert_eq!(extended_selectors.len(), base_selectors.len() + 2);
}

#[test]
fn test_duplicate_margin_bottom_is_flagged() {
    let config = build_theme_config(&stub).unwrap();
    let css = config.default_variant().unwrap().css();

    // Last write wins in the effective block...
    let headings = css
        .get("h1, h2, h3, h4, h5, h6")
        .and_then(StyleNode::as_leaf)
        .unwrap();
    assert_eq!(headings.get("marginBottom").unwrap().to_string(), "21px");

    // ...but the conflict is reported rather than silently resolved.
    let findings = lints(&config);
    assert_eq!(findings.len(), 1);
    match &findings[0] {
        Lint::DuplicateProperty { selector, property, earlier, later } => {
            assert!(selector.contains("h1, h2, h3, h4, h5, h6"));
            assert_eq!(property, "marginBottom");
            assert_eq!(earlier.to_string(), "42px");
            assert_eq!(later.to_string(), "21px");
        }
    }
}

#[test]
fn test_lint_message_names_the_conflict() {
    let config = build_theme_config(&stub).unwrap();
    let findings = lints(&config);
    let message = findings[0].to_string();
    assert!(message.contains("marginBottom"));
    assert!(message.contains("42px"));
    assert!(message.contains("21px"));
}
