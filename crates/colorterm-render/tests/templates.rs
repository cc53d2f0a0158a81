//! Rendering through the public API with bundled and overridden templates.

use std::fs;

use colorterm_render::{
    render_target, Alacritty, Hyper, Iterm, Kitty, Palette, RenderError, Renderer, Role,
    TemplateRegistry, ThemeTarget, Warp,
};
use tempfile::TempDir;

fn palette() -> Palette {
    Palette::new()
        .with(Role::Foreground, "rgba(255,255,255,1)")
        .with(Role::Background, "rgba(0,0,0,1)")
        .with(Role::Link, "rgba(10,20,30,1)")
        .with(Role::Selected, "rgba(40,50,60,1)")
        .with(Role::SelectedText, "rgba(70,80,90,1)")
}

// ============================================================================
// Bundled templates
// ============================================================================

#[test]
fn every_target_renders_with_bundled_templates() {
    let renderer = Renderer::new().unwrap();
    let p = palette();

    let docs = [
        render_target::<Iterm>(&p, &renderer).unwrap(),
        render_target::<Warp>(&p, &renderer).unwrap(),
        render_target::<Hyper>(&p, &renderer).unwrap(),
        render_target::<Kitty>(&p, &renderer).unwrap(),
        render_target::<Alacritty>(&p, &renderer).unwrap(),
    ];

    for doc in &docs {
        assert!(!doc.is_empty(), "{} is empty", doc.file_name());
        assert!(doc.content().ends_with('\n'), "{} lacks final newline", doc.file_name());
    }
}

#[test]
fn iterm_foreground_red_is_one() {
    let renderer = Renderer::new().unwrap();
    let doc = render_target::<Iterm>(&palette(), &renderer).unwrap();
    let content = doc.content();

    let start = content.find("<key>Foreground Color</key>").unwrap();
    let section = &content[start..];
    let red = section.find("<key>Red Component</key>").unwrap();
    let value = section[red..].lines().nth(1).unwrap().trim();
    assert_eq!(value, "<real>1.0</real>");
}

#[test]
fn validating_targets_fail_without_link() {
    let renderer = Renderer::new().unwrap();
    let mut p = palette();
    p.link = None;

    assert!(render_target::<Iterm>(&p, &renderer).is_err());
    assert!(render_target::<Warp>(&p, &renderer).is_err());
    assert!(render_target::<Kitty>(&p, &renderer).is_err());
    assert!(render_target::<Alacritty>(&p, &renderer).is_err());
    assert!(render_target::<Hyper>(&p, &renderer).is_ok());
}

#[test]
fn overlong_channel_fails_instead_of_rendering() {
    let renderer = Renderer::new().unwrap();
    let token = format!("rgba({}, 0, 0, 1)", "9".repeat(400));
    let p = palette().with(Role::Foreground, token);

    let err = render_target::<Iterm>(&p, &renderer).unwrap_err();
    assert!(err.is_input_error());
    assert!(render_target::<Warp>(&p, &renderer).is_err());
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
fn directory_override_replaces_one_target() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(Warp::TEMPLATE),
        "bg={{ background }} fg={{ foreground }} accent={{ accent }}\n",
    )
    .unwrap();

    let mut registry = TemplateRegistry::embedded();
    assert_eq!(registry.add_template_dir(dir.path()).unwrap(), 1);
    let renderer = Renderer::from_registry(&registry).unwrap();

    let warp = render_target::<Warp>(&palette(), &renderer).unwrap();
    assert_eq!(warp.content(), "bg=#000000 fg=#ffffff accent=#0a141e\n");

    // Untouched targets keep the bundled template.
    let kitty = render_target::<Kitty>(&palette(), &renderer).unwrap();
    assert!(kitty.content().contains("url_color"));
}

#[test]
fn override_can_use_hex_filters_on_raw_channels() {
    let mut registry = TemplateRegistry::new();
    registry.add_inline(
        Iterm::TEMPLATE,
        "{{ selected.raw | hex }} {{ selected_text.raw | hex_rgba }}",
    );
    let renderer = Renderer::from_registry(&registry).unwrap();
    let doc = render_target::<Iterm>(&palette(), &renderer).unwrap();
    assert_eq!(doc.content(), "#28323c #46505aff");
}

#[test]
fn missing_template_is_a_hard_error() {
    let mut registry = TemplateRegistry::new();
    registry.add_inline(Warp::TEMPLATE, "only warp");
    let renderer = Renderer::from_registry(&registry).unwrap();

    let err = render_target::<Kitty>(&palette(), &renderer).unwrap_err();
    assert!(matches!(err, RenderError::TemplateNotFound(_)));
    assert!(!err.is_input_error());
}
