//! End-to-end tests for the `show` command.

mod common;

use std::fs;

use asset_gen::commands::{build, show};
use asset_gen::config::OutputFormat;
use pretty_assertions::assert_eq;

use common::{TestContext, SAMPLE_SOURCE};

#[test]
fn test_show_built_manifest() {
    let ctx = TestContext::new();
    ctx.write_source(SAMPLE_SOURCE);
    build::execute(&ctx.build_args(OutputFormat::Manifest)).unwrap();

    let lines = show::execute(&ctx.show_args()).unwrap();

    assert_eq!(
        lines,
        vec![
            "img/a3.png\t[猴子]".to_string(),
            "img/f1.png\t[草莓 x2] [青梨 x1]".to_string(),
            "img/f2.png\t[香蕉 x5]".to_string(),
        ]
    );
}

#[test]
fn test_show_rejects_bare_array() {
    let ctx = TestContext::new();
    ctx.write_source(SAMPLE_SOURCE);
    build::execute(&ctx.build_args(OutputFormat::Cards)).unwrap();

    let err = show::execute(&ctx.show_args()).unwrap_err();

    assert!(err.to_string().starts_with("failed to load"));
}

#[test]
fn test_show_rejects_out_of_range_variant() {
    let ctx = TestContext::new();
    fs::write(
        ctx.path("asset.json"),
        r#"{
            "meta": {"fruits": [], "animals": []},
            "cards": [{"image": "a.png", "type": "animal", "repeat": 1, "variant": 9}]
        }"#,
    )
    .unwrap();

    assert!(show::execute(&ctx.show_args()).is_err());
}

#[test]
fn test_show_uses_manifest_names() {
    let ctx = TestContext::new();
    fs::write(
        ctx.path("asset.json"),
        r#"{
            "meta": {"fruits": [], "animals": [{"name": "Bunny", "variant": 1}]},
            "cards": [
                {"image": "a.png", "type": "animal", "repeat": 1, "variant": 1},
                {"image": "f.png", "type": "fruit", "repeat": 1, "elements": [{"variant": 2, "number": 4}]}
            ]
        }"#,
    )
    .unwrap();

    let lines = show::execute(&ctx.show_args()).unwrap();

    assert_eq!(lines, vec!["a.png\t[Bunny]".to_string(), "f.png\t[? x4]".to_string()]);
}

#[test]
fn test_show_missing_manifest() {
    let ctx = TestContext::new();
    let err = show::execute(&ctx.show_args()).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}
