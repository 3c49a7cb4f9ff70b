// Host-side tests for canvas sizing, skill bar parsing and asset URI resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/layout.rs"]
mod layout;

use galaxy_core::{ParamKey, ParamValue, Rgb};
use layout::*;

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(pixel_ratio(1.0), 1.0);
    assert_eq!(pixel_ratio(1.25), 1.25);
    assert_eq!(pixel_ratio(3.0), 2.0);
}

#[test]
fn pixel_ratio_garbage_reads_as_one() {
    assert_eq!(pixel_ratio(0.0), 1.0);
    assert_eq!(pixel_ratio(-2.0), 1.0);
    assert_eq!(pixel_ratio(f64::NAN), 1.0);
    assert_eq!(pixel_ratio(f64::INFINITY), 1.0);
}

#[test]
fn backing_size_scales_css_box() {
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN), (100, 50));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
    assert_eq!(backing_size(-10.0, 20.0, 2.0), (1, 40));
}

#[test]
fn progress_attribute_parsing() {
    assert!((progress_fraction(Some("75")) - 0.75).abs() < 1e-12);
    assert!((progress_fraction(Some(" 40 ")) - 0.4).abs() < 1e-12);
    assert_eq!(progress_fraction(Some("100")), 1.0);
    assert_eq!(progress_fraction(None), 0.0);
    assert_eq!(progress_fraction(Some("abc")), 0.0);
    assert_eq!(progress_fraction(Some("")), 0.0);
    assert_eq!(progress_fraction(Some("NaN")), 0.0);
}

#[test]
fn gui_needs_more_than_300px() {
    assert!(!gui_enabled(200.0));
    assert!(!gui_enabled(300.0));
    assert!(gui_enabled(301.0));
    assert!(gui_enabled(1920.0));
}

#[test]
fn sibling_files_resolve_next_to_the_model() {
    let base = "/models/planet/planet/scene.gltf";
    assert_eq!(resolve_uri(base, "scene.bin"), "/models/planet/planet/scene.bin");
    assert_eq!(resolve_uri(base, "./scene.bin"), "/models/planet/planet/scene.bin");
    assert_eq!(
        resolve_uri(base, "textures/Material_baseColor.png"),
        "/models/planet/planet/textures/Material_baseColor.png"
    );
}

#[test]
fn parent_segments_stop_at_the_root() {
    assert_eq!(resolve_uri("/a/b/scene.gltf", "../tex/x.png"), "/a/tex/x.png");
    assert_eq!(resolve_uri("/a/scene.gltf", "../../x.png"), "/x.png");
}

#[test]
fn absolute_references_pass_through() {
    let base = "/models/planet/planet/scene.gltf";
    assert_eq!(resolve_uri(base, "https://cdn.example/x.bin"), "https://cdn.example/x.bin");
    assert_eq!(resolve_uri(base, "/textures/x.png"), "/textures/x.png");
    assert_eq!(
        resolve_uri(base, "data:application/octet-stream;base64,AAAA"),
        "data:application/octet-stream;base64,AAAA"
    );
}

#[test]
fn bare_base_resolves_relative_to_page() {
    assert_eq!(resolve_uri("scene.gltf", "scene.bin"), "scene.bin");
}

#[test]
fn readout_text() {
    assert_eq!(format_param_value(ParamValue::Number(100000.0)), "100000");
    assert_eq!(format_param_value(ParamValue::Number(0.01)), "0.01");
    assert_eq!(format_param_value(ParamValue::Number(0.2)), "0.2");
    assert_eq!(format_param_value(ParamValue::Number(-1.5)), "-1.5");
    assert_eq!(format_param_value(ParamValue::Number(0.0)), "0");
    let inside = Rgb::from_hex("#ff6030").unwrap();
    assert_eq!(format_param_value(ParamValue::Color(inside)), "#ff6030");
}

#[test]
fn canvas_covers_window_not_its_own_box() {
    let size = canvas_size(1280.0, 720.0, 2.0);
    assert_eq!((size.css_width, size.css_height), (1280.0, 720.0));
    assert_eq!((size.backing_width, size.backing_height), (2560, 1440));
}

#[test]
fn canvas_size_is_stable_across_repeated_resizes() {
    // same window, same result: the backing store never feeds back into the CSS size
    let first = canvas_size(300.0, 150.0, 2.0);
    let second = canvas_size(300.0, 150.0, 2.0);
    assert_eq!(first, second);
    assert_eq!((first.backing_width, first.backing_height), (600, 300));
    assert_eq!(canvas_size(800.0, 600.0, 3.0).backing_width, 1600);
}

#[test]
fn only_not_allowed_counts_as_autoplay_refusal() {
    assert!(is_autoplay_refusal(Some("NotAllowedError")));
    assert!(!is_autoplay_refusal(Some("AbortError")));
    assert!(!is_autoplay_refusal(Some("NotSupportedError")));
    assert!(!is_autoplay_refusal(None));
}

#[test]
fn panel_range_strings_parse_as_numbers() {
    assert_eq!(parse_param_input(ParamKey::Count, "100000"), Some(ParamValue::Number(100000.0)));
    assert_eq!(parse_param_input(ParamKey::Size, " 0.01 "), Some(ParamValue::Number(0.01)));
    assert_eq!(parse_param_input(ParamKey::Spin, "-1.5"), Some(ParamValue::Number(-1.5)));
    assert_eq!(parse_param_input(ParamKey::Radius, ""), None);
    assert_eq!(parse_param_input(ParamKey::Branches, "three"), None);
    assert_eq!(parse_param_input(ParamKey::Randomness, "inf"), None);
}

#[test]
fn panel_color_strings_parse_as_hex() {
    let inside = Rgb::from_hex("#ff6030").unwrap();
    assert_eq!(
        parse_param_input(ParamKey::InsideColor, "#ff6030"),
        Some(ParamValue::Color(inside))
    );
    assert_eq!(parse_param_input(ParamKey::OutsideColor, "#zzzzzz"), None);
    // a number is not a color and a color is not a number
    assert_eq!(parse_param_input(ParamKey::OutsideColor, "12"), None);
    assert_eq!(parse_param_input(ParamKey::Count, "#ff6030"), None);
}
