// Host-side tests for the page configuration defaults.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::PageConfig;

#[test]
fn defaults_match_page_markup() {
    let c = PageConfig::default();
    assert_eq!(c.canvas_selector, "canvas.webgl");
    assert_eq!(c.audio_id, "backgroundSound");
    assert_eq!(c.model_container_id, "model-container");
    assert_eq!(c.skill_selector, ".skill");
    assert_eq!(c.progress_selector, ".progress");
    assert_eq!(c.progress_attribute, "data-progress");
    assert_eq!(c.progress_property, "--progress");
}

#[test]
fn model_url_points_at_planet_scene() {
    let c = PageConfig::default();
    assert_eq!(c.model_url, galaxy_core::MODEL_URL);
    assert!(c.model_url.ends_with(".gltf"));
}
