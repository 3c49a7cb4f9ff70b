// Host-side tests for glTF flattening and image decoding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/model.rs"]
mod model;

use model::*;

const TRIANGLE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0, "translation": [1.0, 0.0, 0.0] }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "material": 0 }] }],
  "materials": [{ "pbrMetallicRoughness": { "baseColorFactor": [1.0, 0.0, 0.0, 1.0] } }],
  "buffers": [{ "uri": "tri.bin", "byteLength": 36 }],
  "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }],
  "accessors": [{
    "bufferView": 0,
    "componentType": 5126,
    "count": 3,
    "type": "VEC3",
    "min": [0.0, 0.0, 0.0],
    "max": [1.0, 1.0, 0.0]
  }]
}"#;

const TEXTURED_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0 }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "material": 0 }] }],
  "materials": [{ "pbrMetallicRoughness": { "baseColorTexture": { "index": 0 } } }],
  "textures": [{ "source": 0 }],
  "images": [{ "uri": "tex.png" }],
  "buffers": [{ "uri": "tri.bin", "byteLength": 36 }],
  "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }],
  "accessors": [{
    "bufferView": 0,
    "componentType": 5126,
    "count": 3,
    "type": "VEC3",
    "min": [0.0, 0.0, 0.0],
    "max": [1.0, 1.0, 0.0]
  }]
}"#;

fn triangle_bytes() -> Vec<u8> {
    [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        .iter()
        .flat_map(|f| f.to_le_bytes())
        .collect()
}

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn lists_external_buffer_uris() {
    let gltf = parse(TRIANGLE_GLTF.as_bytes()).unwrap();
    assert_eq!(buffer_uris(&gltf.document), vec![Some("tri.bin".to_string())]);
    assert!(image_uris(&gltf.document).is_empty());
}

#[test]
fn flattens_triangle_into_world_space() {
    let gltf = parse(TRIANGLE_GLTF.as_bytes()).unwrap();
    let external = ExternalData {
        buffers: vec![Some(triangle_bytes())],
        images: vec![],
    };
    let asset = flatten(&gltf, &external).unwrap();
    assert_eq!(asset.primitives.len(), 1);
    assert_eq!(asset.vertex_count(), 3);

    let prim = &asset.primitives[0];
    assert_eq!(prim.mesh.indices, vec![0, 1, 2]);
    assert_eq!(prim.mesh.vertices[0].position, [1.0, 0.0, 0.0]);
    assert_eq!(prim.mesh.vertices[1].position, [2.0, 0.0, 0.0]);
    assert_eq!(prim.base_color, [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(prim.texture, None);
    for v in &prim.mesh.vertices {
        assert!((v.normal[2] - 1.0).abs() < 1e-5, "normal {:?}", v.normal);
        assert_eq!(v.uv, [0.0, 0.0]);
    }
}

#[test]
fn missing_buffer_is_an_error() {
    let gltf = parse(TRIANGLE_GLTF.as_bytes()).unwrap();
    assert!(flatten(&gltf, &ExternalData::default()).is_err());
}

#[test]
fn base_color_texture_is_linked_and_decoded() {
    let gltf = parse(TEXTURED_GLTF.as_bytes()).unwrap();
    assert_eq!(image_uris(&gltf.document), vec![Some("tex.png".to_string())]);
    let external = ExternalData {
        buffers: vec![Some(triangle_bytes())],
        images: vec![Some(png_bytes(2, 2, [10, 20, 30, 255]))],
    };
    let asset = flatten(&gltf, &external).unwrap();
    assert_eq!(asset.primitives[0].texture, Some(0));
    assert_eq!(asset.primitives[0].base_color, [1.0, 1.0, 1.0, 1.0]);
    let img = asset.images[0].as_ref().unwrap();
    assert_eq!((img.width, img.height), (2, 2));
}

#[test]
fn undecodable_image_is_dropped_not_fatal() {
    let gltf = parse(TEXTURED_GLTF.as_bytes()).unwrap();
    let external = ExternalData {
        buffers: vec![Some(triangle_bytes())],
        images: vec![Some(b"not an image".to_vec())],
    };
    let asset = flatten(&gltf, &external).unwrap();
    assert_eq!(asset.images.len(), 1);
    assert!(asset.images[0].is_none());
}

#[test]
fn decode_image_yields_rgba8() {
    let img = decode_image(&png_bytes(3, 1, [255, 96, 48, 255])).unwrap();
    assert_eq!((img.width, img.height), (3, 1));
    assert_eq!(img.rgba.len(), 12);
    assert_eq!(&img.rgba[0..4], &[255, 96, 48, 255]);
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"\x00\x01garbage").is_err());
}

#[test]
fn parse_rejects_non_gltf() {
    assert!(parse(b"{ not json").is_err());
}
