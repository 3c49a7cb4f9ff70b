//! glTF decoding into flat, world-space primitives ready for upload.
//!
//! Fetching lives in `assets.rs`; everything here works on bytes so it runs on
//! the host as well.

use anyhow::{bail, Context};
use galaxy_core::{compute_normals, MeshData, MeshVertex};
use glam::{Mat3, Mat4, Vec3};

/// RGBA8 pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn decode_image(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let img = image::load_from_memory(bytes).context("decode image")?;
    let rgba = img.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[derive(Clone, Debug)]
pub struct ModelPrimitive {
    pub mesh: MeshData,
    pub base_color: [f32; 4],
    /// Index into [`ModelAsset::images`].
    pub texture: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct ModelAsset {
    pub primitives: Vec<ModelPrimitive>,
    pub images: Vec<Option<DecodedImage>>,
}

impl ModelAsset {
    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(|p| p.mesh.vertices.len()).sum()
    }
}

/// Bytes for the buffers and images a document references by URI, indexed
/// like the document's own buffer and image lists.
#[derive(Clone, Debug, Default)]
pub struct ExternalData {
    pub buffers: Vec<Option<Vec<u8>>>,
    pub images: Vec<Option<Vec<u8>>>,
}

pub fn parse(bytes: &[u8]) -> anyhow::Result<gltf::Gltf> {
    gltf::Gltf::from_slice(bytes).context("parse glTF")
}

/// URI of each buffer; `None` for the GLB binary chunk.
pub fn buffer_uris(document: &gltf::Document) -> Vec<Option<String>> {
    document
        .buffers()
        .map(|b| match b.source() {
            gltf::buffer::Source::Uri(uri) => Some(uri.to_string()),
            gltf::buffer::Source::Bin => None,
        })
        .collect()
}

/// URI of each image; `None` for images stored in a buffer view.
pub fn image_uris(document: &gltf::Document) -> Vec<Option<String>> {
    document
        .images()
        .map(|img| match img.source() {
            gltf::image::Source::Uri { uri, .. } => Some(uri.to_string()),
            gltf::image::Source::View { .. } => None,
        })
        .collect()
}

/// Walk the default scene and bake every triangle primitive into world space.
pub fn flatten(gltf: &gltf::Gltf, external: &ExternalData) -> anyhow::Result<ModelAsset> {
    let document = &gltf.document;
    let blob = gltf.blob.as_deref();
    let buffer_data = |buffer: gltf::Buffer<'_>| -> Option<&[u8]> {
        match buffer.source() {
            gltf::buffer::Source::Bin => blob,
            gltf::buffer::Source::Uri(_) => external
                .buffers
                .get(buffer.index())
                .and_then(|b| b.as_deref()),
        }
    };

    let images = document
        .images()
        .map(|img| {
            let bytes = match img.source() {
                gltf::image::Source::View { view, .. } => buffer_data(view.buffer())
                    .and_then(|data| data.get(view.offset()..view.offset() + view.length())),
                gltf::image::Source::Uri { .. } => external
                    .images
                    .get(img.index())
                    .and_then(|b| b.as_deref()),
            };
            let bytes = bytes?;
            match decode_image(bytes) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    log::warn!("[model] image {} skipped: {:#}", img.index(), e);
                    None
                }
            }
        })
        .collect();

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| anyhow::anyhow!("glTF has no scene"))?;

    let mut primitives = Vec::new();
    for root in scene.nodes() {
        let mut stack = vec![(root, Mat4::IDENTITY)];
        while let Some((node, parent)) = stack.pop() {
            let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
            if let Some(mesh) = node.mesh() {
                for primitive in mesh.primitives() {
                    if primitive.mode() != gltf::mesh::Mode::Triangles {
                        log::debug!("[model] skipping {:?} primitive", primitive.mode());
                        continue;
                    }
                    if let Some(p) = bake_primitive(&primitive, world, &buffer_data) {
                        primitives.push(p);
                    }
                }
            }
            for child in node.children() {
                stack.push((child, world));
            }
        }
    }

    if primitives.is_empty() {
        bail!("glTF has no readable triangle primitives");
    }
    Ok(ModelAsset { primitives, images })
}

fn bake_primitive<'s, F>(
    primitive: &gltf::Primitive<'_>,
    world: Mat4,
    buffer_data: &F,
) -> Option<ModelPrimitive>
where
    F: Clone + for<'b> Fn(gltf::Buffer<'b>) -> Option<&'s [u8]>,
{
    let reader = primitive.reader(buffer_data.clone());
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    if positions.is_empty() {
        return None;
    }
    let indices: Vec<u32> = reader
        .read_indices()
        .map(|i| i.into_u32().collect())
        .unwrap_or_else(|| (0..positions.len() as u32).collect());
    let normals: Vec<[f32; 3]> = reader
        .read_normals()
        .map(|n| n.collect())
        .unwrap_or_else(|| compute_normals(&positions, &indices));
    let uvs: Vec<[f32; 2]> = reader
        .read_tex_coords(0)
        .map(|t| t.into_f32().collect())
        .unwrap_or_default();

    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let pw = world.transform_point3(Vec3::from(*p));
            let n = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
            let nw = (normal_matrix * Vec3::from(n)).normalize_or_zero();
            MeshVertex {
                position: pw.to_array(),
                normal: nw.to_array(),
                uv: uvs.get(i).copied().unwrap_or([0.0, 0.0]),
            }
        })
        .collect();

    let pbr = primitive.material().pbr_metallic_roughness();
    Some(ModelPrimitive {
        mesh: MeshData { vertices, indices },
        base_color: pbr.base_color_factor(),
        texture: pbr
            .base_color_texture()
            .map(|info| info.texture().source().index()),
    })
}
