use crate::color::Rgb;
use crate::constants::{
    SKILL_SPHERES, SKILL_SPHERE_HEIGHT_SEGMENTS, SKILL_SPHERE_RADIUS, SKILL_SPHERE_WIDTH_SEGMENTS,
};
use crate::geometry::Geometry;
use crate::scene::{BasicMaterial, MeshNode, Node, NodeId, NodeKind, Scene, Transform};
use glam::Vec3;

/// Textured spheres laid out on the x = -z diagonal.
#[derive(Debug, Default)]
pub struct SkillSpheres {
    handles: Vec<NodeId>,
}

impl SkillSpheres {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, scene: &mut Scene, image_path: &str, x_offset: f32) -> NodeId {
        let mesh = MeshNode {
            geometry: Geometry::Sphere {
                radius: SKILL_SPHERE_RADIUS,
                width_segments: SKILL_SPHERE_WIDTH_SEGMENTS,
                height_segments: SKILL_SPHERE_HEIGHT_SEGMENTS,
            },
            material: BasicMaterial {
                color: Rgb::WHITE,
                texture: Some(image_path.to_string()),
            },
        };
        let transform = Transform::at(Vec3::new(x_offset, 0.0, -x_offset));
        let id = scene.attach(Node::with_transform(NodeKind::Mesh(mesh), transform));
        self.handles.push(id);
        id
    }

    pub fn create_defaults(&mut self, scene: &mut Scene) {
        for (path, x) in SKILL_SPHERES {
            self.create(scene, path, x);
        }
    }

    /// Detach every sphere created so far; returns how many were removed.
    pub fn remove_all(&mut self, scene: &mut Scene) -> usize {
        let removed = self
            .handles
            .drain(..)
            .filter_map(|id| scene.detach(id))
            .count();
        log::debug!("[skills] removed {} spheres", removed);
        removed
    }

    pub fn handles(&self) -> &[NodeId] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
