//! Scene graph owned by the page controller.
//!
//! Nodes are moved into the scene on [`Scene::attach`] and handed back on
//! [`Scene::detach`]; dropping a detached node releases its CPU-side data. The
//! renderer mirrors this set by id, creating GPU resources for ids it has not
//! seen and releasing resources for ids that are gone.

use crate::color::Rgb;
use crate::galaxy::PointCloud;
use crate::geometry::Geometry;
use crate::model::ModelRef;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Unlit material; the texture is referenced by its asset path.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicMaterial {
    pub color: Rgb,
    pub texture: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshNode {
    pub geometry: Geometry,
    pub material: BasicMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Rgb,
    pub intensity: f32,
    /// Range after which the light contributes nothing.
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

#[derive(Debug)]
pub enum NodeKind {
    Points(PointCloud),
    Mesh(MeshNode),
    Model(ModelRef),
    PointLight(PointLight),
    AmbientLight(AmbientLight),
}

#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub transform: Transform,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            transform: Transform::default(),
        }
    }

    pub fn with_transform(kind: NodeKind, transform: Transform) -> Self {
        Self { kind, transform }
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    nodes: FnvHashMap<NodeId, Node>,
    order: Vec<NodeId>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        self.order.push(id);
        id
    }

    pub fn detach(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(&id)?;
        self.order.retain(|other| *other != id);
        Some(node)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Attached nodes in attach order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.nodes.get(id).map(|n| (*id, n)))
    }

    pub fn count_where(&self, pred: impl Fn(&NodeKind) -> bool) -> usize {
        self.nodes.values().filter(|n| pred(&n.kind)).count()
    }

    pub fn points_count(&self) -> usize {
        self.count_where(|k| matches!(k, NodeKind::Points(_)))
    }
}
