//! The loaded 3D model and the light that accompanies it on stage.

use crate::color::Rgb;
use crate::constants::*;
use crate::scene::{Node, NodeId, NodeKind, PointLight, Scene, Transform};
use glam::Vec3;

/// Handle to model geometry held by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelRef(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub position: Vec3,
}

/// Narrow viewports get a larger model tucked to the lower left.
pub fn placement_for_viewport(width: f64) -> Placement {
    if width <= NARROW_VIEWPORT_MAX_WIDTH {
        Placement {
            scale: MODEL_SCALE_NARROW,
            position: MODEL_POSITION_NARROW,
        }
    } else {
        Placement {
            scale: MODEL_SCALE_WIDE,
            position: MODEL_POSITION_WIDE,
        }
    }
}

fn model_light() -> Node {
    Node::with_transform(
        NodeKind::PointLight(PointLight {
            color: Rgb::WHITE,
            intensity: MODEL_LIGHT_INTENSITY,
            distance: MODEL_LIGHT_DISTANCE,
        }),
        Transform::at(MODEL_LIGHT_POSITION),
    )
}

#[derive(Debug, Default)]
enum SlotState {
    #[default]
    Pending,
    Detached(Node),
    Attached {
        model: NodeId,
        light: NodeId,
    },
}

/// Owns the model node whether or not it is currently in the scene.
#[derive(Debug, Default)]
pub struct ModelSlot {
    state: SlotState,
}

impl ModelSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self.state, SlotState::Pending)
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, SlotState::Attached { .. })
    }

    pub fn attached_ids(&self) -> Option<(NodeId, NodeId)> {
        match self.state {
            SlotState::Attached { model, light } => Some((model, light)),
            _ => None,
        }
    }

    /// Take ownership of a freshly loaded model, placed for the viewport.
    /// A second load is ignored.
    pub fn install(&mut self, model: ModelRef, viewport_width: f64) -> bool {
        if self.is_loaded() {
            log::warn!("[model] ignoring second load of {:?}", model);
            return false;
        }
        let placement = placement_for_viewport(viewport_width);
        let transform = Transform {
            position: placement.position,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(placement.scale),
        };
        self.state = SlotState::Detached(Node::with_transform(NodeKind::Model(model), transform));
        log::info!(
            "[model] loaded scale={} pos=({:.2},{:.2},{:.2})",
            placement.scale,
            placement.position.x,
            placement.position.y,
            placement.position.z
        );
        true
    }

    /// Put the model and a fresh point light into the scene.
    pub fn attach(&mut self, scene: &mut Scene) -> bool {
        match std::mem::take(&mut self.state) {
            SlotState::Detached(node) => {
                let model = scene.attach(node);
                let light = scene.attach(model_light());
                self.state = SlotState::Attached { model, light };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Take the model back out of the scene and drop its light.
    pub fn detach(&mut self, scene: &mut Scene) -> bool {
        match std::mem::take(&mut self.state) {
            SlotState::Attached { model, light } => {
                drop(scene.detach(light));
                match scene.detach(model) {
                    Some(node) => self.state = SlotState::Detached(node),
                    None => log::error!("[model] node {} vanished from scene", model.raw()),
                }
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    pub fn set_rotation_y(&mut self, scene: &mut Scene, angle: f32) {
        let node = match &mut self.state {
            SlotState::Pending => None,
            SlotState::Detached(node) => Some(node),
            SlotState::Attached { model, .. } => scene.get_mut(*model),
        };
        if let Some(node) = node {
            node.transform.rotation.y = angle;
        }
    }

    pub fn rotation_y(&self, scene: &Scene) -> Option<f32> {
        match &self.state {
            SlotState::Pending => None,
            SlotState::Detached(node) => Some(node.transform.rotation.y),
            SlotState::Attached { model, .. } => scene.get(*model).map(|n| n.transform.rotation.y),
        }
    }
}
