//! Procedural spiral galaxy.
//!
//! Every particle gets a uniformly sampled distance from the centre, is
//! assigned to an arm by its index, swept along the arm by `spin`, and then
//! scattered by a power-law offset that widens with distance. Its color is
//! the inside/outside mix at that distance.

use crate::color::Rgb;
use crate::params::GalaxyParams;
use crate::scene::{Node, NodeId, NodeKind, Scene};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Flat per-particle attributes, three floats per particle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleBuffer {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleBuffer {
    pub fn with_count(count: usize) -> Self {
        Self {
            positions: vec![0.0; count * 3],
            colors: vec![0.0; count * 3],
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, i: usize) -> Vec3 {
        let i3 = i * 3;
        Vec3::new(
            self.positions[i3],
            self.positions[i3 + 1],
            self.positions[i3 + 2],
        )
    }

    pub fn color(&self, i: usize) -> [f32; 3] {
        let i3 = i * 3;
        [self.colors[i3], self.colors[i3 + 1], self.colors[i3 + 2]]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsMaterial {
    pub size: f32,
    pub size_attenuation: bool,
    pub depth_write: bool,
    pub additive_blending: bool,
    pub vertex_colors: bool,
}

impl PointsMaterial {
    pub fn for_params(params: &GalaxyParams) -> Self {
        Self {
            size: params.size,
            size_attenuation: true,
            depth_write: false,
            additive_blending: true,
            vertex_colors: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PointCloud {
    pub buffer: ParticleBuffer,
    pub material: PointsMaterial,
}

/// Angle of the arm particle `index` belongs to. Depends only on `index mod branches`.
#[inline]
pub fn branch_angle(index: u32, branches: u32) -> f32 {
    let branches = branches.max(1);
    (index % branches) as f32 / branches as f32 * TAU
}

/// Color for a particle sampled at `radius` from the centre.
#[inline]
pub fn mix_color(params: &GalaxyParams, radius: f32) -> Rgb {
    params
        .inside_color
        .lerp(params.outside_color, radius / params.radius)
}

#[inline]
fn scatter<R: Rng + ?Sized>(rng: &mut R, randomness: f32, power: f32, radius: f32) -> f32 {
    let magnitude = rng.gen::<f32>().powf(power);
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    magnitude * sign * randomness * radius
}

pub fn generate_buffer<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> ParticleBuffer {
    let mut buffer = ParticleBuffer::with_count(params.count as usize);

    for i in 0..params.count {
        let i3 = i as usize * 3;

        let radius = rng.gen::<f32>() * params.radius;
        let spin_angle = radius * params.spin;
        let angle = branch_angle(i, params.branches) + spin_angle;

        let rand_x = scatter(rng, params.randomness, params.randomness_power, radius);
        let rand_y = scatter(rng, params.randomness, params.randomness_power, radius);
        let rand_z = scatter(rng, params.randomness, params.randomness_power, radius);

        buffer.positions[i3] = angle.cos() * radius + rand_x;
        buffer.positions[i3 + 1] = rand_y;
        buffer.positions[i3 + 2] = angle.sin() * radius + rand_z;

        let color = mix_color(params, radius);
        buffer.colors[i3] = color.r;
        buffer.colors[i3 + 1] = color.g;
        buffer.colors[i3 + 2] = color.b;
    }

    buffer
}

/// Owner of the single live galaxy node.
#[derive(Debug, Default)]
pub struct Galaxy {
    current: Option<NodeId>,
}

impl Galaxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Replace the live galaxy: the previous node is detached and dropped
    /// before the new one is attached.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        scene: &mut Scene,
        params: &GalaxyParams,
        rng: &mut R,
    ) -> NodeId {
        if let Some(old) = self.current.take() {
            drop(scene.detach(old));
        }

        let cloud = PointCloud {
            buffer: generate_buffer(params, rng),
            material: PointsMaterial::for_params(params),
        };
        let id = scene.attach(Node::new(NodeKind::Points(cloud)));
        self.current = Some(id);
        log::debug!(
            "[galaxy] regenerated count={} branches={} radius={:.2} node={}",
            params.count,
            params.branches,
            params.radius,
            id.raw()
        );
        id
    }

    pub fn set_rotation_y(&self, scene: &mut Scene, angle: f32) {
        if let Some(node) = self.current.and_then(|id| scene.get_mut(id)) {
            node.transform.rotation.y = angle;
        }
    }
}
