// Host-side tests for the galaxy generator and its single-node ownership.

use galaxy_core::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

fn small_params() -> GalaxyParams {
    GalaxyParams {
        count: 500,
        ..GalaxyParams::default()
    }
}

#[test]
fn buffer_lengths_match_count() {
    let mut rng = StdRng::seed_from_u64(7);
    for count in [1u32, 4, 100, 1234] {
        let params = GalaxyParams {
            count,
            ..GalaxyParams::default()
        };
        let buffer = generate_buffer(&params, &mut rng);
        assert_eq!(buffer.positions.len(), count as usize * 3);
        assert_eq!(buffer.colors.len(), count as usize * 3);
        assert_eq!(buffer.len(), count as usize);
    }
}

#[test]
fn colors_stay_in_unit_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let params = GalaxyParams {
        count: 5000,
        inside_color: Rgb::from_hex("#ffffff").unwrap(),
        outside_color: Rgb::from_hex("#000000").unwrap(),
        ..GalaxyParams::default()
    };
    let buffer = generate_buffer(&params, &mut rng);
    assert!(buffer.colors.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn color_endpoints_are_exact() {
    let params = GalaxyParams::default();
    assert_eq!(mix_color(&params, 0.0), params.inside_color);
    assert_eq!(mix_color(&params, params.radius), params.outside_color);
}

#[test]
fn zero_sample_lands_at_centre_with_inside_color() {
    // every draw returns zero: radius 0, no scatter
    let mut rng = StepRng::new(0, 0);
    let params = GalaxyParams {
        count: 3,
        ..GalaxyParams::default()
    };
    let buffer = generate_buffer(&params, &mut rng);
    for i in 0..3 {
        assert_eq!(buffer.position(i).length(), 0.0);
        assert_eq!(buffer.color(i), params.inside_color.to_array());
    }
}

#[test]
fn branch_angle_depends_only_on_index_mod_branches() {
    for branches in 2..=20u32 {
        for i in 0..200u32 {
            assert_eq!(
                branch_angle(i, branches),
                branch_angle(i % branches, branches)
            );
        }
    }
    assert_eq!(branch_angle(0, 3), 0.0);
    assert!((branch_angle(1, 2) - PI).abs() < 1e-6);
}

#[test]
fn particles_sit_on_their_arm_without_randomness_or_spin() {
    let params = GalaxyParams {
        count: 4,
        branches: 2,
        radius: 5.0,
        randomness: 0.0,
        spin: 0.0,
        inside_color: Rgb::from_hex("#ff0000").unwrap(),
        outside_color: Rgb::from_hex("#0000ff").unwrap(),
        ..GalaxyParams::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let buffer = generate_buffer(&params, &mut rng);
    for i in 0..4 {
        let p = buffer.position(i);
        let angle = branch_angle(i as u32, params.branches);
        let (s, c) = angle.sin_cos();
        // no sideways component relative to the arm direction, and never behind it
        assert!((p.z * c - p.x * s).abs() < 1e-5, "particle {i} off its arm");
        assert!(p.x * c + p.z * s >= -1e-5);
        assert_eq!(p.y.abs(), 0.0);
    }
    assert_eq!(branch_angle(0, 2), branch_angle(2, 2));
    assert_eq!(branch_angle(1, 2), branch_angle(3, 2));
}

#[test]
fn scatter_grows_with_radius() {
    let params = GalaxyParams {
        count: 20_000,
        randomness: 0.5,
        randomness_power: 1.0,
        spin: 0.0,
        ..GalaxyParams::default()
    };
    let mut rng = StdRng::seed_from_u64(99);
    let buffer = generate_buffer(&params, &mut rng);
    let (mut inner, mut outer) = (Vec::new(), Vec::new());
    for i in 0..buffer.len() {
        let p = buffer.position(i);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        if r < 1.0 {
            inner.push(p.y.abs());
        } else if r > 4.0 {
            outer.push(p.y.abs());
        }
    }
    let mean = |v: &[f32]| v.iter().sum::<f32>() / v.len() as f32;
    assert!(mean(&outer) > mean(&inner));
    assert!(buffer
        .positions
        .chunks_exact(3)
        .all(|p| p[1].abs() <= params.randomness * params.radius));
}

#[test]
fn regenerate_keeps_exactly_one_points_node() {
    let mut scene = Scene::new();
    let mut galaxy = Galaxy::new();
    let mut rng = StdRng::seed_from_u64(1);
    let params = small_params();
    let mut previous = Vec::new();
    for _ in 0..10 {
        let id = galaxy.regenerate(&mut scene, &params, &mut rng);
        assert_eq!(scene.points_count(), 1);
        assert_eq!(galaxy.current(), Some(id));
        assert!(previous.iter().all(|old| !scene.contains(*old)));
        previous.push(id);
    }
    assert_eq!(scene.len(), 1);
}

#[test]
fn regenerated_node_uses_committed_point_size() {
    let mut scene = Scene::new();
    let mut galaxy = Galaxy::new();
    let mut rng = StdRng::seed_from_u64(5);
    let params = GalaxyParams {
        size: 0.05,
        ..small_params()
    };
    let id = galaxy.regenerate(&mut scene, &params, &mut rng);
    match &scene.get(id).map(|n| &n.kind) {
        Some(NodeKind::Points(cloud)) => {
            assert_eq!(cloud.material.size, 0.05);
            assert!(cloud.material.additive_blending);
            assert!(!cloud.material.depth_write);
            assert_eq!(cloud.buffer.len(), 500);
        }
        _ => panic!("expected a points node"),
    }
}
