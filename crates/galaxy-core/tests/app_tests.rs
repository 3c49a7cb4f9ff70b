// Drives the page controller through host events, the way the browser glue does.

use galaxy_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const WIDE: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

fn app() -> App<StdRng> {
    let mut app = App::with_rng(WIDE, 0.0, StdRng::seed_from_u64(42));
    app.dispatch(AppEvent::ParamCommit {
        key: ParamKey::Count,
        value: ParamValue::Number(1000.0),
    });
    app
}

fn scroll_to(y: f64) -> AppEvent {
    AppEvent::Scroll(ScrollInput {
        window_scroll_y: y,
        viewport_height: 800.0,
        container_offset_top: 1000.0,
    })
}

fn count_lights(app: &App<StdRng>) -> usize {
    app.scene
        .count_where(|k| matches!(k, NodeKind::PointLight(_)))
}

#[test]
fn starts_with_ambient_light_and_one_galaxy() {
    let app = app();
    assert_eq!(app.scene.points_count(), 1);
    assert_eq!(
        app.scene
            .count_where(|k| matches!(k, NodeKind::AmbientLight(_))),
        1
    );
    assert!(app.audio.is_playing());
    assert!((app.rig.camera.aspect - 1.6).abs() < 1e-6);
}

#[test]
fn param_commits_regenerate_without_leaking_nodes() {
    let mut app = app();
    let first = app.galaxy.current();
    for branches in [4.0, 5.0, 6.0] {
        app.dispatch(AppEvent::ParamCommit {
            key: ParamKey::Branches,
            value: ParamValue::Number(branches),
        });
    }
    assert_eq!(app.params.branches, 6);
    assert_eq!(app.scene.points_count(), 1);
    assert_ne!(app.galaxy.current(), first);
    assert!(first.map_or(true, |id| !app.scene.contains(id)));
}

#[test]
fn rejected_commit_keeps_galaxy() {
    let mut app = app();
    let before = app.galaxy.current();
    app.dispatch(AppEvent::ParamCommit {
        key: ParamKey::InsideColor,
        value: ParamValue::Number(3.0),
    });
    assert_eq!(app.galaxy.current(), before);
}

#[test]
fn click_emits_playback_effects() {
    let mut app = app();
    let fx = app.dispatch(AppEvent::Click);
    assert_eq!(fx.as_slice(), &[Effect::Playback(PlaybackCommand::Pause)]);
    let fx = app.dispatch(AppEvent::Click);
    assert_eq!(fx.as_slice(), &[Effect::Playback(PlaybackCommand::Play)]);
    assert!(app.dispatch(AppEvent::PointerUp).is_empty());
}

#[test]
fn rejection_then_click_plays() {
    let mut app = app();
    app.dispatch(AppEvent::PlaybackRejected);
    let fx = app.dispatch(AppEvent::Click);
    assert_eq!(fx.as_slice(), &[Effect::Playback(PlaybackCommand::Play)]);
}

#[test]
fn model_enters_and_leaves_with_its_light() {
    let mut app = app();
    app.dispatch(scroll_to(1200.0));
    assert!(!app.model.is_attached(), "not loaded yet");

    app.dispatch(AppEvent::ModelLoaded(ModelRef(0)));
    assert!(!app.model.is_attached());

    app.dispatch(scroll_to(1300.0));
    assert!(app.model.is_attached());
    assert_eq!(count_lights(&app), 1);
    let (model_id, light_id) = app.model.attached_ids().unwrap();
    let light = app.scene.get(light_id).unwrap();
    assert_eq!(light.transform.position, MODEL_LIGHT_POSITION);
    let model = app.scene.get(model_id).unwrap();
    assert_eq!(model.transform.scale.x, MODEL_SCALE_WIDE);
    assert_eq!(model.transform.position, MODEL_POSITION_WIDE);

    app.dispatch(scroll_to(1400.0));
    assert_eq!(count_lights(&app), 1);

    app.dispatch(scroll_to(3000.0));
    assert!(!app.model.is_attached());
    assert!(app.model.is_loaded());
    assert_eq!(count_lights(&app), 0);
    assert!(!app.scene.contains(model_id));

    app.dispatch(scroll_to(1300.0));
    assert!(app.model.is_attached());
    assert_eq!(count_lights(&app), 1);
}

#[test]
fn narrow_viewport_places_model_low_left() {
    let mut app = App::with_rng(
        Viewport {
            width: 280.0,
            height: 600.0,
        },
        0.0,
        StdRng::seed_from_u64(1),
    );
    app.dispatch(AppEvent::ModelLoaded(ModelRef(3)));
    app.dispatch(AppEvent::Scroll(ScrollInput {
        window_scroll_y: 1100.0,
        viewport_height: 600.0,
        container_offset_top: 1000.0,
    }));
    let (model_id, _) = app.model.attached_ids().unwrap();
    let node = app.scene.get(model_id).unwrap();
    assert_eq!(node.transform.scale.x, MODEL_SCALE_NARROW);
    assert_eq!(node.transform.position, MODEL_POSITION_NARROW);
}

#[test]
fn second_model_load_is_ignored() {
    let mut app = app();
    app.dispatch(AppEvent::ModelLoaded(ModelRef(0)));
    app.dispatch(AppEvent::ModelLoaded(ModelRef(1)));
    app.dispatch(scroll_to(1300.0));
    let (model_id, _) = app.model.attached_ids().unwrap();
    assert!(matches!(
        app.scene.get(model_id).map(|n| &n.kind),
        Some(NodeKind::Model(ModelRef(0)))
    ));
}

#[test]
fn scroll_moves_rig_around_circle() {
    let mut app = app();
    app.dispatch(scroll_to(400.5));
    let expected = (400.0f64 / 800.0).sin() as f32;
    assert!((app.rig.position.y - expected).abs() < 1e-6);
    let p = app.rig.position;
    assert!((p.y * p.y + p.z * p.z - 1.0).abs() < 1e-5);
}

#[test]
fn frames_spin_galaxy_and_model() {
    let mut app = app();
    app.dispatch(AppEvent::ModelLoaded(ModelRef(0)));
    app.dispatch(AppEvent::Frame { elapsed_sec: 2.0 });
    let galaxy = app.galaxy.current().and_then(|id| app.scene.get(id)).unwrap();
    assert!((galaxy.transform.rotation.y - 0.8).abs() < 1e-6);
    assert_eq!(app.model.rotation_y(&app.scene), Some(2.0));

    app.dispatch(scroll_to(1300.0));
    app.dispatch(AppEvent::Frame { elapsed_sec: 3.0 });
    assert_eq!(app.model.rotation_y(&app.scene), Some(3.0));
}

#[test]
fn skill_spheres_show_once_and_remove() {
    let mut app = app();
    let meshes = |app: &App<StdRng>| app.scene.count_where(|k| matches!(k, NodeKind::Mesh(_)));
    app.dispatch(AppEvent::ShowSkillSpheres);
    app.dispatch(AppEvent::ShowSkillSpheres);
    assert_eq!(meshes(&app), SKILL_SPHERES.len());
    for (id, (_, x)) in app.skills.handles().iter().zip(SKILL_SPHERES) {
        let node = app.scene.get(*id).unwrap();
        assert_eq!(node.transform.position.x, x);
        assert_eq!(node.transform.position.z, -x);
    }
    app.dispatch(AppEvent::RemoveSkillSpheres);
    assert_eq!(meshes(&app), 0);
    assert!(app.skills.is_empty());
    app.dispatch(AppEvent::RemoveSkillSpheres);
    assert_eq!(app.scene.points_count(), 1);
}

#[test]
fn resize_updates_aspect_and_ignores_zero() {
    let mut app = app();
    app.dispatch(AppEvent::Resize {
        width: 600.0,
        height: 300.0,
    });
    assert!((app.rig.camera.aspect - 2.0).abs() < 1e-6);
    app.dispatch(AppEvent::Resize {
        width: 600.0,
        height: 0.0,
    });
    assert!((app.rig.camera.aspect - 2.0).abs() < 1e-6);
}

#[test]
fn drag_orbits_camera_over_frames() {
    let mut app = app();
    let start = app.rig.camera.position;
    app.dispatch(AppEvent::PointerDown { x: 10.0, y: 10.0 });
    app.dispatch(AppEvent::PointerMove {
        x: 90.0,
        y: 10.0,
        client_height: 800.0,
    });
    app.dispatch(AppEvent::PointerUp);
    for i in 0..30 {
        app.dispatch(AppEvent::Frame {
            elapsed_sec: i as f32 / 60.0,
        });
    }
    let moved = app.rig.camera.position;
    assert!((moved - start).length() > 1e-3);
    assert!((moved.length() - start.length()).abs() < 1e-4);
}
