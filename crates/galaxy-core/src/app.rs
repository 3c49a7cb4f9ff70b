//! Page controller: the single owner of every piece of mutable page state.
//!
//! Hosts translate their native events into [`AppEvent`]s and feed them to
//! [`App::dispatch`]; anything the host must do in response (audio playback)
//! comes back as [`Effect`]s. Nothing here touches a browser API.

use crate::audio::{AudioToggle, PlaybackCommand};
use crate::camera::{CameraRig, OrbitControls};
use crate::color::Rgb;
use crate::constants::{AMBIENT_INTENSITY, GALAXY_SPIN_RATE};
use crate::galaxy::Galaxy;
use crate::model::{ModelRef, ModelSlot};
use crate::params::{GalaxyParams, ParamKey, ParamValue};
use crate::scene::{AmbientLight, Node, NodeKind, Scene};
use crate::scroll::{rig_orbit, BandTransition, ScrollController, ScrollInput};
use crate::skills::SkillSpheres;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Scroll(ScrollInput),
    Click,
    Resize { width: f64, height: f64 },
    ParamCommit { key: ParamKey, value: ParamValue },
    ModelLoaded(ModelRef),
    PlaybackRejected,
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32, client_height: f32 },
    PointerUp,
    ShowSkillSpheres,
    RemoveSkillSpheres,
    Frame { elapsed_sec: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Playback(PlaybackCommand),
}

pub type Effects = SmallVec<[Effect; 1]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub struct App<R: Rng = StdRng> {
    pub params: GalaxyParams,
    pub scene: Scene,
    pub galaxy: Galaxy,
    pub rig: CameraRig,
    pub controls: OrbitControls,
    pub scroll: ScrollController,
    pub audio: AudioToggle,
    pub skills: SkillSpheres,
    pub model: ModelSlot,
    pub viewport: Viewport,
    rng: R,
}

impl App<StdRng> {
    pub fn new(viewport: Viewport, initial_scroll_y: f64) -> Self {
        Self::with_rng(viewport, initial_scroll_y, StdRng::from_entropy())
    }
}

impl<R: Rng> App<R> {
    /// Build the scene (ambient light + initial galaxy) around an injected RNG.
    pub fn with_rng(viewport: Viewport, initial_scroll_y: f64, rng: R) -> Self {
        let mut rig = CameraRig::new(1.0);
        rig.set_aspect(viewport.width, viewport.height);
        let mut app = Self {
            params: GalaxyParams::default(),
            scene: Scene::new(),
            galaxy: Galaxy::new(),
            rig,
            controls: OrbitControls::new(),
            scroll: ScrollController::new(initial_scroll_y),
            audio: AudioToggle::new(),
            skills: SkillSpheres::new(),
            model: ModelSlot::new(),
            viewport,
            rng,
        };
        app.scene.attach(Node::new(NodeKind::AmbientLight(AmbientLight {
            color: Rgb::WHITE,
            intensity: AMBIENT_INTENSITY,
        })));
        app.regenerate_galaxy();
        app
    }

    pub fn regenerate_galaxy(&mut self) {
        self.galaxy
            .regenerate(&mut self.scene, &self.params, &mut self.rng);
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Effects {
        let mut effects = Effects::new();
        match event {
            AppEvent::Scroll(input) => self.on_scroll(input),
            AppEvent::Click => {
                let cmd = self.audio.toggle();
                effects.push(Effect::Playback(cmd));
            }
            AppEvent::Resize { width, height } => {
                self.viewport = Viewport { width, height };
                self.rig.set_aspect(width, height);
            }
            AppEvent::ParamCommit { key, value } => {
                if self.params.commit(key, value) {
                    self.regenerate_galaxy();
                }
            }
            AppEvent::ModelLoaded(model) => {
                self.model.install(model, self.viewport.width);
            }
            AppEvent::PlaybackRejected => self.audio.playback_rejected(),
            AppEvent::PointerDown { x, y } => self.controls.pointer_down(x, y),
            AppEvent::PointerMove { x, y, client_height } => {
                self.controls.pointer_move(x, y, client_height)
            }
            AppEvent::PointerUp => self.controls.pointer_up(),
            AppEvent::ShowSkillSpheres => {
                if self.skills.is_empty() {
                    self.skills.create_defaults(&mut self.scene);
                }
            }
            AppEvent::RemoveSkillSpheres => {
                self.skills.remove_all(&mut self.scene);
            }
            AppEvent::Frame { elapsed_sec } => self.on_frame(elapsed_sec),
        }
        effects
    }

    fn on_scroll(&mut self, input: ScrollInput) {
        let transition = self.scroll.on_scroll(input, self.model.is_loaded());
        let (y, z) = rig_orbit(
            self.rig.position.x,
            self.scroll.scroll_y(),
            input.viewport_height,
        );
        self.rig.position.y = y;
        self.rig.position.z = z;

        match transition {
            Some(BandTransition::Attach) => {
                self.model.attach(&mut self.scene);
                log::debug!("[scroll] model on stage at y={:.1}", self.scroll.scroll_y());
            }
            Some(BandTransition::Detach) => {
                self.model.detach(&mut self.scene);
                log::debug!("[scroll] model off stage at y={:.1}", self.scroll.scroll_y());
            }
            None => {}
        }
    }

    fn on_frame(&mut self, elapsed_sec: f32) {
        self.galaxy
            .set_rotation_y(&mut self.scene, elapsed_sec * GALAXY_SPIN_RATE);
        self.model.set_rotation_y(&mut self.scene, elapsed_sec);
        self.controls.update(&mut self.rig.camera);
    }
}
