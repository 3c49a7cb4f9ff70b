#![cfg(target_arch = "wasm32")]
use crate::audio::BackgroundAudio;
use crate::config::PageConfig;
use crate::frame::{FrameContext, SharedApp};
use galaxy_core::{App, AppEvent, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod gui;
mod layout;
mod model;
mod render;
mod skills;

thread_local! {
    // set once init has built the app; the JS exports act on it
    static APP: RefCell<Option<SharedApp>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let config = PageConfig::default();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector(config.canvas_selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", config.canvas_selector))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let audio_el: web::HtmlAudioElement = document
        .get_element_by_id(config.audio_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", config.audio_id))?
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if document.get_element_by_id(config.model_container_id).is_none() {
        anyhow::bail!("missing #{}", config.model_container_id);
    }

    dom::sync_canvas_size(&window, &canvas);
    let (width, height) = dom::inner_size(&window);
    let app: SharedApp = Rc::new(RefCell::new(App::new(
        Viewport { width, height },
        dom::scroll_y(&window),
    )));
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));
    log::info!(
        "[init] galaxy ready: {} points",
        app.borrow().params.count
    );

    let audio = BackgroundAudio::new(audio_el);
    audio.play(&app);

    events::wire_event_handlers(events::EventWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        app: app.clone(),
        audio,
        config: config.clone(),
    });
    if let Err(e) = gui::build_gui(&window, &document, &app) {
        log::warn!("[gui] panel unavailable: {:#}", e);
    }
    skills::wire_skill_bars(&document, &config);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[init] continuing without rendering");
    }
    let inbox = assets::SharedInbox::default();
    assets::spawn_model_load(config.model_url, inbox.clone());

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(app, gpu, canvas, inbox)));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn with_app(event: AppEvent) {
    APP.with(|slot| match slot.borrow().as_ref() {
        Some(app) => {
            app.borrow_mut().dispatch(event);
        }
        None => log::warn!("[js] {:?} before init finished", event),
    });
}

#[wasm_bindgen(js_name = showSkillSpheres)]
pub fn show_skill_spheres() {
    with_app(AppEvent::ShowSkillSpheres);
}

#[wasm_bindgen(js_name = removeSkillSpheres)]
pub fn remove_skill_spheres() {
    with_app(AppEvent::RemoveSkillSpheres);
}
