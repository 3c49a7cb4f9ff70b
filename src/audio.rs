use crate::frame::SharedApp;
use crate::layout;
use galaxy_core::{AppEvent, Effect, Effects, PlaybackCommand};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The page's `<audio>` element.
#[derive(Clone)]
pub struct BackgroundAudio {
    element: web::HtmlAudioElement,
}

impl BackgroundAudio {
    pub fn new(element: web::HtmlAudioElement) -> Self {
        Self { element }
    }

    /// Request playback. Browsers may refuse until the user interacts with the
    /// page; a refusal is reported back to the app so its state stays honest.
    pub fn play(&self, app: &SharedApp) {
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play() threw: {:?}", e);
                reject(app);
                return;
            }
        };
        let app = app.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let name = js_sys::Reflect::get(&e, &"name".into())
                    .ok()
                    .and_then(|v| v.as_string());
                if layout::is_autoplay_refusal(name.as_deref()) {
                    log::info!("[audio] playback blocked: {:?}", e);
                    reject(&app);
                } else {
                    log::debug!("[audio] play interrupted: {:?}", e);
                }
            }
        });
    }

    pub fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause() threw: {:?}", e);
        }
    }

    pub fn apply(&self, effects: Effects, app: &SharedApp) {
        for effect in effects {
            match effect {
                Effect::Playback(PlaybackCommand::Play) => self.play(app),
                Effect::Playback(PlaybackCommand::Pause) => self.pause(),
            }
        }
    }
}

fn reject(app: &SharedApp) {
    match app.try_borrow_mut() {
        Ok(mut app) => {
            app.dispatch(AppEvent::PlaybackRejected);
        }
        Err(_) => log::warn!("[audio] app busy, dropping playback rejection"),
    }
}
