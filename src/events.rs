use crate::audio::BackgroundAudio;
use crate::config::PageConfig;
use crate::dom;
use crate::frame::SharedApp;
use galaxy_core::{AppEvent, ScrollInput};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub app: SharedApp,
    pub audio: BackgroundAudio,
    pub config: PageConfig,
}

pub fn wire_event_handlers(w: EventWiring) {
    wire_resize(&w);
    wire_scroll(&w);
    wire_click(&w);
    wire_pointer(&w);
}

/// Measure what the scroll controller needs from the page right now.
pub fn scroll_input(window: &web::Window, document: &web::Document, container_id: &str) -> ScrollInput {
    let (_, inner_height) = dom::inner_size(window);
    ScrollInput {
        window_scroll_y: dom::scroll_y(window),
        viewport_height: inner_height,
        container_offset_top: dom::offset_top(document, container_id),
    }
}

fn wire_resize(w: &EventWiring) {
    let w2 = w.clone();
    dom::listen(w.window.as_ref(), "resize", move |_: web::Event| {
        dom::sync_canvas_size(&w2.window, &w2.canvas);
        let (width, height) = dom::inner_size(&w2.window);
        w2.app
            .borrow_mut()
            .dispatch(AppEvent::Resize { width, height });
    });
}

fn wire_scroll(w: &EventWiring) {
    let w2 = w.clone();
    dom::listen(w.window.as_ref(), "scroll", move |_: web::Event| {
        let input = scroll_input(&w2.window, &w2.document, w2.config.model_container_id);
        w2.app.borrow_mut().dispatch(AppEvent::Scroll(input));
    });
}

fn wire_click(w: &EventWiring) {
    let w2 = w.clone();
    dom::listen(w.document.as_ref(), "click", move |_: web::MouseEvent| {
        let effects = w2.app.borrow_mut().dispatch(AppEvent::Click);
        w2.audio.apply(effects, &w2.app);
    });
}

fn wire_pointer(w: &EventWiring) {
    let target: &web::EventTarget = w.canvas.as_ref();

    let w2 = w.clone();
    dom::listen(target, "pointerdown", move |ev: web::PointerEvent| {
        if let Err(e) = w2.canvas.set_pointer_capture(ev.pointer_id()) {
            log::debug!("[input] pointer capture refused: {:?}", e);
        }
        w2.app.borrow_mut().dispatch(AppEvent::PointerDown {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    });

    let w2 = w.clone();
    dom::listen(target, "pointermove", move |ev: web::PointerEvent| {
        let client_height = w2.canvas.client_height() as f32;
        w2.app.borrow_mut().dispatch(AppEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
            client_height,
        });
    });

    for name in ["pointerup", "pointercancel"] {
        let w2 = w.clone();
        dom::listen(target, name, move |ev: web::PointerEvent| {
            if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
                let _ = el.release_pointer_capture(ev.pointer_id());
            }
            w2.app.borrow_mut().dispatch(AppEvent::PointerUp);
        });
    }
}
