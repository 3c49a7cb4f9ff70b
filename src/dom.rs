use crate::layout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on any event target; the closure lives for the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Stretch the canvas over the window and size its backing store to match.
pub fn sync_canvas_size(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let (inner_w, inner_h) = inner_size(window);
    let size = layout::canvas_size(inner_w, inner_h, window.device_pixel_ratio());
    let style = canvas.style();
    for (prop, px) in [("width", size.css_width), ("height", size.css_height)] {
        if let Err(e) = style.set_property(prop, &format!("{}px", px)) {
            log::warn!("[dom] canvas {}: {:?}", prop, e);
        }
    }
    if canvas.width() != size.backing_width {
        canvas.set_width(size.backing_width);
    }
    if canvas.height() != size.backing_height {
        canvas.set_height(size.backing_height);
    }
}

#[inline]
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// `offsetTop` of an element, 0 when it is gone or not an `HtmlElement`.
pub fn offset_top(document: &web::Document, id: &str) -> f64 {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_top() as f64)
        .unwrap_or(0.0)
}
