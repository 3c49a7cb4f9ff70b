use crate::config::PageConfig;
use crate::dom;
use crate::layout;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Copy each skill's `data-progress` percentage onto its bar as a CSS custom
/// property. Returns how many bars were filled.
pub fn fill_skill_bars(document: &web::Document, config: &PageConfig) -> usize {
    let skills = match document.query_selector_all(config.skill_selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[skills] bad selector {}: {:?}", config.skill_selector, e);
            return 0;
        }
    };
    let mut filled = 0;
    for i in 0..skills.length() {
        let Some(skill) = skills.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let fraction = layout::progress_fraction(skill.get_attribute(config.progress_attribute).as_deref());
        let bar = skill
            .query_selector(config.progress_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if let Some(bar) = bar {
            if bar
                .style()
                .set_property(config.progress_property, &fraction.to_string())
                .is_ok()
            {
                filled += 1;
            }
        }
    }
    filled
}

/// Fill the bars once the document has been parsed.
pub fn wire_skill_bars(document: &web::Document, config: &PageConfig) {
    let ready_state = js_sys::Reflect::get(document.as_ref(), &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if ready_state == "loading" {
        let doc = document.clone();
        let config = config.clone();
        dom::listen(document.as_ref(), "DOMContentLoaded", move |_: web::Event| {
            let n = fill_skill_bars(&doc, &config);
            log::debug!("[skills] {} bars filled", n);
        });
    } else {
        let n = fill_skill_bars(document, config);
        log::debug!("[skills] {} bars filled", n);
    }
}
