//! Collapsible debug panel with one control per galaxy parameter.
//!
//! Range inputs update their readout on `input` but only commit on `change`,
//! so the galaxy is rebuilt once per release, not once per drag step.

use crate::constants::{GUI_PANEL_ID, GUI_SUMMARY};
use crate::dom;
use crate::frame::SharedApp;
use crate::layout;
use anyhow::anyhow;
use galaxy_core::{AppEvent, Control, ParamKey, ParamValue};
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Build the panel and append it to `<body>`. Returns `Ok(false)` when the
/// viewport is too narrow for it.
pub fn build_gui(window: &web::Window, document: &web::Document, app: &SharedApp) -> anyhow::Result<bool> {
    let (inner_width, _) = dom::inner_size(window);
    if !layout::gui_enabled(inner_width) {
        log::info!("[gui] viewport {}px too narrow, panel skipped", inner_width);
        return Ok(false);
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    let panel = document.create_element("details").map_err(js_err)?;
    panel.set_id(GUI_PANEL_ID);
    let summary = document.create_element("summary").map_err(js_err)?;
    summary.set_text_content(Some(GUI_SUMMARY));
    panel.append_child(&summary).map_err(js_err)?;

    for key in ParamKey::ALL {
        let row = build_row(document, app, key)?;
        panel.append_child(&row).map_err(js_err)?;
    }
    body.append_child(&panel).map_err(js_err)?;
    Ok(true)
}

fn build_row(document: &web::Document, app: &SharedApp, key: ParamKey) -> anyhow::Result<web::Element> {
    let row = document.create_element("label").map_err(js_err)?;
    row.set_class_name("gui-row");
    let name = document.create_element("span").map_err(js_err)?;
    name.set_class_name("gui-name");
    name.set_text_content(Some(key.label()));
    row.append_child(&name).map_err(js_err)?;

    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    input.set_name(key.label());

    let readout = document.create_element("span").map_err(js_err)?;
    readout.set_class_name("gui-value");

    let current = app.borrow().params.value(key);
    match key.control() {
        Control::Numeric(range) => {
            input.set_type("range");
            input.set_min(&range.min.to_string());
            input.set_max(&range.max.to_string());
            input.set_step(&range.step.to_string());
        }
        Control::Color => input.set_type("color"),
    }
    show_value(&input, &readout, current);

    {
        let readout = readout.clone();
        let input_ref = input.clone();
        dom::listen(input.as_ref(), "input", move |_: web::Event| {
            if let Some(value) = layout::parse_param_input(key, &input_ref.value()) {
                readout.set_text_content(Some(&layout::format_param_value(value)));
            }
        });
    }
    {
        let app = app.clone();
        let readout = readout.clone();
        let input_ref = input.clone();
        dom::listen(input.as_ref(), "change", move |_: web::Event| {
            let raw = input_ref.value();
            let Some(value) = layout::parse_param_input(key, &raw) else {
                log::warn!("[gui] {} ignored unreadable value {:?}", key.label(), raw);
                return;
            };
            let committed = {
                let mut app = app.borrow_mut();
                app.dispatch(AppEvent::ParamCommit { key, value });
                app.params.value(key)
            };
            show_value(&input_ref, &readout, committed);
        });
    }

    row.append_child(&input).map_err(js_err)?;
    row.append_child(&readout).map_err(js_err)?;
    Ok(row)
}

fn show_value(input: &web::HtmlInputElement, readout: &web::Element, value: ParamValue) {
    let text = layout::format_param_value(value);
    match value {
        ParamValue::Number(n) => input.set_value(&n.to_string()),
        ParamValue::Color(_) => input.set_value(&text),
    }
    readout.set_text_content(Some(&text));
}
