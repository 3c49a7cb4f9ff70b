//! Pure layout helpers shared by the DOM glue (host-testable).

use crate::constants::MAX_PIXEL_RATIO;
use galaxy_core::{Control, ParamKey, ParamValue, Rgb, NARROW_VIEWPORT_MAX_WIDTH};

/// Device pixel ratio clamped to `MAX_PIXEL_RATIO`; garbage reads as 1.
#[inline]
pub fn pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Canvas backing store size for a CSS size.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = pixel_ratio(device_pixel_ratio);
    let w = (css_width.max(0.0) * ratio) as u32;
    let h = (css_height.max(0.0) * ratio) as u32;
    (w.max(1), h.max(1))
}

/// CSS box and backing store of the full-window canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub css_width: f64,
    pub css_height: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

/// The canvas always covers the window's inner size; the backing store is
/// that size times the capped pixel ratio.
pub fn canvas_size(inner_width: f64, inner_height: f64, device_pixel_ratio: f64) -> CanvasSize {
    let (backing_width, backing_height) = backing_size(inner_width, inner_height, device_pixel_ratio);
    CanvasSize {
        css_width: inner_width.max(0.0),
        css_height: inner_height.max(0.0),
        backing_width,
        backing_height,
    }
}

/// Only an autoplay refusal means the element is not playing. An `AbortError`
/// comes from a later `pause()` cutting a pending play short.
#[inline]
pub fn is_autoplay_refusal(error_name: Option<&str>) -> bool {
    error_name == Some("NotAllowedError")
}

/// Panel input text to a value of the kind `key` expects.
pub fn parse_param_input(key: ParamKey, raw: &str) -> Option<ParamValue> {
    match key.control() {
        Control::Numeric(_) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(ParamValue::Number),
        Control::Color => Rgb::from_hex(raw).ok().map(ParamValue::Color),
    }
}

/// `data-progress` attribute to a fraction; anything non-numeric counts as 0.
pub fn progress_fraction(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v / 100.0)
        .unwrap_or(0.0)
}

#[inline]
pub fn gui_enabled(inner_width: f64) -> bool {
    inner_width > NARROW_VIEWPORT_MAX_WIDTH
}

/// Resolve a relative asset reference against the URL of the file that named it.
pub fn resolve_uri(base: &str, relative: &str) -> String {
    if relative.contains("://") || relative.starts_with('/') || relative.starts_with("data:") {
        return relative.to_string();
    }
    let dir = match base.rfind('/') {
        Some(i) => &base[..=i],
        None => "",
    };
    let mut parts: Vec<&str> = dir.split('/').collect();
    // split leaves a trailing empty segment after the final slash
    parts.pop();
    for seg in relative.split('/') {
        match seg {
            "." | "" => {}
            ".." => {
                if parts.len() > 1 || parts.first().is_some_and(|p| !p.is_empty()) {
                    parts.pop();
                }
            }
            s => parts.push(s),
        }
    }
    parts.join("/")
}

/// Panel readout text for a parameter value.
pub fn format_param_value(value: ParamValue) -> String {
    match value {
        ParamValue::Number(n) if n.fract() == 0.0 => format!("{}", n as i64),
        ParamValue::Number(n) => {
            let s = format!("{:.3}", n);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        ParamValue::Color(c) => c.to_hex(),
    }
}
