use crate::constants::{BAND_BOTTOM_TRIM_PX, BAND_TOP_OFFSET_PX, SCROLL_Y_BIAS};

/// Raw measurements taken from the host on a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollInput {
    pub window_scroll_y: f64,
    pub viewport_height: f64,
    pub container_offset_top: f64,
}

/// Scroll offsets during which the model is on stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBand {
    pub top: f64,
    pub bottom: f64,
}

impl ScrollBand {
    pub fn new(container_offset_top: f64, viewport_height: f64) -> Self {
        let top = container_offset_top + BAND_TOP_OFFSET_PX;
        Self {
            top,
            bottom: top + viewport_height - BAND_BOTTOM_TRIM_PX,
        }
    }

    #[inline]
    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.top && scroll_y <= self.bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandTransition {
    Attach,
    Detach,
}

/// Rig (y, z) on the unit circle for a scroll offset.
#[inline]
pub fn rig_orbit(rig_x: f32, scroll_y: f64, viewport_height: f64) -> (f32, f32) {
    let angle = rig_x as f64 + scroll_y / viewport_height.max(1.0);
    (angle.sin() as f32, angle.cos() as f32)
}

/// Tracks the last scroll offset and whether the model is on stage.
#[derive(Clone, Debug, Default)]
pub struct ScrollController {
    scroll_y: f64,
    model_added: bool,
}

impl ScrollController {
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            scroll_y: initial_scroll_y,
            model_added: false,
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn model_added(&self) -> bool {
        self.model_added
    }

    /// Record a scroll event and decide whether the model enters or leaves.
    /// At most one transition per band crossing; nothing happens until the
    /// model has loaded.
    pub fn on_scroll(&mut self, input: ScrollInput, model_loaded: bool) -> Option<BandTransition> {
        self.scroll_y = input.window_scroll_y - SCROLL_Y_BIAS;
        let band = ScrollBand::new(input.container_offset_top, input.viewport_height);

        if band.contains(self.scroll_y) {
            if !self.model_added && model_loaded {
                self.model_added = true;
                return Some(BandTransition::Attach);
            }
        } else if self.model_added && model_loaded {
            self.model_added = false;
            return Some(BandTransition::Detach);
        }
        None
    }
}
