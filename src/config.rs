use galaxy_core::MODEL_URL;

/// DOM hooks and asset locations the page depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub canvas_selector: &'static str,
    pub audio_id: &'static str,
    pub model_container_id: &'static str,
    pub skill_selector: &'static str,
    pub progress_selector: &'static str,
    pub progress_attribute: &'static str,
    pub progress_property: &'static str,
    pub model_url: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_selector: "canvas.webgl",
            audio_id: "backgroundSound",
            model_container_id: "model-container",
            skill_selector: ".skill",
            progress_selector: ".progress",
            progress_attribute: "data-progress",
            progress_property: "--progress",
            model_url: MODEL_URL,
        }
    }
}
