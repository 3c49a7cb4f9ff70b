pub mod app;
pub mod audio;
pub mod camera;
pub mod color;
pub mod constants;
pub mod galaxy;
pub mod geometry;
pub mod model;
pub mod params;
pub mod scene;
pub mod scroll;
pub mod skills;

pub use app::*;
pub use audio::*;
pub use camera::*;
pub use color::*;
pub use constants::*;
pub use galaxy::*;
pub use geometry::*;
pub use model::*;
pub use params::*;
pub use scene::*;
pub use scroll::*;
pub use skills::*;
