use glam::Vec3;

// Shared tuning constants used by the core controllers and the web frontend.

// Galaxy animation
pub const GALAXY_SPIN_RATE: f32 = 0.4; // radians per second around Y

// Scroll
pub const SCROLL_Y_BIAS: f64 = 0.5; // subtracted from window.scrollY
pub const BAND_TOP_OFFSET_PX: f64 = 60.0; // added to the container's offsetTop
pub const BAND_BOTTOM_TRIM_PX: f64 = 150.0; // trimmed off the bottom of the band

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_LOCAL_POSITION: Vec3 = Vec3::new(3.0, 0.0, 3.0); // inside the rig

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Lights
pub const AMBIENT_INTENSITY: f32 = 1.0;
pub const MODEL_LIGHT_INTENSITY: f32 = 1.0;
pub const MODEL_LIGHT_DISTANCE: f32 = 100.0;
pub const MODEL_LIGHT_POSITION: Vec3 = Vec3::new(2.5, 0.0, 2.0);

// Model placement
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 300.0;
pub const MODEL_SCALE_NARROW: f32 = 1.5;
pub const MODEL_POSITION_NARROW: Vec3 = Vec3::new(-2.0, -1.0, -2.0);
pub const MODEL_SCALE_WIDE: f32 = 1.2;
pub const MODEL_POSITION_WIDE: Vec3 = Vec3::new(2.75, -0.2, 0.0);

// Skill spheres
pub const SKILL_SPHERE_RADIUS: f32 = 0.5;
pub const SKILL_SPHERE_WIDTH_SEGMENTS: u32 = 16;
pub const SKILL_SPHERE_HEIGHT_SEGMENTS: u32 = 32;

/// Image path and x offset for each default skill sphere, left to right.
pub const SKILL_SPHERES: [(&str, f32); 6] = [
    ("pictures/webdev4.png", -4.0),
    ("pictures/DSA2.png", -2.0),
    ("pictures/ML2.png", -0.7),
    ("pictures/DBMS2.png", 0.5),
    ("pictures/OOPS2.png", 1.5),
    ("pictures/OS2.png", 2.5),
];

// Assets
pub const MODEL_URL: &str = "/models/planet/planet/scene.gltf";
