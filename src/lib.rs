//! Toy Dive - an underwater toy-catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (toy lifecycle, diver, scoring)
//! - `render`: Canvas 2D scene drawing (wasm only)
//! - `audio`: Procedural sound cues via the Web Audio API (wasm only)
//! - `settings`: Player preferences and round configuration

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield (canvas) dimensions in pixels
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Simulation tick rate (frames per second)
    pub const TICK_HZ: u32 = 60;

    /// Diver sprite dimensions
    pub const DIVER_WIDTH: f32 = 50.0;
    pub const DIVER_HEIGHT: f32 = 50.0;
    /// Pixels moved per key press
    pub const DIVER_STEP: f32 = 7.5;
    /// Diver spawn position
    pub const DIVER_START_X: f32 = 400.0;
    pub const DIVER_START_Y: f32 = 500.0;

    /// Toy radius at spawn and its shrink floor
    pub const TOY_INITIAL_RADIUS: f32 = 30.0;
    pub const TOY_MIN_RADIUS: f32 = 15.0;
    /// Sink/rise speed range in pixels per tick
    pub const TOY_MIN_SPEED: f32 = 0.5;
    pub const TOY_MAX_SPEED: f32 = 2.0;
    /// How long a toy rests on the seabed before rising
    pub const TOY_REST_SECONDS: u32 = 5;

    /// Round defaults
    pub const DEFAULT_ROUND_SECS: u32 = 60;
    pub const DEFAULT_MAX_TOYS: usize = 5;
}
