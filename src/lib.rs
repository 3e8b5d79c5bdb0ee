//! Radar Sweep - an animated radar scope
//!
//! Core modules:
//! - `sim`: Blip motion model, sweep clock and the simulation aggregate
//! - `renderer`: Drawing surface abstraction, radar drawing routines and the wgpu presenter
//! - `frame`: The 360-step animation cycle
//! - `input`: Window events translated into simulation commands
//! - `settings`: Configurable defaults

pub mod error;
pub mod frame;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::RadarError;
pub use frame::{Display, FrameLoop};
pub use input::{InputEvent, Key};
pub use settings::{BlipMotion, Settings};
pub use sim::RadarSimulation;

use glam::Vec2;

/// Radar configuration constants
pub mod consts {
    /// Number of blips on the scope
    pub const BLIP_COUNT: usize = 20;
    /// Ticks a blip waits after moving before it can be swept again
    pub const BLIP_PAUSE_TICKS: i32 = 50;
    /// Brightness of a freshly swept blip
    pub const FULL_BRIGHTNESS: u8 = 255;
    /// Blips fade on every Nth degree of sweep
    pub const FADE_INTERVAL: u32 = 4;
    /// Brightness lost per fade step
    pub const FADE_STEP: u8 = 2;
    /// Lockstep mode moves every blip when `angle % LOCKSTEP_PERIOD == 0`
    pub const LOCKSTEP_PERIOD: u32 = 359;

    /// Blip radius as a fraction of the shorter surface dimension
    pub const BLIP_RADIUS_SCALE: f32 = 0.03;
    /// Smallest blip radius in pixels
    pub const MIN_BLIP_RADIUS: f32 = 1.0;
    /// Blip speed as a fraction of the surface dimension
    pub const BLIP_SPEED_SCALE: f32 = 0.01;

    /// Degrees in one full sweep
    pub const DEGREES_PER_SWEEP: u32 = 360;
    /// Number of spokes (45° apart)
    pub const SPOKE_COUNT: u32 = 8;
    /// Range ring radii as a fraction of the scope radius
    pub const RING_FACTORS: [f32; 4] = [1.0, 0.7, 0.4, 0.1];
    /// Lines in the sweep beam's fading tail
    pub const SWEEP_TRAIL_LINES: u32 = 60;
    /// Angular gap between tail lines (degrees)
    pub const SWEEP_TRAIL_SPACING: f32 = 0.5;
    /// Green channel of the leading sweep line
    pub const SWEEP_HEAD_GREEN: u8 = 250;
    /// Green channel lost per tail line
    pub const SWEEP_TRAIL_FADE: u8 = 3;

    /// Stroke widths
    pub const GRID_LINE_WIDTH: f32 = 2.0;
    pub const SWEEP_LINE_WIDTH: f32 = 1.0;
    pub const BLIP_LINE_WIDTH: f32 = 4.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Whole-degree heading of a vector in screen space, in [0, 360)
///
/// Screen space has y pointing down, so increasing angles turn clockwise on
/// screen, matching the direction the sweep beam rotates.
#[inline]
pub fn heading_degrees(v: Vec2) -> u32 {
    let degrees = normalize_degrees(v.y.atan2(v.x).to_degrees());
    (degrees as u32) % 360
}
