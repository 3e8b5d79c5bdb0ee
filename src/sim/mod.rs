//! Radar simulation module
//!
//! The blip motion model and the sweep clock. Deterministic for a given seed:
//! - Integer sweep angle is the only clock
//! - Seeded RNG only, consumed at (re)initialization
//! - Blips updated in index order
//! - No rendering or platform dependencies

pub mod blip;
pub mod clock;
pub mod field;
pub mod random;
pub mod state;

pub use blip::Blip;
pub use clock::SweepClock;
pub use field::BlipField;
pub use random::RandomSource;
pub use state::{RadarGeometry, RadarSimulation};
