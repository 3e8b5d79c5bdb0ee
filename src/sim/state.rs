//! Simulation aggregate
//!
//! Everything that changes while the scope runs lives here, owned by the
//! frame loop's thread.

use glam::Vec2;

use super::clock::SweepClock;
use super::field::BlipField;
use super::random::RandomSource;
use crate::settings::Settings;

/// Center and radius of the scope on the current surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: Vec2,
    /// Half the shorter surface dimension
    pub radius: f32,
}

impl RadarGeometry {
    pub fn from_size(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            center: Vec2::new(w / 2.0, h / 2.0),
            radius: w.min(h) / 2.0,
        }
    }
}

/// Complete radar state
#[derive(Debug, Clone)]
pub struct RadarSimulation {
    /// Surface size in pixels
    pub size: (u32, u32),
    pub field: BlipField,
    pub clock: SweepClock,
    pub settings: Settings,
    rng: RandomSource,
    close_requested: bool,
}

impl RadarSimulation {
    pub fn new(settings: Settings, mut rng: RandomSource) -> Self {
        let size = (settings.width, settings.height);
        let field = BlipField::new(size.0, size.1, &mut rng);
        Self {
            size,
            field,
            clock: SweepClock::new(),
            settings,
            rng,
            close_requested: false,
        }
    }

    /// Surface resized: remember the size and scatter a fresh field
    ///
    /// A zero-sized surface (minimized window) keeps the current blips.
    pub fn reshape(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        if width == 0 || height == 0 {
            log::debug!("Surface collapsed to {}x{}, keeping blips", width, height);
            return;
        }
        self.field.initialize(width, height, &mut self.rng);
        log::info!("Reshaped to {}x{}, {} blips reinitialized", width, height, self.field.len());
    }

    pub fn geometry(&self) -> RadarGeometry {
        RadarGeometry::from_size(self.size.0, self.size.1)
    }

    pub fn center(&self) -> Vec2 {
        self.geometry().center
    }

    /// Advance every blip by one tick at `angle`; returns how many moved
    pub fn update_blips(&mut self, angle: u32) -> usize {
        let center = self.center();
        self.field.update(angle, center, self.settings.motion)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn should_close(&self) -> bool {
        self.close_requested
    }
}
