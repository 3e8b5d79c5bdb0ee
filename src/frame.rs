//! Animation cycle
//!
//! One cycle walks the sweep once around the scope, drawing and presenting a
//! frame for every degree.

use std::thread;
use std::time::Duration;

use crate::consts::DEGREES_PER_SWEEP;
use crate::renderer::Canvas;
use crate::renderer::radar;
use crate::sim::RadarSimulation;

/// Where frames are drawn and shown
pub trait Display {
    /// Surface for the frame being built
    fn canvas(&mut self) -> &mut dyn Canvas;
    /// Show the finished frame
    fn present(&mut self);
}

/// Drives the sweep clock and paces frames
#[derive(Debug, Clone)]
pub struct FrameLoop {
    frame_delay: Duration,
    frames: u64,
}

impl FrameLoop {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            frame_delay,
            frames: 0,
        }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw, update and present the frame for the current sweep angle, then advance the clock
    ///
    /// Returns how many blips moved.
    pub fn step(&mut self, sim: &mut RadarSimulation, display: &mut dyn Display) -> usize {
        let angle = sim.clock.angle();
        let geometry = sim.geometry();

        let canvas = display.canvas();
        canvas.clear();
        radar::draw_spokes(canvas, &geometry);
        radar::draw_rings(canvas, &geometry);
        radar::draw_sweep(canvas, &geometry, angle);
        // Blips are drawn as they were before this tick's update
        radar::draw_blips(canvas, &sim.field);

        let moved = sim.update_blips(angle);

        if sim.settings.masking_ring {
            radar::draw_masking_ring(display.canvas(), &geometry);
        }

        display.present();
        self.frames += 1;

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }

        sim.clock.advance();
        moved
    }

    /// One full revolution of the sweep; stops early once a close is requested
    ///
    /// Returns the number of steps run.
    pub fn run_cycle(&mut self, sim: &mut RadarSimulation, display: &mut dyn Display) -> u32 {
        let mut steps = 0;
        let mut moved = 0;
        while steps < DEGREES_PER_SWEEP && !sim.should_close() {
            moved += self.step(sim, display);
            steps += 1;
        }
        log::trace!("Sweep cycle: {} steps, {} blip moves", steps, moved);
        steps
    }
}
