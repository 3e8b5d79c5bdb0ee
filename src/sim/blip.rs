//! Blip entity and its per-tick transition rules

use glam::Vec2;

use super::random::RandomSource;
use crate::consts::*;
use crate::heading_degrees;
use crate::settings::BlipMotion;

/// A simulated radar target, drawn as a ring
#[derive(Debug, Clone, PartialEq)]
pub struct Blip {
    /// Center in surface pixels (y down)
    pub pos: Vec2,
    /// Displacement applied each time the blip moves
    pub vel: Vec2,
    pub radius: f32,
    /// Fade level, 255 right after a sweep
    pub brightness: u8,
    /// Cooldown before the blip may move again; eligible at <= 0
    pub pause_ticks: i32,
}

impl Blip {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            brightness: FULL_BRIGHTNESS,
            pause_ticks: 0,
        }
    }

    /// Random blip scattered around the center of a `width` x `height` surface
    pub fn spawn(rng: &mut RandomSource, width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) * 0.5;
        let pos = Vec2::new(
            half.x + rng.signed_unit() * half.x,
            half.y + rng.signed_unit() * half.y,
        );
        let radius = (rng.uniform() * width.min(height) * BLIP_RADIUS_SCALE).max(MIN_BLIP_RADIUS);
        let vel = Vec2::new(
            rng.signed_unit() * width * BLIP_SPEED_SCALE,
            rng.signed_unit() * height * BLIP_SPEED_SCALE,
        );
        Self::new(pos, vel, radius)
    }

    /// Where the blip goes on its next move
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Whole-degree bearing of the next position as seen from `center`
    pub fn target_heading(&self, center: Vec2) -> u32 {
        heading_degrees(self.next_pos() - center)
    }

    /// The beam at `angle` is passing over where this blip is heading
    pub fn should_move(&self, angle: u32, center: Vec2) -> bool {
        self.pause_ticks < 1 && self.target_heading(center) == angle
    }

    /// Step along the velocity and light up at full brightness
    pub fn sweep(&mut self) {
        self.pos += self.vel;
        self.brightness = FULL_BRIGHTNESS;
    }

    /// Dim on every `FADE_INTERVAL`th degree
    pub fn fade(&mut self, angle: u32) {
        if angle % FADE_INTERVAL == 0 {
            self.brightness = self.brightness.saturating_sub(FADE_STEP);
        }
    }

    /// Advance one sweep tick; returns true if the blip moved
    pub fn tick(&mut self, angle: u32, center: Vec2, motion: BlipMotion) -> bool {
        self.fade(angle);
        match motion {
            BlipMotion::Swept => {
                if self.should_move(angle, center) {
                    self.sweep();
                    self.pause_ticks = BLIP_PAUSE_TICKS;
                    true
                } else {
                    self.pause_ticks = self.pause_ticks.saturating_sub(1);
                    false
                }
            }
            BlipMotion::Lockstep => {
                if angle % LOCKSTEP_PERIOD == 0 {
                    self.sweep();
                    true
                } else {
                    false
                }
            }
        }
    }
}
