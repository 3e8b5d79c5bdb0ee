//! Fixed-size collection of blips

use glam::Vec2;

use super::blip::Blip;
use super::random::RandomSource;
use crate::consts::BLIP_COUNT;
use crate::settings::BlipMotion;

/// All blips on the scope
///
/// Always holds exactly `BLIP_COUNT` blips; reinitializing replaces every one.
#[derive(Debug, Clone)]
pub struct BlipField {
    blips: Vec<Blip>,
}

impl BlipField {
    /// Field populated for a `width` x `height` surface
    pub fn new(width: u32, height: u32, rng: &mut RandomSource) -> Self {
        let mut field = Self {
            blips: Vec::with_capacity(BLIP_COUNT),
        };
        field.initialize(width, height, rng);
        field
    }

    /// Discard all blips and scatter fresh ones for the given surface size
    pub fn initialize(&mut self, width: u32, height: u32, rng: &mut RandomSource) {
        let (w, h) = (width as f32, height as f32);
        self.blips.clear();
        self.blips
            .extend((0..BLIP_COUNT).map(|_| Blip::spawn(rng, w, h)));
    }

    /// Apply one sweep tick to every blip; returns how many moved
    pub fn update(&mut self, angle: u32, center: Vec2, motion: BlipMotion) -> usize {
        self.blips
            .iter_mut()
            .map(|blip| blip.tick(angle, center, motion))
            .filter(|&moved| moved)
            .count()
    }

    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Blip> {
        self.blips.iter()
    }

    pub fn len(&self) -> usize {
        self.blips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blips.is_empty()
    }
}

impl<'a> IntoIterator for &'a BlipField {
    type Item = &'a Blip;
    type IntoIter = std::slice::Iter<'a, Blip>;

    fn into_iter(self) -> Self::IntoIter {
        self.blips.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_initialize_populates_full_field() {
        let mut rng = RandomSource::new(1);
        let field = BlipField::new(512, 512, &mut rng);
        assert_eq!(field.len(), BLIP_COUNT);
        for blip in &field {
            assert_eq!(blip.brightness, FULL_BRIGHTNESS);
            assert_eq!(blip.pause_ticks, 0);
            assert!(blip.radius > 0.0);
            assert!((0.0..=512.0).contains(&blip.pos.x));
            assert!((0.0..=512.0).contains(&blip.pos.y));
        }
    }

    #[test]
    fn test_positions_are_distinct() {
        let mut rng = RandomSource::new(2024);
        let field = BlipField::new(512, 512, &mut rng);
        let blips = field.blips();
        for (i, a) in blips.iter().enumerate() {
            for b in &blips[i + 1..] {
                assert_ne!(a.pos, b.pos);
            }
        }
    }

    #[test]
    fn test_reinitialize_replaces_blips() {
        let mut rng = RandomSource::new(5);
        let mut field = BlipField::new(512, 512, &mut rng);
        let before = field.blips().to_vec();
        field.initialize(512, 512, &mut rng);
        assert_eq!(field.len(), BLIP_COUNT);
        assert_ne!(field.blips(), &before[..]);
    }

    #[test]
    fn test_update_visits_every_blip() {
        let mut rng = RandomSource::new(9);
        let mut field = BlipField::new(512, 512, &mut rng);
        let center = Vec2::splat(256.0);
        // Angle 1 fades nothing; every blip not moved has its pause decremented
        let moved = field.update(1, center, BlipMotion::Swept);
        let paused = field.iter().filter(|b| b.pause_ticks == -1).count();
        assert_eq!(moved + paused, BLIP_COUNT);
    }

    #[test]
    fn test_lockstep_moves_all_at_zero() {
        let mut rng = RandomSource::new(11);
        let mut field = BlipField::new(512, 512, &mut rng);
        let center = Vec2::splat(256.0);
        assert_eq!(field.update(0, center, BlipMotion::Lockstep), BLIP_COUNT);
        assert_eq!(field.update(1, center, BlipMotion::Lockstep), 0);
        assert_eq!(field.update(359, center, BlipMotion::Lockstep), BLIP_COUNT);
    }

    #[test]
    fn test_two_sweeps_reach_every_blip() {
        let mut rng = RandomSource::new(0xC0FFEE);
        let mut field = BlipField::new(512, 512, &mut rng);
        let center = Vec2::splat(256.0);
        let mut swept = [false; BLIP_COUNT];

        for tick in 0..720u32 {
            field.update(tick % 360, center, BlipMotion::Swept);
            for (i, blip) in field.iter().enumerate() {
                // The cooldown is only ever set to its full value by a move
                if blip.pause_ticks == BLIP_PAUSE_TICKS {
                    swept[i] = true;
                }
            }
        }

        assert!(swept.iter().all(|&s| s), "unswept blips: {swept:?}");
    }
}
