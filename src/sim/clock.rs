//! Sweep clock: the single driver of time on the scope

use crate::consts::DEGREES_PER_SWEEP;

/// Integer sweep angle cycling through [0, 360)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepClock {
    angle: u32,
}

impl SweepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current beam angle in whole degrees
    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Step one degree, wrapping 359 -> 0; returns the new angle
    pub fn advance(&mut self) -> u32 {
        self.angle = (self.angle + 1) % DEGREES_PER_SWEEP;
        self.angle
    }

    pub fn reset(&mut self) {
        self.angle = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wraps_after_359() {
        let mut clock = SweepClock::new();
        for _ in 0..359 {
            clock.advance();
        }
        assert_eq!(clock.angle(), 359);
        assert_eq!(clock.advance(), 0);
    }

    #[test]
    fn test_reset() {
        let mut clock = SweepClock::new();
        clock.advance();
        clock.advance();
        clock.reset();
        assert_eq!(clock.angle(), 0);
    }

    proptest! {
        #[test]
        fn test_full_revolution_returns_to_start(start in 0u32..360) {
            let mut clock = SweepClock::new();
            for _ in 0..start {
                clock.advance();
            }
            prop_assert_eq!(clock.angle(), start);
            for _ in 0..DEGREES_PER_SWEEP {
                let a = clock.advance();
                prop_assert!(a < DEGREES_PER_SWEEP);
            }
            prop_assert_eq!(clock.angle(), start);
        }
    }
}
