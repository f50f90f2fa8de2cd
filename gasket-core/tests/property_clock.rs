//! Property 5: Clock wraparound and closure
//!
//! tick keeps the angle in [0, 360) as (angle + speed) mod 360, and running
//! 360 / speed ticks returns the clock exactly to where it started.

use gasket_core::AnimationState;
use proptest::prelude::*;

/// Speeds that divide a full turn and keep every partial sum exact in f32
const FULL_TURN_SPEEDS: &[f32] = &[
    0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.5, 8.0, 9.0, 10.0, 12.0, 15.0, 18.0, 20.0,
    24.0, 30.0, 36.0, 40.0, 45.0, 60.0, 72.0, 90.0, 120.0, 180.0,
];

proptest! {
    #[test]
    fn tick_wraps_integer_angles(angle in 0u32..360, speed in 0u32..720) {
        let state = AnimationState::new(angle as f32).tick(speed as f32);
        prop_assert_eq!(state.angle(), ((angle + speed) % 360) as f32);
    }

    #[test]
    fn tick_stays_in_range(angle in -1.0e4f32..1.0e4, speed in -720.0f32..720.0) {
        let state = AnimationState::new(angle).tick(speed);
        prop_assert!(state.angle() >= 0.0);
        prop_assert!(state.angle() < 360.0);
    }

    #[test]
    fn full_turn_closes(
        start in 0u32..360,
        speed in proptest::sample::select(FULL_TURN_SPEEDS),
    ) {
        let initial = AnimationState::new(start as f32);
        let mut state = initial;
        let ticks = (360.0 / speed) as usize;
        for _ in 0..ticks {
            state.advance(speed);
        }
        prop_assert_eq!(state, initial);
    }
}

#[test]
fn wraps_359_plus_5_to_4() {
    assert_eq!(AnimationState::new(359.0).tick(5.0).angle(), 4.0);
}
