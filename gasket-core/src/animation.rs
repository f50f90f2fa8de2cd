//! Shared rotation clock for animated scenes

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Infinite and NaN angles have no position on the circle and map to 0.
pub fn wrap_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// The single rotation angle every instance reads each frame.
///
/// Owned by a [`Session`](crate::session::Session) and advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    angle: f32,
}

impl AnimationState {
    pub fn new(angle: f32) -> Self {
        Self {
            angle: wrap_degrees(angle),
        }
    }

    /// Current angle in degrees, always in `[0, 360)`
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The state one frame later: `(angle + speed) mod 360`
    pub fn tick(self, speed: f32) -> Self {
        Self::new(self.angle + speed)
    }

    /// Advance in place by `speed` degrees
    pub fn advance(&mut self, speed: f32) {
        *self = self.tick(speed);
    }
}

impl From<f32> for AnimationState {
    fn from(angle: f32) -> Self {
        Self::new(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_wraps() {
        let state = AnimationState::new(359.0).tick(5.0);
        assert_eq!(state.angle(), 4.0);
    }

    #[test]
    fn test_negative_speed_wraps_forward() {
        let state = AnimationState::new(2.0).tick(-5.0);
        assert_eq!(state.angle(), 357.0);
    }

    #[test]
    fn test_tiny_negative_stays_below_360() {
        let state = AnimationState::new(-1e-8);
        assert!(state.angle() < 360.0);
        assert!(state.angle() >= 0.0);
    }

    #[test]
    fn test_non_finite_angle_maps_to_zero() {
        assert_eq!(AnimationState::new(f32::NAN).angle(), 0.0);
        assert_eq!(AnimationState::new(f32::INFINITY).angle(), 0.0);
        assert_eq!(AnimationState::new(f32::NEG_INFINITY).tick(1.0).angle(), 1.0);
        assert_eq!(AnimationState::new(10.0).tick(f32::NAN).angle(), 0.0);
    }

    #[test]
    fn test_full_turn_closes() {
        let mut state = AnimationState::new(10.0);
        for _ in 0..360 {
            state.advance(1.0);
        }
        assert_eq!(state.angle(), 10.0);
    }

    #[test]
    fn test_zero_speed_holds() {
        let state = AnimationState::new(42.0);
        assert_eq!(state.tick(0.0), state);
    }
}
