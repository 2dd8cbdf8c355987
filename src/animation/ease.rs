use crate::foundation::{
    fixed::Fixed,
    trig::{ANGLE_MAX, Angle},
};

/// Distance (in cover indices) beyond which the speed profile is flat.
pub const MAX_DISTANCE: Fixed = Fixed::from_int(2);
/// Slowest step per tick, reached at the very start and end of a transition.
pub const BASE_SPEED: Fixed = Fixed::from_raw(512);
/// Extra speed added at the middle of a transition (scaled by `1 + sin`).
pub const AMPLITUDE: Fixed = Fixed::from_raw(16384);

/// Per-tick step for a transition whose frame is `distance` away from its target.
///
/// Sine-shaped: slow near both ends, fastest one index away, always at least
/// [`BASE_SPEED`].
pub fn speed_for_distance(distance: Fixed) -> Fixed {
    let max = MAX_DISTANCE.raw();
    let d = distance.abs().raw().clamp(0, max);
    let angle = i64::from(ANGLE_MAX) * (d - max / 2) / (max * 4);
    let lift = (Fixed::ONE + Angle(angle as i32).sin()).raw();
    BASE_SPEED + Fixed::from_raw(AMPLITUDE.raw() * lift / Fixed::ONE_RAW)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
