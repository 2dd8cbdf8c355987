//! Discretized angles and the fixed-point sine table.

use std::{f64::consts::TAU, sync::LazyLock};

use crate::foundation::fixed::Fixed;

/// Number of angle units in a full turn.
pub const ANGLE_MAX: i32 = 1024;

static SINE: LazyLock<[Fixed; ANGLE_MAX as usize]> = LazyLock::new(build_sine_table);

// One quadrant, mirrored: the table is exactly odd and the cardinal points are exact.
fn build_sine_table() -> [Fixed; ANGLE_MAX as usize] {
    const QUARTER: usize = (ANGLE_MAX / 4) as usize;
    let mut quadrant = [0i64; QUARTER + 1];
    for (i, slot) in quadrant.iter_mut().enumerate() {
        let radians = i as f64 * TAU / f64::from(ANGLE_MAX);
        *slot = (Fixed::ONE_RAW as f64 * radians.sin()).round() as i64;
    }

    let mut table = [Fixed::ZERO; ANGLE_MAX as usize];
    for (i, slot) in table.iter_mut().enumerate() {
        let raw = match i / QUARTER {
            0 => quadrant[i],
            1 => quadrant[2 * QUARTER - i],
            2 => -quadrant[i - 2 * QUARTER],
            _ => -quadrant[4 * QUARTER - i],
        };
        *slot = Fixed::from_raw(raw);
    }
    table
}

/// Angle in units of `1 / ANGLE_MAX` of a full turn. Any integer is accepted;
/// lookups reduce it modulo [`ANGLE_MAX`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(pub i32);

impl Angle {
    /// Facing the viewer.
    pub const ZERO: Angle = Angle(0);

    /// Nearest angle unit for a whole number of degrees.
    pub fn from_degrees(degrees: i32) -> Self {
        Self(degrees * ANGLE_MAX / 360)
    }

    /// Angle reduced into `[0, ANGLE_MAX)`.
    pub fn normalized(self) -> Self {
        Self(self.0.rem_euclid(ANGLE_MAX))
    }

    /// Table sine.
    pub fn sin(self) -> Fixed {
        SINE[self.normalized().0 as usize]
    }

    /// Table cosine.
    pub fn cos(self) -> Fixed {
        Angle(self.0.wrapping_add(ANGLE_MAX / 4)).sin()
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/trig.rs"]
mod tests;
