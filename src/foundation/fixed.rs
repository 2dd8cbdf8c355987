//! Fixed-point scalar carrying all carousel geometry.
//!
//! Values are `i64` scaled by [`Fixed::ONE`] (16 fractional bits). Products and
//! quotients go through `i128` and saturate instead of wrapping, so a bad
//! configuration degrades to clipped geometry rather than a panic.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Signed fixed-point number with 16 fractional bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i64);

impl Fixed {
    /// Number of fractional bits.
    pub const SHIFT: u32 = 16;
    /// Raw value of `1.0`.
    pub const ONE_RAW: i64 = 1 << Self::SHIFT;
    /// `0.0`
    pub const ZERO: Fixed = Fixed(0);
    /// `1.0`
    pub const ONE: Fixed = Fixed(Self::ONE_RAW);
    /// `0.5`
    pub const HALF: Fixed = Fixed(Self::ONE_RAW / 2);
    /// Largest representable value; also the result of a positive division by zero.
    pub const MAX: Fixed = Fixed(i64::MAX);
    /// Smallest representable value; also the result of a negative division by zero.
    pub const MIN: Fixed = Fixed(i64::MIN);

    /// Wrap a raw scaled value.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Convert an integer to fixed-point.
    pub const fn from_int(n: i64) -> Self {
        Self(n.saturating_mul(Self::ONE_RAW))
    }

    /// Raw scaled representation.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Truncate to an integer, rounding toward negative infinity.
    pub const fn to_int(self) -> i64 {
        self.0 >> Self::SHIFT
    }

    /// Round up to the next integer.
    pub const fn ceil_int(self) -> i64 {
        self.0.saturating_add(Self::ONE_RAW - 1) >> Self::SHIFT
    }

    /// Fractional part in `[0, 1)`.
    pub const fn frac(self) -> Self {
        Self(self.0 & (Self::ONE_RAW - 1))
    }

    /// Absolute value (saturating at [`Fixed::MAX`]).
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Compute `self * num / den` on raw values without an intermediate rescale.
    ///
    /// Used where the ratio `num / den` is itself dimensionless (e.g. `cy * cos / sin`).
    pub fn mul_div(self, num: Fixed, den: Fixed) -> Self {
        if den.0 == 0 {
            return saturated_quotient(i128::from(self.0) * i128::from(num.0));
        }
        saturate(i128::from(self.0) * i128::from(num.0) / i128::from(den.0))
    }

    /// Approximate value as a float, for diagnostics only.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE_RAW as f64
    }
}

fn saturate(v: i128) -> Fixed {
    Fixed(v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

fn saturated_quotient(dividend: i128) -> Fixed {
    match dividend.signum() {
        1 => Fixed::MAX,
        -1 => Fixed::MIN,
        _ => Fixed::ZERO,
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = *self - rhs;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(self.0.saturating_neg())
    }
}

/// Fixed-point product.
impl Mul for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: Fixed) -> Fixed {
        saturate((i128::from(self.0) * i128::from(rhs.0)) >> Self::SHIFT)
    }
}

/// Fixed-point quotient; a zero divisor saturates toward the dividend's sign.
impl Div for Fixed {
    type Output = Fixed;

    fn div(self, rhs: Fixed) -> Fixed {
        let dividend = i128::from(self.0) << Self::SHIFT;
        if rhs.0 == 0 {
            return saturated_quotient(dividend);
        }
        saturate(dividend / i128::from(rhs.0))
    }
}

/// Scale by a plain integer.
impl Mul<i64> for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: i64) -> Fixed {
        Fixed(self.0.saturating_mul(rhs))
    }
}

/// Divide by a plain integer (truncating toward zero on the raw value).
impl Div<i64> for Fixed {
    type Output = Fixed;

    fn div(self, rhs: i64) -> Fixed {
        if rhs == 0 {
            return saturated_quotient(i128::from(self.0));
        }
        Fixed(self.0 / rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/fixed.rs"]
mod tests;
