//! Eased transition state machine.
//!
//! Resting means `direction == None` and `frame == focus << 16`. While a
//! transition runs, each tick advances `frame` by the eased speed, derives the
//! transitioning cover from it and blends that cover and the neighbor it is
//! approaching; every other cover slides via [`arrange_except`]. The tick on
//! which the derived index reaches the target snaps everything back to rest.

use crate::{
    animation::ease::speed_for_distance,
    foundation::{fixed::Fixed, trig::Angle},
    layout::{
        arrange::{arrange_covers, arrange_except},
        cover::{Cover, Placement},
        geometry::Geometry,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Brightness ramp for the covers at the edges of a limited browse view.
///
/// `fade` is the fractional part of the transition position scaled to
/// `0..=256`; the composer fades the outermost slots in and out with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFade {
    pub direction: Direction,
    pub fade: u16,
}

/// Result of one [`AnimationState::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was running.
    Idle,
    /// Still in flight; `index` is the cover currently leaving the center.
    Moving { index: usize },
    /// Reached the target this tick and snapped to rest.
    Arrived { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    frame: Fixed,
    direction: Option<Direction>,
    target: usize,
    fade: u16,
}

impl AnimationState {
    pub fn resting(focus: usize) -> Self {
        Self {
            frame: Fixed::from_int(focus as i64),
            direction: None,
            target: focus,
            fade: FADE_RESTING,
        }
    }

    /// Fractional cover position.
    pub fn frame(&self) -> Fixed {
        self.frame
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn is_transitioning(&self) -> bool {
        self.direction.is_some()
    }

    /// Edge ramp for the current tick; `None` at rest.
    pub fn edge_fade(&self) -> Option<EdgeFade> {
        self.direction.map(|direction| EdgeFade {
            direction,
            fade: self.fade,
        })
    }

    /// Start moving from a resting `focus` toward `target`.
    ///
    /// Returns `false` (and stays at rest) when `target == focus`.
    pub fn begin(&mut self, focus: usize, target: usize) -> bool {
        debug_assert!(!self.is_transitioning(), "begin while transitioning");
        if target == focus {
            return false;
        }
        self.frame = Fixed::from_int(focus as i64);
        self.target = target;
        self.fade = 0;
        self.direction = Some(if target > focus {
            Direction::Forward
        } else {
            Direction::Backward
        });
        tracing::debug!(from = focus, to = target, "transition started");
        true
    }

    /// Force arrival: jump to the target (if moving), rest, and re-arrange
    /// every cover with no transition offset.
    pub fn settle(&mut self, covers: &mut [Cover], focus: &mut usize, geometry: &Geometry) {
        if self.direction.take().is_some() {
            *focus = self.target;
        }
        self.target = *focus;
        self.frame = Fixed::from_int(*focus as i64);
        self.fade = FADE_RESTING;
        arrange_covers(covers, *focus, geometry, Fixed::ZERO);
    }

    /// Advance one tick, rewriting the placements this tick owns.
    pub fn advance(
        &mut self,
        covers: &mut [Cover],
        focus: &mut usize,
        geometry: &Geometry,
    ) -> TickOutcome {
        let Some(direction) = self.direction else {
            return TickOutcome::Idle;
        };
        if covers.is_empty() {
            self.direction = None;
            return TickOutcome::Idle;
        }

        let sign = direction.sign();
        let target = Fixed::from_int(self.target as i64);
        self.frame += speed_for_distance(self.frame - target) * sign;
        self.fade = (self.frame.frac().raw() >> 8) as u16;

        let last = (covers.len() - 1) as i64;
        let index = match direction {
            Direction::Forward => self.frame.to_int(),
            Direction::Backward => self.frame.ceil_int(),
        }
        .clamp(0, last) as usize;

        if index == self.target {
            self.settle(covers, focus, geometry);
            tracing::debug!(index, "transition arrived");
            return TickOutcome::Arrived { index };
        }

        let tick = (self.frame - Fixed::from_int(index as i64)).abs();
        *focus = index;

        let neighbor = (index as i64 + sign) as usize;
        let factor = geometry.spacing * tick * sign;
        arrange_except(covers, index, geometry, factor, &[index, neighbor]);

        covers[index].placement = Placement {
            angle: scaled_tilt(geometry.tilt, tick, sign),
            cx: -(geometry.offset_x * tick) * sign,
            cy: geometry.offset_y * tick,
        };

        // The neighbor approaches from the side it currently rests on.
        let remaining = Fixed::ONE - tick;
        if let Some(next) = covers.get_mut(neighbor) {
            next.placement = Placement {
                angle: scaled_tilt(geometry.tilt, remaining, -sign),
                cx: geometry.offset_x * remaining * sign,
                cy: geometry.offset_y * remaining,
            };
        }

        tracing::trace!(
            frame = self.frame.to_f64(),
            index,
            tick = tick.to_f64(),
            "transition tick"
        );
        TickOutcome::Moving { index }
    }
}

const FADE_RESTING: u16 = 256;

/// `sign * tilt * t` for a blend factor `t` in `[0, 1]`.
fn scaled_tilt(tilt: Angle, t: Fixed, sign: i64) -> Angle {
    Angle((sign * ((t.raw() * i64::from(tilt.0)) >> Fixed::SHIFT)) as i32)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/controller.rs"]
mod tests;
