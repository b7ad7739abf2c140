// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric domain and step-grid arithmetic.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor` and `ceil`

use crate::error::{ConfigResult, InvalidConfiguration};

/// Slack, in grid-index units, absorbed when rounding onto the grid.
///
/// Values such as `0.3 / 0.1` land a few ulps away from an integer; without
/// this slack `floor`/`ceil` would skip a grid point.
const GRID_EPSILON: f64 = 1e-9;

/// Inclusive numeric interval plus the step granularity a control snaps to.
///
/// Legal values are `min + k * step` for integer `k >= 0`, never exceeding
/// `max`. When `max - min` is not a multiple of `step`, `max` itself is not on
/// the grid and the largest legal value is [`RangeDomain::max_reachable`].
///
/// `RangeDomain` is plain data; [`RangeDomain::validate`] checks it and is run
/// by [`RangeModel::new`](crate::RangeModel::new) before any state exists.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeDomain {
    /// Lowest legal value.
    pub min: f64,
    /// Upper bound of the interval.
    pub max: f64,
    /// Distance between neighbouring grid points. Must be positive.
    pub step: f64,
}

impl Default for RangeDomain {
    /// `0..=100` with a step of `1`.
    fn default() -> Self {
        Self::new(0.0, 100.0, 1.0)
    }
}

impl RangeDomain {
    /// Creates a domain without validating it.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Checks `min <= max`, `step > 0`, and that every field is finite.
    pub fn validate(&self) -> ConfigResult<()> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite || self.min > self.max || self.step <= 0.0 {
            return Err(InvalidConfiguration::MalformedDomain {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Width of the interval, `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Index of the highest grid point that does not exceed `max`.
    #[must_use]
    pub fn last_index(&self) -> f64 {
        (self.span() / self.step + GRID_EPSILON).floor().max(0.0)
    }

    /// The largest legal value: the highest grid point not above `max`.
    #[must_use]
    pub fn max_reachable(&self) -> f64 {
        self.at_index(self.last_index())
    }

    /// Returns `true` if `value` is inside the domain and sits on the grid.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if !(self.min..=self.max).contains(&value) {
            return false;
        }
        let index = (value - self.min) / self.step;
        (index - (index + 0.5).floor()).abs() <= GRID_EPSILON * index.abs().max(1.0)
    }

    /// Clamps into `[min, max]` and snaps to the nearest grid point.
    ///
    /// Ties round up, away from `min`. `NaN` passes through unchanged; callers
    /// that accept external input filter it first.
    #[must_use]
    pub fn constrain(&self, raw: f64) -> f64 {
        self.snap(raw.clamp(self.min, self.max))
    }

    /// Snaps to the nearest grid point, rounding exact ties up.
    ///
    /// The result never leaves `[min, max_reachable]`.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        self.at_index(((value - self.min) / self.step + 0.5).floor())
    }

    /// Lowest grid point whose distance above `from` is at least `distance`.
    ///
    /// The distance is measured on the computed grid values, so rounding in
    /// `min + k * step` never leaves the result short of `distance`. Saturates
    /// at [`RangeDomain::max_reachable`].
    #[must_use]
    pub fn first_at_least_above(&self, from: f64, distance: f64) -> f64 {
        let index = self.index_up(from + distance);
        let point = self.at_index(index);
        if point - from < distance {
            self.at_index(index + 1.0)
        } else {
            point
        }
    }

    /// Highest grid point whose distance below `from` is at least `distance`.
    ///
    /// Mirror of [`RangeDomain::first_at_least_above`]; saturates at `min`.
    #[must_use]
    pub fn last_at_least_below(&self, from: f64, distance: f64) -> f64 {
        let index = self.index_down(from - distance);
        let point = self.at_index(index);
        if from - point < distance {
            self.at_index(index - 1.0)
        } else {
            point
        }
    }

    /// Position of `value` along the domain as a fraction in `0.0..=1.0`.
    ///
    /// A zero-width domain maps everything to `0.0`.
    #[must_use]
    pub fn fraction_of(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Raw (unsnapped) value at `fraction` along the domain.
    ///
    /// Adapters use this to turn a pointer position on the track into the raw
    /// value they forward to a transition.
    #[must_use]
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        self.min + fraction.clamp(0.0, 1.0) * self.span()
    }

    fn index_up(&self, value: f64) -> f64 {
        ((value - self.min) / self.step - GRID_EPSILON).ceil()
    }

    fn index_down(&self, value: f64) -> f64 {
        ((value - self.min) / self.step + GRID_EPSILON).floor()
    }

    fn at_index(&self, index: f64) -> f64 {
        let index = index.clamp(0.0, self.last_index());
        (self.min + index * self.step).min(self.max)
    }
}
