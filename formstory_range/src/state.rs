// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::{SmallVec, smallvec};

use crate::handle::{ControlMode, HandleId};

/// Committed handle values of a range control.
///
/// A state is a value: transitions build a new `RangeState` instead of
/// editing the previous one, so a snapshot handed to a renderer can never
/// observe a half-applied update.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeState {
    /// Value of the lone handle.
    Single(f64),
    /// Values of both handles, `upper - lower >= separation_limit`.
    Dual {
        /// Value of [`HandleId::Lower`].
        lower: f64,
        /// Value of [`HandleId::Upper`].
        upper: f64,
    },
}

impl RangeState {
    /// Mode implied by the shape of this state.
    #[must_use]
    pub const fn mode(&self) -> ControlMode {
        match self {
            Self::Single(_) => ControlMode::Single,
            Self::Dual { .. } => ControlMode::Dual,
        }
    }

    /// Returns `true` if `handle` is part of this state.
    #[must_use]
    pub const fn contains(&self, handle: HandleId) -> bool {
        matches!(
            (self, handle),
            (Self::Single(_), HandleId::Single)
                | (Self::Dual { .. }, HandleId::Lower | HandleId::Upper)
        )
    }

    /// Value of `handle`, or `None` if the state has no such handle.
    #[must_use]
    pub const fn get(&self, handle: HandleId) -> Option<f64> {
        match (*self, handle) {
            (Self::Single(value), HandleId::Single) => Some(value),
            (Self::Dual { lower, .. }, HandleId::Lower) => Some(lower),
            (Self::Dual { upper, .. }, HandleId::Upper) => Some(upper),
            _ => None,
        }
    }

    /// Distance between the two handles, or `None` for a single handle.
    #[must_use]
    pub fn gap(&self) -> Option<f64> {
        match *self {
            Self::Single(_) => None,
            Self::Dual { lower, upper } => Some(upper - lower),
        }
    }

    /// Every `(handle, value)` pair, lower handle first.
    ///
    /// Renderers use this to lay out value labels without matching on the
    /// mode themselves.
    pub fn handles(&self) -> smallvec::IntoIter<[(HandleId, f64); 2]> {
        let pairs: SmallVec<[(HandleId, f64); 2]> = match *self {
            Self::Single(value) => smallvec![(HandleId::Single, value)],
            Self::Dual { lower, upper } => {
                smallvec![(HandleId::Lower, lower), (HandleId::Upper, upper)]
            }
        };
        pairs.into_iter()
    }
}

/// Values supplied from outside the control: at construction, or later as a
/// controlled-value update.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialValues {
    /// One value, for a single-handle control.
    Single(f64),
    /// A `(lower, upper)` pair, for a dual-handle control.
    Pair(f64, f64),
}

impl InitialValues {
    /// Mode implied by the shape of these values.
    #[must_use]
    pub const fn mode(&self) -> ControlMode {
        match self {
            Self::Single(_) => ControlMode::Single,
            Self::Pair(..) => ControlMode::Dual,
        }
    }

    /// Returns `true` if any value is `NaN`.
    #[must_use]
    pub fn has_nan(&self) -> bool {
        match *self {
            Self::Single(value) => value.is_nan(),
            Self::Pair(lower, upper) => lower.is_nan() || upper.is_nan(),
        }
    }
}

impl From<f64> for InitialValues {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<(f64, f64)> for InitialValues {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::Pair(lower, upper)
    }
}

impl From<[f64; 2]> for InitialValues {
    fn from([lower, upper]: [f64; 2]) -> Self {
        Self::Pair(lower, upper)
    }
}

impl From<RangeState> for InitialValues {
    fn from(state: RangeState) -> Self {
        match state {
            RangeState::Single(value) => Self::Single(value),
            RangeState::Dual { lower, upper } => Self::Pair(lower, upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{InitialValues, RangeState};
    use crate::{ControlMode, HandleId};

    #[test]
    fn get_only_answers_for_own_handles() {
        let single = RangeState::Single(3.0);
        assert_eq!(single.get(HandleId::Single), Some(3.0));
        assert_eq!(single.get(HandleId::Lower), None);
        assert_eq!(single.get(HandleId::Upper), None);

        let dual = RangeState::Dual {
            lower: 1.0,
            upper: 4.0,
        };
        assert_eq!(dual.get(HandleId::Single), None);
        assert_eq!(dual.get(HandleId::Lower), Some(1.0));
        assert_eq!(dual.get(HandleId::Upper), Some(4.0));
        assert_eq!(dual.gap(), Some(3.0));
        assert_eq!(single.gap(), None);
    }

    #[test]
    fn handles_iterate_lower_first() {
        let dual = RangeState::Dual {
            lower: 10.0,
            upper: 90.0,
        };
        let pairs: Vec<_> = dual.handles().collect();
        assert_eq!(pairs, [(HandleId::Lower, 10.0), (HandleId::Upper, 90.0)]);

        let pairs: Vec<_> = RangeState::Single(5.0).handles().collect();
        assert_eq!(pairs, [(HandleId::Single, 5.0)]);
    }

    #[test]
    fn contains_matches_mode() {
        for state in [
            RangeState::Single(0.0),
            RangeState::Dual {
                lower: 0.0,
                upper: 1.0,
            },
        ] {
            for &handle in state.mode().handles() {
                assert!(state.contains(handle));
            }
        }
        assert!(!RangeState::Single(0.0).contains(HandleId::Upper));
    }

    #[test]
    fn initial_values_conversions() {
        assert_eq!(InitialValues::from(2.0), InitialValues::Single(2.0));
        assert_eq!(InitialValues::from((1.0, 2.0)), InitialValues::Pair(1.0, 2.0));
        assert_eq!(InitialValues::from([1.0, 2.0]), InitialValues::Pair(1.0, 2.0));
        assert_eq!(InitialValues::Pair(1.0, 2.0).mode(), ControlMode::Dual);
        assert!(InitialValues::Pair(1.0, f64::NAN).has_nan());
        assert!(!InitialValues::Single(1.0).has_nan());

        let state = RangeState::Dual {
            lower: 1.0,
            upper: 2.0,
        };
        assert_eq!(InitialValues::from(state), InitialValues::Pair(1.0, 2.0));
    }
}
