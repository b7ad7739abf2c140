// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure transitions between legal range states.

use tracing::{debug, warn};

use crate::config::RangeConfig;
use crate::domain::RangeDomain;
use crate::error::{ConfigResult, InvalidConfiguration};
use crate::handle::{ControlMode, HandleId};
use crate::state::{InitialValues, RangeState};

/// Validated configuration plus the transition rules derived from it.
///
/// `RangeModel` holds no handle values. Every operation takes the current
/// [`RangeState`] and returns a new one, so callers decide where state lives
/// and when it is committed. [`RangeSlider`](crate::RangeSlider) is the
/// stateful wrapper most adapters want.
///
/// Every state a model returns satisfies:
/// - each value lies in `[domain.min, domain.max]` and sits on the step grid;
/// - in dual mode, `upper - lower >= separation_limit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeModel {
    domain: RangeDomain,
    mode: ControlMode,
    separation_limit: f64,
    initial_values: Option<InitialValues>,
}

impl RangeModel {
    /// Validates `config` and builds a model from it.
    ///
    /// A `(lower, upper)` pair switches the model to dual mode regardless of
    /// `config.mode`.
    ///
    /// # Errors
    ///
    /// - [`InvalidConfiguration::MalformedDomain`] for `min > max`, `step <= 0`
    ///   or non-finite bounds.
    /// - [`InvalidConfiguration::InvalidSeparation`] for a negative or
    ///   non-finite separation limit.
    /// - [`InvalidConfiguration::UnsatisfiableSeparation`] when, in dual mode,
    ///   no two grid points are `separation_limit` apart.
    /// - [`InvalidConfiguration::InitialValuesMismatch`] for a single initial
    ///   value on an explicitly dual control.
    /// - [`InvalidConfiguration::InvertedPair`] for `lower > upper`.
    /// - [`InvalidConfiguration::NanInitialValue`] for `NaN` initial values.
    pub fn new(config: RangeConfig) -> ConfigResult<Self> {
        let RangeConfig {
            domain,
            mode,
            separation_limit,
            initial_values,
        } = config;

        domain.validate()?;

        if !separation_limit.is_finite() || separation_limit < 0.0 {
            return Err(InvalidConfiguration::InvalidSeparation(separation_limit));
        }

        let mode = match (mode, initial_values) {
            (_, Some(InitialValues::Pair(..))) => ControlMode::Dual,
            (ControlMode::Dual, Some(InitialValues::Single(_))) => {
                return Err(InvalidConfiguration::InitialValuesMismatch);
            }
            (mode, _) => mode,
        };

        if let Some(values) = initial_values {
            if values.has_nan() {
                return Err(InvalidConfiguration::NanInitialValue);
            }
            if let InitialValues::Pair(lower, upper) = values
                && lower > upper
            {
                return Err(InvalidConfiguration::InvertedPair { lower, upper });
            }
        }

        if mode == ControlMode::Dual && domain.max_reachable() - domain.min < separation_limit {
            return Err(InvalidConfiguration::UnsatisfiableSeparation {
                separation: separation_limit,
                span: domain.span(),
            });
        }

        debug!(
            min = domain.min,
            max = domain.max,
            step = domain.step,
            ?mode,
            separation_limit,
            "range model configured"
        );

        Ok(Self {
            domain,
            mode,
            separation_limit,
            initial_values,
        })
    }

    /// The validated domain.
    #[must_use]
    pub const fn domain(&self) -> RangeDomain {
        self.domain
    }

    /// Resolved mode: dual if configured so or if a pair was supplied.
    #[must_use]
    pub const fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Minimum distance kept between the two handles in dual mode.
    #[must_use]
    pub const fn separation_limit(&self) -> f64 {
        self.separation_limit
    }

    /// Initial values the model was configured with, if any.
    #[must_use]
    pub const fn initial_values(&self) -> Option<InitialValues> {
        self.initial_values
    }

    /// The state a freshly created control starts in.
    ///
    /// Without initial values a single handle sits on the grid point nearest
    /// the midpoint, and a dual control spans `min..=max_reachable`. Supplied
    /// values are clamped and snapped like an external update.
    #[must_use]
    pub fn initialize(&self) -> RangeState {
        match (self.mode, self.initial_values) {
            (ControlMode::Single, Some(InitialValues::Single(value))) => {
                RangeState::Single(self.domain.constrain(value))
            }
            (ControlMode::Single, _) => {
                RangeState::Single(self.domain.snap((self.domain.min + self.domain.max) / 2.0))
            }
            (ControlMode::Dual, Some(InitialValues::Pair(lower, upper))) => {
                self.normalize_pair(lower, upper)
            }
            (ControlMode::Dual, _) => {
                self.normalize_pair(self.domain.min, self.domain.max_reachable())
            }
        }
    }

    /// Applies one handle's raw input and returns the resulting state.
    ///
    /// 1. `raw` is clamped to the domain and snapped to the nearest grid point
    ///    (exact ties round up).
    /// 2. In dual mode the moved handle yields to the separation limit: an
    ///    upper handle cannot go below `lower + separation_limit`, a lower
    ///    handle cannot go above `upper - separation_limit`. The other handle
    ///    never moves.
    /// 3. Only the moved handle's value changes.
    ///
    /// Out-of-range input is clamped rather than rejected. `NaN` input, or a
    /// handle that is not part of `state`, returns `state` unchanged.
    ///
    /// ```
    /// use formstory_range::{HandleId, RangeConfig, RangeDomain, RangeModel, RangeState};
    ///
    /// let model = RangeModel::new(
    ///     RangeConfig::new(RangeDomain::new(0.0, 100.0, 1.0))
    ///         .separation_limit(5.0)
    ///         .initial_values((40.0, 50.0)),
    /// )
    /// .unwrap();
    /// let state = model.initialize();
    ///
    /// let moved = model.transition(&state, HandleId::Upper, 42.0);
    /// assert_eq!(moved, RangeState::Dual { lower: 40.0, upper: 45.0 });
    /// ```
    #[must_use]
    pub fn transition(&self, state: &RangeState, handle: HandleId, raw: f64) -> RangeState {
        if raw.is_nan() {
            warn!(?handle, "ignoring NaN input");
            return *state;
        }

        let value = self.domain.constrain(raw);
        match (*state, handle) {
            (RangeState::Single(_), HandleId::Single) => RangeState::Single(value),
            (RangeState::Dual { lower, .. }, HandleId::Upper) => RangeState::Dual {
                lower,
                upper: self.push_upper(lower, value),
            },
            (RangeState::Dual { upper, .. }, HandleId::Lower) => RangeState::Dual {
                lower: self.push_lower(upper, value),
                upper,
            },
            (state, handle) => {
                warn!(?handle, mode = ?state.mode(), "ignoring input for foreign handle");
                state
            }
        }
    }

    /// Replaces `state` wholesale with one derived from an external value.
    ///
    /// This is not a transition: neither handle is preferred. The values are
    /// clamped and snapped, then the lower handle is settled first and the
    /// upper handle is pushed up until the separation limit holds.
    ///
    /// The mode is preserved. A value of the wrong shape, or one containing
    /// `NaN`, leaves `state` unchanged.
    #[must_use]
    pub fn sync_external(&self, state: &RangeState, external: InitialValues) -> RangeState {
        if external.has_nan() {
            warn!(?external, "ignoring NaN external value");
            return *state;
        }

        match (state.mode(), external) {
            (ControlMode::Single, InitialValues::Single(value)) => {
                RangeState::Single(self.domain.constrain(value))
            }
            (ControlMode::Dual, InitialValues::Pair(lower, upper)) => {
                self.normalize_pair(lower, upper)
            }
            (mode, external) => {
                warn!(?mode, ?external, "ignoring external value of the wrong shape");
                *state
            }
        }
    }

    /// Returns `true` if `state` satisfies every invariant of this model.
    ///
    /// Useful as a debug assertion in adapters that store state themselves.
    #[must_use]
    pub fn is_legal(&self, state: &RangeState) -> bool {
        if state.mode() != self.mode {
            return false;
        }
        let on_grid = state
            .handles()
            .all(|(_, value)| self.domain.contains(value));
        on_grid && state.gap().is_none_or(|gap| gap >= self.separation_limit)
    }

    fn push_upper(&self, lower: f64, candidate: f64) -> f64 {
        let floor = self
            .domain
            .first_at_least_above(lower, self.separation_limit);
        candidate.max(floor).min(self.domain.max_reachable())
    }

    fn push_lower(&self, upper: f64, candidate: f64) -> f64 {
        let ceiling = self
            .domain
            .last_at_least_below(upper, self.separation_limit);
        candidate.min(ceiling).max(self.domain.min)
    }

    fn normalize_pair(&self, lower: f64, upper: f64) -> RangeState {
        let ceiling = self
            .domain
            .last_at_least_below(self.domain.max_reachable(), self.separation_limit);
        let lower = self.domain.constrain(lower).min(ceiling);
        let upper = self.push_upper(lower, self.domain.constrain(upper));
        RangeState::Dual { lower, upper }
    }
}

/// Validates `config` and returns the state a new control starts in.
///
/// Shorthand for [`RangeModel::new`] followed by [`RangeModel::initialize`].
///
/// # Errors
///
/// See [`RangeModel::new`].
pub fn initialize(config: RangeConfig) -> ConfigResult<RangeState> {
    RangeModel::new(config).map(|model| model.initialize())
}

#[cfg(test)]
mod tests {
    use super::{RangeModel, initialize};
    use crate::{
        ControlMode, HandleId, InitialValues, InvalidConfiguration, RangeConfig, RangeDomain,
        RangeState,
    };

    fn dual(lower: f64, upper: f64) -> RangeState {
        RangeState::Dual { lower, upper }
    }

    #[test]
    fn pair_infers_dual_mode() {
        let config = RangeConfig::new(RangeDomain::default()).initial_values((10.0, 20.0));
        let model = RangeModel::new(config).unwrap();
        assert_eq!(model.mode(), ControlMode::Dual);
        assert_eq!(model.initialize(), dual(10.0, 20.0));
    }

    #[test]
    fn defaults_per_mode() {
        let single = initialize(RangeConfig::new(RangeDomain::new(0.0, 100.0, 10.0))).unwrap();
        assert_eq!(single, RangeState::Single(50.0));

        // Midpoint 15 is a tie between 10 and 20; ties round up.
        let single = initialize(RangeConfig::new(RangeDomain::new(0.0, 30.0, 10.0))).unwrap();
        assert_eq!(single, RangeState::Single(20.0));

        let pair = initialize(
            RangeConfig::new(RangeDomain::new(0.0, 10.0, 3.0)).mode(ControlMode::Dual),
        )
        .unwrap();
        assert_eq!(pair, dual(0.0, 9.0));
    }

    #[test]
    fn configuration_errors() {
        let domain = RangeDomain::new(0.0, 10.0, 1.0);

        assert_eq!(
            initialize(RangeConfig::new(domain).separation_limit(-1.0)),
            Err(InvalidConfiguration::InvalidSeparation(-1.0))
        );
        assert_eq!(
            initialize(
                RangeConfig::new(domain)
                    .mode(ControlMode::Dual)
                    .initial_values(3.0)
            ),
            Err(InvalidConfiguration::InitialValuesMismatch)
        );
        assert_eq!(
            initialize(RangeConfig::new(domain).initial_values((7.0, 2.0))),
            Err(InvalidConfiguration::InvertedPair {
                lower: 7.0,
                upper: 2.0
            })
        );
        assert_eq!(
            initialize(RangeConfig::new(domain).initial_values(f64::NAN)),
            Err(InvalidConfiguration::NanInitialValue)
        );
    }

    #[test]
    fn separation_must_fit_on_the_grid() {
        // 10 fits the span but the grid only reaches 9.
        let config = RangeConfig::new(RangeDomain::new(0.0, 10.0, 3.0))
            .mode(ControlMode::Dual)
            .separation_limit(10.0);
        assert!(matches!(
            RangeModel::new(config),
            Err(InvalidConfiguration::UnsatisfiableSeparation { .. })
        ));

        // Single mode ignores the limit.
        let config = RangeConfig::new(RangeDomain::new(0.0, 10.0, 1.0)).separation_limit(20.0);
        assert!(RangeModel::new(config).is_ok());
    }

    #[test]
    fn initial_pair_is_repaired_lower_first() {
        let config = RangeConfig::new(RangeDomain::new(0.0, 100.0, 1.0))
            .separation_limit(10.0)
            .initial_values((95.0, 97.0));
        let state = initialize(config).unwrap();
        assert_eq!(state, dual(90.0, 100.0));
    }

    #[test]
    fn off_grid_separation_keeps_values_on_grid() {
        let model = RangeModel::new(
            RangeConfig::new(RangeDomain::new(0.0, 100.0, 1.0))
                .separation_limit(5.5)
                .initial_values((40.0, 60.0)),
        )
        .unwrap();
        let state = model.initialize();

        let moved = model.transition(&state, HandleId::Upper, 41.0);
        assert_eq!(moved, dual(40.0, 46.0));
        let moved = model.transition(&state, HandleId::Lower, 59.0);
        assert_eq!(moved, dual(54.0, 60.0));
        assert!(model.is_legal(&moved));
    }

    #[test]
    fn foreign_handles_and_nan_are_ignored() {
        let model = RangeModel::new(RangeConfig::new(RangeDomain::default())).unwrap();
        let state = model.initialize();
        assert_eq!(model.transition(&state, HandleId::Lower, 3.0), state);
        assert_eq!(model.transition(&state, HandleId::Single, f64::NAN), state);
        assert_eq!(
            model.sync_external(&state, InitialValues::Pair(1.0, 2.0)),
            state
        );
    }

    #[test]
    fn is_legal_checks_every_invariant() {
        let model = RangeModel::new(
            RangeConfig::new(RangeDomain::new(0.0, 100.0, 10.0))
                .mode(ControlMode::Dual)
                .separation_limit(20.0),
        )
        .unwrap();
        assert!(model.is_legal(&dual(10.0, 30.0)));
        assert!(!model.is_legal(&dual(10.0, 20.0)));
        assert!(!model.is_legal(&dual(15.0, 50.0)));
        assert!(!model.is_legal(&dual(0.0, 110.0)));
        assert!(!model.is_legal(&RangeState::Single(10.0)));
    }
}
