// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::domain::RangeDomain;
use crate::handle::ControlMode;
use crate::state::InitialValues;

/// Construction-time settings of a range control.
///
/// The configuration is checked once by [`RangeModel::new`](crate::RangeModel::new)
/// and is immutable afterwards.
///
/// # Example
///
/// ```rust
/// use formstory_range::{ControlMode, RangeConfig, RangeDomain};
///
/// let config = RangeConfig::new(RangeDomain::new(0.0, 500.0, 5.0))
///     .mode(ControlMode::Dual)
///     .separation_limit(25.0)
///     .initial_values((100.0, 300.0));
///
/// assert_eq!(config.separation_limit, 25.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangeConfig {
    /// Interval and step the handles live on.
    pub domain: RangeDomain,
    /// Requested handle count.
    ///
    /// A [`InitialValues::Pair`] switches the control to dual mode even when
    /// this is left at [`ControlMode::Single`].
    pub mode: ControlMode,
    /// Minimum distance between the two handles. Ignored in single mode.
    pub separation_limit: f64,
    /// Starting values. When absent a single handle starts at the midpoint
    /// and a dual control spans the whole domain.
    pub initial_values: Option<InitialValues>,
}

impl RangeConfig {
    /// Creates a single-handle configuration over `domain`.
    #[must_use]
    pub const fn new(domain: RangeDomain) -> Self {
        Self {
            domain,
            mode: ControlMode::Single,
            separation_limit: 0.0,
            initial_values: None,
        }
    }

    /// Sets the requested handle count.
    #[must_use]
    pub const fn mode(mut self, mode: ControlMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the minimum distance kept between the two handles.
    #[must_use]
    pub const fn separation_limit(mut self, separation_limit: f64) -> Self {
        self.separation_limit = separation_limit;
        self
    }

    /// Sets the starting value or `(lower, upper)` pair.
    #[must_use]
    pub fn initial_values(mut self, values: impl Into<InitialValues>) -> Self {
        self.initial_values = Some(values.into());
        self
    }

    /// Mode the control ends up in once the shape of the initial values is
    /// taken into account.
    #[must_use]
    pub const fn resolved_mode(&self) -> ControlMode {
        match self.initial_values {
            Some(InitialValues::Pair(..)) => ControlMode::Dual,
            _ => self.mode,
        }
    }
}
