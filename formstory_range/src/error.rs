// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Result of validating a [`RangeConfig`](crate::RangeConfig).
pub type ConfigResult<T> = Result<T, InvalidConfiguration>;

/// Reasons a range control cannot be constructed.
///
/// These are only produced while building a [`RangeModel`](crate::RangeModel)
/// or [`RangeSlider`](crate::RangeSlider). Once a model exists, no input can
/// make it fail.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidConfiguration {
    /// `min > max`, `step <= 0`, or a non-finite bound.
    #[error("malformed domain: min={min}, max={max}, step={step}")]
    MalformedDomain {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
        /// Configured step.
        step: f64,
    },
    /// The separation limit is negative or not finite.
    #[error("separation limit must be finite and non-negative, got {0}")]
    InvalidSeparation(f64),
    /// No two grid points of the domain are far enough apart.
    #[error("separation limit {separation} does not fit in a domain spanning {span}")]
    UnsatisfiableSeparation {
        /// Configured separation limit.
        separation: f64,
        /// Width of the domain, `max - min`.
        span: f64,
    },
    /// A single initial value was given to an explicitly dual-handle control.
    #[error("a dual-handle control needs a pair of initial values")]
    InitialValuesMismatch,
    /// The initial pair has its lower value above its upper value.
    #[error("initial lower value {lower} is above initial upper value {upper}")]
    InvertedPair {
        /// Initial lower value.
        lower: f64,
        /// Initial upper value.
        upper: f64,
    },
    /// An initial value was `NaN`.
    #[error("initial value is not a number")]
    NanInitialValue,
}
