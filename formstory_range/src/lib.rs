// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formstory Range: the value model behind single and dual-handle sliders.
//!
//! This crate owns the _numbers_ of a range control and nothing else. It does
//! not draw tracks or thumbs, handle pointer capture, or know about any UI
//! framework. A presentation adapter forwards raw `(handle, value)` input,
//! the model answers with a new legal state, and the adapter re-renders.
//!
//! The pieces are:
//!
//! - [`RangeDomain`]: an inclusive interval plus a step grid.
//! - [`RangeState`]: committed handle values, either [`RangeState::Single`]
//!   or [`RangeState::Dual`].
//! - [`RangeConfig`]: construction settings (domain, mode, separation limit,
//!   initial values).
//! - [`RangeModel`]: the validated configuration and the pure operations
//!   [`RangeModel::initialize`], [`RangeModel::transition`] and
//!   [`RangeModel::sync_external`].
//! - [`RangeSlider`]: a stateful wrapper that commits transitions, keeps a
//!   revision counter, and notifies an owner of every committed change.
//!
//! ## Invariants
//!
//! Every state the model hands out satisfies:
//!
//! - each value lies in `[min, max]` and equals `min + k * step` for some
//!   integer `k >= 0`;
//! - with two handles, `upper - lower >= separation_limit`.
//!
//! Raw input is never rejected. It is clamped, snapped to the nearest grid
//! point (exact ties round up), and in dual mode the handle being moved
//! yields to the separation limit while the other one stays where it is.
//!
//! ## Minimal example
//!
//! ```rust
//! use formstory_range::{HandleId, RangeConfig, RangeDomain, RangeSlider, RangeState};
//!
//! let mut slider = RangeSlider::new(
//!     RangeConfig::new(RangeDomain::new(0.0, 100.0, 1.0))
//!         .separation_limit(5.0)
//!         .initial_values((40.0, 50.0)),
//! )
//! .unwrap();
//!
//! // Dragging the upper handle below the separation limit stops it at 45.
//! slider.input(HandleId::Upper, 42.0);
//! assert_eq!(slider.state(), RangeState::Dual { lower: 40.0, upper: 45.0 });
//!
//! // The owner pushes a new controlled value; the state is replaced wholesale.
//! slider.sync_external((10.0, 90.0));
//! assert_eq!(slider.state(), RangeState::Dual { lower: 10.0, upper: 90.0 });
//! ```
//!
//! ## Wiring an adapter
//!
//! Adapters that name their inputs after the control (`"price-lower"`,
//! `"price-upper"`) can decode events with [`HandleId::from_input_name`], and
//! map pointer positions with [`RangeDomain::value_at_fraction`]:
//!
//! ```rust
//! use formstory_range::{HandleId, RangeConfig, RangeDomain, RangeSlider};
//!
//! let mut slider = RangeSlider::new(
//!     RangeConfig::new(RangeDomain::new(0.0, 200.0, 10.0)).initial_values((0.0, 200.0)),
//! )
//! .unwrap();
//!
//! let (name, pointer_fraction) = ("price-lower", 0.26);
//! if let Some(handle) = HandleId::from_input_name("price", name, slider.mode()) {
//!     let raw = slider.domain().value_at_fraction(pointer_fraction);
//!     slider.input(handle, raw);
//! }
//! assert_eq!(slider.value(HandleId::Lower), Some(50.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): link the standard library for float math.
//! - `libm`: use `libm` float math for `no_std` targets.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration and state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod domain;
mod error;
mod handle;
mod model;
mod slider;
mod state;

pub use config::RangeConfig;
pub use domain::RangeDomain;
pub use error::{ConfigResult, InvalidConfiguration};
pub use handle::{ControlMode, HandleId};
pub use model::{RangeModel, initialize};
pub use slider::{RangeSlider, ValueChangedCallback};
pub use state::{InitialValues, RangeState};
