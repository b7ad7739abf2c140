// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful range control: a [`RangeModel`] plus its committed state.

use alloc::boxed::Box;
use core::fmt;

use tracing::{debug, trace, warn};

use crate::config::RangeConfig;
use crate::domain::RangeDomain;
use crate::error::ConfigResult;
use crate::handle::{ControlMode, HandleId};
use crate::model::RangeModel;
use crate::state::{InitialValues, RangeState};

/// Callback invoked after a handle's value changed.
///
/// Receives the committed value and the handle that moved.
pub type ValueChangedCallback = Box<dyn Fn(f64, HandleId) + Send + Sync>;

/// A range control's value model together with its committed state.
///
/// Adapters forward raw input through [`RangeSlider::input`] and controlled
/// values through [`RangeSlider::sync_external`], then render from
/// [`RangeSlider::state`].
///
/// ```rust
/// use std::sync::{Arc, Mutex};
///
/// use formstory_range::{HandleId, RangeConfig, RangeDomain, RangeSlider, RangeState};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
///
/// let mut slider = RangeSlider::new(
///     RangeConfig::new(RangeDomain::new(0.0, 100.0, 10.0)).initial_values((20.0, 80.0)),
/// )
/// .unwrap()
/// .with_on_value_changed(move |value, handle| sink.lock().unwrap().push((handle, value)));
///
/// slider.input(HandleId::Lower, 33.0);
/// assert_eq!(slider.state(), RangeState::Dual { lower: 30.0, upper: 80.0 });
/// assert_eq!(*seen.lock().unwrap(), [(HandleId::Lower, 30.0)]);
/// ```
pub struct RangeSlider {
    model: RangeModel,
    state: RangeState,
    last_external: Option<InitialValues>,
    revision: u64,
    on_value_changed: Option<ValueChangedCallback>,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("model", &self.model)
            .field("state", &self.state)
            .field("last_external", &self.last_external)
            .field("revision", &self.revision)
            .field("has_on_value_changed", &self.on_value_changed.is_some())
            .finish()
    }
}

impl RangeSlider {
    /// Validates `config` and creates a control in its initial state.
    ///
    /// # Errors
    ///
    /// See [`RangeModel::new`].
    pub fn new(config: RangeConfig) -> ConfigResult<Self> {
        Ok(Self::from_model(RangeModel::new(config)?))
    }

    /// Creates a control from an already validated model.
    #[must_use]
    pub fn from_model(model: RangeModel) -> Self {
        Self {
            state: model.initialize(),
            last_external: model.initial_values(),
            model,
            revision: 0,
            on_value_changed: None,
        }
    }

    /// Sets the change callback, builder style.
    #[must_use]
    pub fn with_on_value_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(f64, HandleId) + Send + Sync + 'static,
    {
        self.set_on_value_changed(callback);
        self
    }

    /// Sets the callback invoked after each committed change.
    pub fn set_on_value_changed<F>(&mut self, callback: F)
    where
        F: Fn(f64, HandleId) + Send + Sync + 'static,
    {
        self.on_value_changed = Some(Box::new(callback));
    }

    /// Removes the change callback; later commits notify nobody.
    pub fn clear_on_value_changed(&mut self) {
        self.on_value_changed = None;
    }

    /// The underlying model.
    #[must_use]
    pub const fn model(&self) -> &RangeModel {
        &self.model
    }

    /// The validated domain.
    #[must_use]
    pub const fn domain(&self) -> RangeDomain {
        self.model.domain()
    }

    /// Single or dual.
    #[must_use]
    pub const fn mode(&self) -> ControlMode {
        self.model.mode()
    }

    /// Snapshot of the committed state.
    #[must_use]
    pub const fn state(&self) -> RangeState {
        self.state
    }

    /// Committed value of `handle`, if the control has it.
    #[must_use]
    pub const fn value(&self, handle: HandleId) -> Option<f64> {
        self.state.get(handle)
    }

    /// Counter bumped every time the committed state changes.
    ///
    /// Inputs that leave the state as it was do not bump it.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies raw input for `handle` and commits the result.
    ///
    /// When the handle's value actually changed, the change callback runs
    /// after the new state is in place. Returns the committed state.
    pub fn input(&mut self, handle: HandleId, raw: f64) -> RangeState {
        let next = self.model.transition(&self.state, handle, raw);
        if next == self.state {
            return next;
        }

        self.commit(next);
        trace!(?handle, raw, revision = self.revision, "committed input");

        if let (Some(callback), Some(value)) = (&self.on_value_changed, next.get(handle)) {
            callback(value, handle);
        }
        next
    }

    /// Moves `handle` by a whole number of steps, as arrow keys would.
    ///
    /// Goes through [`RangeSlider::input`], so clamping, separation and
    /// notification apply as usual.
    pub fn nudge(&mut self, handle: HandleId, steps: i32) -> RangeState {
        let Some(current) = self.state.get(handle) else {
            warn!(?handle, mode = ?self.mode(), "ignoring nudge for foreign handle");
            return self.state;
        };
        self.input(handle, current + f64::from(steps) * self.domain().step)
    }

    /// Replaces the state from a controlled value supplied by the owner.
    ///
    /// The replacement only happens when `external` differs from the last
    /// external value seen (initial values count as the first one), so
    /// owners may call this on every render. Returns `true` if the value was
    /// new. No change callback runs.
    pub fn sync_external(&mut self, external: impl Into<InitialValues>) -> bool {
        let external = external.into();
        if self.last_external == Some(external) {
            return false;
        }
        self.last_external = Some(external);

        let next = self.model.sync_external(&self.state, external);
        debug!(?external, state = ?next, "external value synced");
        if next != self.state {
            self.commit(next);
        }
        true
    }

    fn commit(&mut self, next: RangeState) {
        debug_assert!(
            self.model.is_legal(&next),
            "model produced an illegal state: {next:?}"
        );
        self.state = next;
        self.revision = self.revision.wrapping_add(1);
    }
}
