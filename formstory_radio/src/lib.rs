// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formstory Radio: the value model behind a radio-button group.
//!
//! A [`RadioGroup`] tracks which value of a fixed option list is checked and
//! notifies an owner when the checked value changes or a button loses focus.
//! Rendering the buttons, the fieldset and the legend is left to the caller.
//!
//! The model is deliberately permissive: [`RadioGroup::select`] accepts any
//! value, including ones that match no option, and leaves it to the adapter
//! to only forward values it rendered.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use formstory_radio::{RadioGroup, RadioOption};
//!
//! let changes = Arc::new(Mutex::new(Vec::new()));
//! let sink = changes.clone();
//!
//! let mut group = RadioGroup::new("size")
//!     .with_options([
//!         RadioOption::new("Small", 's'),
//!         RadioOption::new("Medium", 'm'),
//!         RadioOption::new("Large", 'l').disabled(true),
//!     ])
//!     .with_checked(Some('m'))
//!     .with_on_checked_value_changed(move |value| sink.lock().unwrap().push(*value));
//!
//! group.select('s');
//! assert_eq!(group.checked(), Some(&'s'));
//! assert_eq!(group.checked_index(), Some(0));
//! assert_eq!(*changes.lock().unwrap(), ['s']);
//!
//! assert_eq!(group.option_id(2).as_deref(), Some("size-option-3"));
//! assert!(group.is_option_disabled(2));
//! ```
//!
//! ## Controlled values
//!
//! When the owner supplies the checked value, call
//! [`RadioGroup::sync_external`] with it. The internal value is replaced
//! outright and no change notification is sent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};

/// Callback receiving a radio value.
pub type RadioValueCallback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// One selectable entry of a [`RadioGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioOption<T> {
    /// Text shown next to the button.
    pub label: String,
    /// Value reported when this option is selected.
    pub value: T,
    /// Whether this option is rendered disabled.
    pub disabled: bool,
}

impl<T> RadioOption<T> {
    /// Creates an enabled option.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            disabled: false,
        }
    }

    /// Sets whether the option is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Checked value and option list of a radio-button group.
pub struct RadioGroup<T> {
    name: String,
    options: SmallVec<[RadioOption<T>; 4]>,
    checked: Option<T>,
    disable_all: bool,
    has_error: bool,
    revision: u64,
    on_checked_value_changed: Option<RadioValueCallback<T>>,
    on_focus_lost: Option<RadioValueCallback<T>>,
}

impl<T: fmt::Debug> fmt::Debug for RadioGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioGroup")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("checked", &self.checked)
            .field("disable_all", &self.disable_all)
            .field("has_error", &self.has_error)
            .field("revision", &self.revision)
            .field(
                "has_on_checked_value_changed",
                &self.on_checked_value_changed.is_some(),
            )
            .field("has_on_focus_lost", &self.on_focus_lost.is_some())
            .finish()
    }
}

impl<T> RadioGroup<T> {
    /// Creates an empty group with nothing checked.
    ///
    /// `name` identifies the group; it also prefixes per-option ids.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: SmallVec::new(),
            checked: None,
            disable_all: false,
            has_error: false,
            revision: 0,
            on_checked_value_changed: None,
            on_focus_lost: None,
        }
    }

    /// Replaces the option list, builder style.
    #[must_use]
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = RadioOption<T>>,
    {
        self.options = options.into_iter().collect();
        self
    }

    /// Sets the initially checked value, builder style.
    #[must_use]
    pub fn with_checked(mut self, checked: Option<T>) -> Self {
        self.checked = checked;
        self
    }

    /// Disables every option at once, builder style.
    #[must_use]
    pub fn with_all_disabled(mut self, disable_all: bool) -> Self {
        self.disable_all = disable_all;
        self
    }

    /// Marks the whole group as being in an error state, builder style.
    #[must_use]
    pub fn with_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    /// Sets the change callback, builder style.
    #[must_use]
    pub fn with_on_checked_value_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.set_on_checked_value_changed(callback);
        self
    }

    /// Sets the focus-lost callback, builder style.
    #[must_use]
    pub fn with_on_focus_lost<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.set_on_focus_lost(callback);
        self
    }

    /// Sets the callback invoked after [`RadioGroup::select`].
    pub fn set_on_checked_value_changed<F>(&mut self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_checked_value_changed = Some(Box::new(callback));
    }

    /// Sets the callback invoked by [`RadioGroup::lose_focus`].
    pub fn set_on_focus_lost<F>(&mut self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_focus_lost = Some(Box::new(callback));
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[RadioOption<T>] {
        &self.options
    }

    /// Currently checked value, if any.
    #[must_use]
    pub fn checked(&self) -> Option<&T> {
        self.checked.as_ref()
    }

    /// Whether every option is disabled.
    #[must_use]
    pub fn is_all_disabled(&self) -> bool {
        self.disable_all
    }

    /// Whether the group is displayed in an error state.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Sets whether every option is disabled.
    pub fn set_all_disabled(&mut self, disable_all: bool) {
        self.disable_all = disable_all;
    }

    /// Sets whether the group is displayed in an error state.
    pub fn set_error(&mut self, has_error: bool) {
        self.has_error = has_error;
    }

    /// Counter bumped every time the checked value changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Element id for the option at `index`, `"{name}-option-{index + 1}"`.
    ///
    /// Returns `None` past the end of the option list.
    #[must_use]
    pub fn option_id(&self, index: usize) -> Option<String> {
        (index < self.options.len()).then(|| format!("{}-option-{}", self.name, index + 1))
    }

    /// Whether the option at `index` should be rendered disabled.
    ///
    /// Indices past the end of the option list count as disabled.
    #[must_use]
    pub fn is_option_disabled(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_none_or(|option| self.disable_all || option.disabled)
    }

    /// Reports that the button carrying `value` lost focus.
    ///
    /// The checked value is left alone.
    pub fn lose_focus(&self, value: &T) {
        trace!(group = %self.name, "focus lost");
        if let Some(callback) = &self.on_focus_lost {
            callback(value);
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> RadioGroup<T> {
    /// Checks `value`, replacing whatever was checked before.
    ///
    /// No check is made that `value` belongs to an option. The change
    /// callback runs after the new value is stored, even when `value` was
    /// already checked.
    pub fn select(&mut self, value: T) {
        if self.checked.as_ref() != Some(&value) {
            self.checked = Some(value);
            self.bump_revision();
        }
        debug!(
            group = %self.name,
            index = ?self.checked_index(),
            revision = self.revision,
            "radio value selected"
        );

        if let (Some(callback), Some(checked)) = (&self.on_checked_value_changed, &self.checked) {
            callback(checked);
        }
    }

    /// Replaces the checked value with one supplied by the owner.
    ///
    /// No callback runs. Returns `true` if the checked value changed.
    pub fn sync_external(&mut self, checked: Option<T>) -> bool {
        if self.checked == checked {
            return false;
        }
        self.checked = checked;
        self.bump_revision();
        debug!(group = %self.name, index = ?self.checked_index(), "radio value synced");
        true
    }

    /// Returns `true` if `value` is the checked value.
    #[must_use]
    pub fn is_checked(&self, value: &T) -> bool {
        self.checked.as_ref() == Some(value)
    }

    /// Index of the first option carrying the checked value.
    ///
    /// `None` when nothing is checked or the checked value matches no option.
    #[must_use]
    pub fn checked_index(&self) -> Option<usize> {
        let checked = self.checked.as_ref()?;
        self.options.iter().position(|option| &option.value == checked)
    }
}

#[cfg(test)]
mod tests {
    use super::{RadioGroup, RadioOption};

    fn group() -> RadioGroup<u8> {
        RadioGroup::new("grp").with_options([
            RadioOption::new("one", 1),
            RadioOption::new("two", 2).disabled(true),
        ])
    }

    #[test]
    fn option_ids_are_one_based() {
        let group = group();
        assert_eq!(group.option_id(0).as_deref(), Some("grp-option-1"));
        assert_eq!(group.option_id(1).as_deref(), Some("grp-option-2"));
        assert_eq!(group.option_id(2), None);
    }

    #[test]
    fn disabled_flags_combine() {
        let mut group = group();
        assert!(!group.is_option_disabled(0));
        assert!(group.is_option_disabled(1));
        assert!(group.is_option_disabled(9));

        group.set_all_disabled(true);
        assert!(group.is_option_disabled(0));
    }

    #[test]
    fn select_bumps_revision_only_on_change() {
        let mut group = group();
        group.select(1);
        assert_eq!(group.revision(), 1);
        group.select(1);
        assert_eq!(group.revision(), 1);
        group.select(7);
        assert_eq!(group.revision(), 2);
        assert_eq!(group.checked_index(), None);
    }
}
