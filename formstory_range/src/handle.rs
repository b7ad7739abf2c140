// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle identifiers and control modes.

use alloc::format;
use alloc::string::String;

/// How many handles a control carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlMode {
    /// One handle, [`HandleId::Single`].
    #[default]
    Single,
    /// Two handles, [`HandleId::Lower`] and [`HandleId::Upper`].
    Dual,
}

impl ControlMode {
    /// The handles a control in this mode exposes, in ascending order.
    #[must_use]
    pub const fn handles(self) -> &'static [HandleId] {
        match self {
            Self::Single => &[HandleId::Single],
            Self::Dual => &[HandleId::Lower, HandleId::Upper],
        }
    }
}

/// One movable value marker of a range control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandleId {
    /// The sole handle of a single-handle control.
    Single,
    /// The lower handle of a dual-handle control.
    Lower,
    /// The upper handle of a dual-handle control.
    Upper,
}

impl HandleId {
    /// Mode of the controls this handle belongs to.
    #[must_use]
    pub const fn mode(self) -> ControlMode {
        match self {
            Self::Single => ControlMode::Single,
            Self::Lower | Self::Upper => ControlMode::Dual,
        }
    }

    /// Suffix used when naming the adapter input that drives this handle.
    ///
    /// A lone handle shares the `upper` suffix: a single slider is a dual
    /// slider whose lower fill was never rendered.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Single | Self::Upper => "upper",
        }
    }

    /// Name of the adapter input for this handle, `"{control_name}-{suffix}"`.
    ///
    /// ```
    /// use formstory_range::HandleId;
    ///
    /// assert_eq!(HandleId::Lower.input_name("price"), "price-lower");
    /// assert_eq!(HandleId::Single.input_name("volume"), "volume-upper");
    /// ```
    #[must_use]
    pub fn input_name(self, control_name: &str) -> String {
        format!("{control_name}-{}", self.suffix())
    }

    /// Decodes an adapter input name back into a handle.
    ///
    /// Returns `None` if `input_name` does not belong to `control_name`, or
    /// names a handle `mode` does not have.
    ///
    /// ```
    /// use formstory_range::{ControlMode, HandleId};
    ///
    /// assert_eq!(
    ///     HandleId::from_input_name("price", "price-upper", ControlMode::Dual),
    ///     Some(HandleId::Upper)
    /// );
    /// assert_eq!(
    ///     HandleId::from_input_name("price", "price-upper", ControlMode::Single),
    ///     Some(HandleId::Single)
    /// );
    /// assert_eq!(
    ///     HandleId::from_input_name("price", "price-lower", ControlMode::Single),
    ///     None
    /// );
    /// ```
    #[must_use]
    pub fn from_input_name(
        control_name: &str,
        input_name: &str,
        mode: ControlMode,
    ) -> Option<Self> {
        let suffix = input_name.strip_prefix(control_name)?.strip_prefix('-')?;
        mode.handles()
            .iter()
            .copied()
            .find(|handle| handle.suffix() == suffix)
    }
}
