// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Where a component that does not fill its cell-block sits along one axis.
///
/// The integer form (`-1`, `0`, `1`) is what hosts usually store. Any negative value
/// means [`Alignment::Leading`] and any positive one means [`Alignment::Trailing`].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    /// Left, or top.
    #[default]
    Leading,
    Center,
    /// Right, or bottom.
    Trailing,
}

impl Alignment {
    /// How far to move a component that is `delta` pixels smaller than its cell-block.
    /// Centering rounds up, so an odd leftover pixel goes before the component.
    #[must_use]
    pub fn offset(self, delta: i32) -> i32 {
        let delta = delta.max(0);
        match self {
            Alignment::Leading => 0,
            Alignment::Center => (delta + 1) / 2,
            Alignment::Trailing => delta,
        }
    }
}

impl From<i32> for Alignment {
    fn from(value: i32) -> Self {
        match value.signum() {
            -1 => Alignment::Leading,
            0 => Alignment::Center,
            _ => Alignment::Trailing,
        }
    }
}

impl From<Alignment> for i32 {
    fn from(value: Alignment) -> Self {
        match value {
            Alignment::Leading => -1,
            Alignment::Center => 0,
            Alignment::Trailing => 1,
        }
    }
}
