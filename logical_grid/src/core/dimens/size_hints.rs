// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The space a parent is willing to give, used when asking for a preferred size.
///
/// A hint constrains wrapping: content whose height depends on its width (wrapping
/// text, flowing children) reports a different preferred height for a different width
/// hint. A hint `<= 0` means "no hint" and is normalized to [`None`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeHints {
    pub width_hint: Option<i32>,
    pub height_hint: Option<i32>,
}

impl SizeHints {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            width_hint: None,
            height_hint: None,
        }
    }

    #[must_use]
    pub fn with_width(self, width: i32) -> Self {
        Self {
            width_hint: positive(width),
            ..self
        }
    }

    #[must_use]
    pub fn with_height(self, height: i32) -> Self {
        Self {
            height_hint: positive(height),
            ..self
        }
    }

    /// Remove the container's insets from the hints, so the grid only sees the space
    /// available to its cells.
    #[must_use]
    pub fn without_insets(self, insets: crate::Insets) -> Self {
        Self {
            width_hint: self
                .width_hint
                .and_then(|it| positive(it - insets.horizontal())),
            height_hint: self
                .height_hint
                .and_then(|it| positive(it - insets.vertical())),
        }
    }

    /// Collapse non-positive hints to [`None`], so equal hints always hash equally.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            width_hint: self.width_hint.and_then(positive),
            height_hint: self.height_hint.and_then(positive),
        }
    }
}

fn positive(value: i32) -> Option<i32> { (value > 0).then_some(value) }
