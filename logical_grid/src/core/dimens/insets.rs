// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Space around a box: the container's padding + border, or a component's margins.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

/// ```
/// use r3bl_logical_grid::{Insets, insets};
///
/// assert_eq!(insets!(all: 2), Insets::new(2, 2, 2, 2));
/// assert_eq!(insets!(top: 1, right: 2, bottom: 3, left: 4).horizontal(), 6);
/// ```
#[macro_export]
macro_rules! insets {
    (all: $arg_all:expr $(,)?) => {
        $crate::Insets::uniform($arg_all)
    };
    (
        top:    $arg_top:expr,
        right:  $arg_right:expr,
        bottom: $arg_bottom:expr,
        left:   $arg_left:expr $(,)?
    ) => {
        $crate::Insets::new($arg_top, $arg_right, $arg_bottom, $arg_left)
    };
}

impl Insets {
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: i32) -> Self { Self::new(value, value, value, value) }

    #[must_use]
    pub fn horizontal(&self) -> i32 { self.left + self.right }

    #[must_use]
    pub fn vertical(&self) -> i32 { self.top + self.bottom }
}

impl Debug for Insets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[t: {}, r: {}, b: {}, l: {}]",
            self.top, self.right, self.bottom, self.left
        )
    }
}
