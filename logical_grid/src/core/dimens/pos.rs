// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign}};

use serde::{Deserialize, Serialize};

/// Top left corner of a [`crate::Rect`], in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

/// ```
/// use r3bl_logical_grid::{Pos, pos};
/// assert_eq!(pos!(x: 3, y: 4), Pos::new(3, 4));
/// ```
#[macro_export]
macro_rules! pos {
    (x: $arg_x:expr, y: $arg_y:expr $(,)?) => {
        $crate::Pos::new($arg_x, $arg_y)
    };
}

impl Pos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }

    pub const ORIGIN: Self = Self::new(0, 0);
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Self::Output { Pos::new(self.x + rhs.x, self.y + rhs.y) }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, rhs: Pos) { *self = *self + rhs; }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[x: {}, y: {}]", self.x, self.y)
    }
}
