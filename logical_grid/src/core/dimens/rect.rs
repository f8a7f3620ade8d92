// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [Rect] is an origin (`x`, `y`) plus a [Size], in pixels, relative to the content box
//! of the grid container.
//!
//! ```text
//!     x ──────────────► right()
//!   y ┌───────────────┐
//!   │ │               │
//!   │ │  width×height │
//!   ▼ │               │
//! bottom()────────────┘
//! ```

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::{Insets, Pos, Size};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// ```
/// use r3bl_logical_grid::{Rect, rect};
///
/// assert_eq!(rect!(x: 1, y: 2, width: 3, height: 4), Rect::new(1, 2, 3, 4));
/// ```
#[macro_export]
macro_rules! rect {
    (
        x:      $arg_x:expr,
        y:      $arg_y:expr,
        width:  $arg_width:expr,
        height: $arg_height:expr $(,)?
    ) => {
        $crate::Rect::new($arg_x, $arg_y, $arg_width, $arg_height)
    };
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn pos(&self) -> Pos { Pos::new(self.x, self.y) }

    #[must_use]
    pub fn size(&self) -> Size { Size::new(self.width, self.height) }

    #[must_use]
    pub fn right(&self) -> i32 { self.x + self.width }

    #[must_use]
    pub fn bottom(&self) -> i32 { self.y + self.height }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Moves the origin in by `left` / `top` and shrinks the extent by the horizontal /
    /// vertical insets. Width and height stop at zero.
    #[must_use]
    pub fn shrink_by(&self, insets: Insets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
        .clamp_non_negative()
    }

    #[must_use]
    pub fn clamp_non_negative(&self) -> Rect {
        Rect::new(self.x, self.y, self.width.max(0), self.height.max(0))
    }
}

impl Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x: {}, y: {}, w: {}, h: {}]",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, insets};

    #[test]
    fn test_union_of_origin_and_span_end_cells() {
        let origin_cell = rect!(x: 0, y: 0, width: 50, height: 30);
        let span_end_cell = rect!(x: 60, y: 40, width: 50, height: 30);
        assert_eq2!(
            origin_cell.union(span_end_cell),
            rect!(x: 0, y: 0, width: 110, height: 70)
        );
    }

    #[test]
    fn test_union_with_self() {
        let it = rect!(x: 3, y: 4, width: 5, height: 6);
        assert_eq2!(it.union(it), it);
    }

    #[test]
    fn test_shrink_by_margins() {
        let it = rect!(x: 10, y: 10, width: 100, height: 40);
        assert_eq2!(
            it.shrink_by(insets!(top: 1, right: 2, bottom: 3, left: 4)),
            rect!(x: 14, y: 11, width: 94, height: 36)
        );
    }

    #[test]
    fn test_shrink_by_clamps_at_zero() {
        let it = rect!(x: 0, y: 0, width: 4, height: 4);
        let shrunk = it.shrink_by(insets!(all: 5));
        assert_eq2!(shrunk.size(), Size::ZERO);
        assert_eq2!(shrunk.pos(), crate::pos!(x: 5, y: 5));
    }
}
