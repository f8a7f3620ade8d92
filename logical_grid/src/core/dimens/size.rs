// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [Size] holds a `width` and `height` in pixels.
//!
//! ```
//! use r3bl_logical_grid::{Size, insets, size};
//!
//! let content = size!(width: 100, height: 30);
//! let with_insets = content.add_insets(insets!(all: 5));
//! assert_eq!(with_insets, size!(width: 110, height: 40));
//! assert_eq!(with_insets.sub_insets(insets!(all: 5)), content);
//!
//! // Negative values never escape a subtraction.
//! assert_eq!(content.sub_insets(insets!(all: 60)), Size::default());
//! ```

use std::{fmt::Debug,
          ops::{Add, AddAssign, Sub}};

use serde::{Deserialize, Serialize};

use crate::Insets;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Create a [Size] with named args, so it is impossible to mix up width & height.
#[macro_export]
macro_rules! size {
    (width: $arg_width:expr, height: $arg_height:expr $(,)?) => {
        $crate::Size {
            width: $arg_width,
            height: $arg_height,
        }
    };
}

mod constructor {
    use super::Size;

    impl Size {
        #[must_use]
        pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }

        pub const ZERO: Self = Self::new(0, 0);
    }

    impl From<(i32, i32)> for Size {
        fn from((width, height): (i32, i32)) -> Self { Self::new(width, height) }
    }
}

mod api {
    use super::{Insets, Size};

    impl Size {
        #[must_use]
        pub fn is_empty(&self) -> bool { self.width <= 0 || self.height <= 0 }

        #[must_use]
        pub fn add_insets(&self, insets: Insets) -> Self {
            Self::new(
                self.width + insets.horizontal(),
                self.height + insets.vertical(),
            )
        }

        /// Shrinks by the insets, clamping each axis at zero.
        #[must_use]
        pub fn sub_insets(&self, insets: Insets) -> Self {
            Self::new(
                self.width - insets.horizontal(),
                self.height - insets.vertical(),
            )
            .clamp_non_negative()
        }

        #[must_use]
        pub fn clamp_non_negative(&self) -> Self {
            Self::new(self.width.max(0), self.height.max(0))
        }

        /// Component-wise max.
        #[must_use]
        pub fn union(&self, other: Self) -> Self {
            Self::new(self.width.max(other.width), self.height.max(other.height))
        }
    }
}

mod ops {
    use super::{Add, AddAssign, Size, Sub};

    impl Add for Size {
        type Output = Size;

        fn add(self, rhs: Size) -> Self::Output {
            Size::new(self.width + rhs.width, self.height + rhs.height)
        }
    }

    impl AddAssign for Size {
        fn add_assign(&mut self, rhs: Size) { *self = *self + rhs; }
    }

    /// Clamps at zero, a [Size] is never negative.
    impl Sub for Size {
        type Output = Size;

        fn sub(self, rhs: Size) -> Self::Output {
            Size::new(self.width - rhs.width, self.height - rhs.height)
                .clamp_non_negative()
        }
    }
}

impl Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[w: {}, h: {}]", self.width, self.height)
    }
}
