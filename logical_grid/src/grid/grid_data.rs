// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::Alignment;

/// Where a component lives on the logical grid, and how it negotiates space.
///
/// ```text
///            grid_x = 1, grid_w = 2
///                 ◄──────────────►
///       ┌───────┬────────┬───────┐
/// row 0 │       │ ██████████████ │ ◄ grid_y = 0, grid_h = 1
///       ├───────┼────────┼───────┤
/// row 1 │       │        │       │
///       └───────┴────────┴───────┘
/// ```
///
/// - `weight_x` / `weight_y` are the share of surplus (or deficit) space that the
///   columns / rows touched by this component receive. `0` makes them fixed.
/// - `width_hint` / `height_hint` (`<= 0` means unset) override the measured size.
/// - `use_ui_width` / `use_ui_height` take the preferred size from the measurement
///   capability. When `false` the logical size derived from
///   [`crate::LogicalGridLayoutConfig::column_width`] and
///   [`crate::LogicalGridLayoutConfig::row_height`] is used.
/// - `max_width` / `max_height` (`<= 0` means unset) cap the extent of the cell-block.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalGridData {
    pub grid_x: i32,
    pub grid_y: i32,
    pub grid_w: i32,
    pub grid_h: i32,
    pub weight_x: f64,
    pub weight_y: f64,
    pub fill_horizontal: bool,
    pub fill_vertical: bool,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
    pub width_hint: i32,
    pub height_hint: i32,
    pub use_ui_width: bool,
    pub use_ui_height: bool,
    pub max_width: i32,
    pub max_height: i32,
}

impl Default for LogicalGridData {
    fn default() -> Self {
        Self {
            grid_x: 0,
            grid_y: 0,
            grid_w: 1,
            grid_h: 1,
            weight_x: 0.0,
            weight_y: 0.0,
            fill_horizontal: true,
            fill_vertical: true,
            horizontal_alignment: Alignment::Leading,
            vertical_alignment: Alignment::Leading,
            width_hint: 0,
            height_hint: 0,
            use_ui_width: true,
            use_ui_height: true,
            max_width: 0,
            max_height: 0,
        }
    }
}

mod constructor {
    use super::{Alignment, LogicalGridData};

    impl LogicalGridData {
        /// A single cell at column `grid_x`, row `grid_y`, everything else default.
        #[must_use]
        pub fn at(grid_x: i32, grid_y: i32) -> Self {
            Self {
                grid_x,
                grid_y,
                ..Default::default()
            }
        }

        #[must_use]
        pub fn with_span(self, grid_w: i32, grid_h: i32) -> Self {
            Self {
                grid_w,
                grid_h,
                ..self
            }
        }

        #[must_use]
        pub fn with_weights(self, weight_x: f64, weight_y: f64) -> Self {
            Self {
                weight_x,
                weight_y,
                ..self
            }
        }

        #[must_use]
        pub fn with_fill(self, fill_horizontal: bool, fill_vertical: bool) -> Self {
            Self {
                fill_horizontal,
                fill_vertical,
                ..self
            }
        }

        #[must_use]
        pub fn with_alignment(
            self,
            horizontal_alignment: Alignment,
            vertical_alignment: Alignment,
        ) -> Self {
            Self {
                horizontal_alignment,
                vertical_alignment,
                ..self
            }
        }

        #[must_use]
        pub fn with_hints(self, width_hint: i32, height_hint: i32) -> Self {
            Self {
                width_hint,
                height_hint,
                ..self
            }
        }

        #[must_use]
        pub fn with_use_ui(self, use_ui_width: bool, use_ui_height: bool) -> Self {
            Self {
                use_ui_width,
                use_ui_height,
                ..self
            }
        }

        #[must_use]
        pub fn with_max(self, max_width: i32, max_height: i32) -> Self {
            Self {
                max_width,
                max_height,
                ..self
            }
        }
    }
}

mod api {
    use super::LogicalGridData;

    impl LogicalGridData {
        /// Negative origins become `0`, spans smaller than one cell become `1`.
        #[must_use]
        pub fn sanitized(&self) -> Self {
            Self {
                grid_x: self.grid_x.max(0),
                grid_y: self.grid_y.max(0),
                grid_w: self.grid_w.max(1),
                grid_h: self.grid_h.max(1),
                ..*self
            }
        }

        #[must_use]
        pub fn width_hint(&self) -> Option<i32> {
            (self.width_hint > 0).then_some(self.width_hint)
        }

        #[must_use]
        pub fn height_hint(&self) -> Option<i32> {
            (self.height_hint > 0).then_some(self.height_hint)
        }

        #[must_use]
        pub fn max_width(&self) -> Option<i32> {
            (self.max_width > 0).then_some(self.max_width)
        }

        #[must_use]
        pub fn max_height(&self) -> Option<i32> {
            (self.max_height > 0).then_some(self.max_height)
        }

        /// Both axes fill, so the component always gets its whole cell-block.
        #[must_use]
        pub fn fills_both(&self) -> bool { self.fill_horizontal && self.fill_vertical }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_sanitized() {
        let it = LogicalGridData::at(-3, 2).with_span(0, -1).sanitized();
        assert_eq2!((it.grid_x, it.grid_y, it.grid_w, it.grid_h), (0, 2, 1, 1));
    }

    #[test]
    fn test_non_positive_hints_are_unset() {
        let it = LogicalGridData::default().with_hints(0, -5).with_max(0, 12);
        assert_eq2!(it.width_hint(), None);
        assert_eq2!(it.height_hint(), None);
        assert_eq2!(it.max_width(), None);
        assert_eq2!(it.max_height(), Some(12));
    }

    #[test]
    fn test_partial_json() {
        let it: LogicalGridData = serde_json::from_str(
            r#"{ "grid_x": 2, "grid_w": 3, "weight_x": 1.0, "horizontal_alignment": "center" }"#,
        )
        .unwrap();
        assert_eq2!(
            it,
            LogicalGridData::at(2, 0)
                .with_span(3, 1)
                .with_weights(1.0, 0.0)
                .with_alignment(Alignment::Center, Alignment::Leading)
        );
        assert!(it.fills_both());
        assert!(it.use_ui_width && it.use_ui_height);
    }
}
