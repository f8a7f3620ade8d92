// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{CommonResult, LayoutError};

/// Gaps between cells and the nominal (logical) cell size, in pixels.
///
/// Every field has a default, so a partial JSON object only overrides what it names:
///
/// ```
/// use r3bl_logical_grid::LogicalGridLayoutConfig;
///
/// let config = LogicalGridLayoutConfig::try_from_json_str(r#"{ "hgap": 4 }"#).unwrap();
/// assert_eq!(config.hgap, 4);
/// assert_eq!(config.vgap, LogicalGridLayoutConfig::default().vgap);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalGridLayoutConfig {
    pub hgap: i32,
    pub vgap: i32,
    /// Width of one logical column, used when a component does not use its UI width.
    pub column_width: i32,
    /// Height of one logical row, used when a component does not use its UI height.
    pub row_height: i32,
    /// When `> 0` the grid is never laid out narrower than this, it overflows instead.
    pub min_width: i32,
}

impl Default for LogicalGridLayoutConfig {
    fn default() -> Self {
        Self {
            hgap: 12,
            vgap: 10,
            column_width: 420,
            row_height: 30,
            min_width: 0,
        }
    }
}

impl LogicalGridLayoutConfig {
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if the JSON is malformed or the values
    /// don't pass [`Self::validate`].
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let it: Self =
            serde_json::from_str(json).map_err(|err| LayoutError::InvalidConfig {
                reason: err.to_string(),
            })?;
        it.validate()?;
        Ok(it)
    }

    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] for negative gaps or `min_width`, and for
    /// a non positive `column_width` or `row_height`.
    pub fn validate(&self) -> CommonResult<()> {
        let checks = [
            (self.hgap < 0, "hgap", self.hgap),
            (self.vgap < 0, "vgap", self.vgap),
            (self.min_width < 0, "min_width", self.min_width),
            (self.column_width <= 0, "column_width", self.column_width),
            (self.row_height <= 0, "row_height", self.row_height),
        ];
        for (is_invalid, field, value) in checks {
            if is_invalid {
                return Err(LayoutError::InvalidConfig {
                    reason: format!("{field} is out of range: {value}"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Pixel width of `span` logical columns, including the gaps between them.
    #[must_use]
    pub fn logical_width(&self, span: i32) -> i32 {
        self.column_width * span + self.hgap * (span - 1).max(0)
    }

    /// Pixel height of `span` logical rows, including the gaps between them.
    #[must_use]
    pub fn logical_height(&self, span: i32) -> i32 {
        self.row_height * span + self.vgap * (span - 1).max(0)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_valid() {
        assert!(LogicalGridLayoutConfig::default().validate().is_ok());
    }

    #[test_case(r#"{ "hgap": -1 }"#, "hgap")]
    #[test_case(r#"{ "vgap": -2 }"#, "vgap")]
    #[test_case(r#"{ "min_width": -10 }"#, "min_width")]
    #[test_case(r#"{ "column_width": 0 }"#, "column_width")]
    #[test_case(r#"{ "row_height": -30 }"#, "row_height")]
    fn test_invalid_values_are_rejected(json: &str, field: &str) {
        let report = LogicalGridLayoutConfig::try_from_json_str(json).unwrap_err();
        let Some(LayoutError::InvalidConfig { reason }) = report.downcast_ref() else {
            panic!("unexpected error: {report:?}");
        };
        assert!(reason.starts_with(field), "{reason}");
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        let report = LogicalGridLayoutConfig::try_from_json_str("{ hgap: }").unwrap_err();
        assert!(matches!(
            report.downcast_ref(),
            Some(LayoutError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_logical_sizes() {
        let config = LogicalGridLayoutConfig::default();
        assert_eq2!(config.logical_width(1), 420);
        assert_eq2!(config.logical_width(2), 420 * 2 + 12);
        assert_eq2!(config.logical_height(3), 30 * 3 + 10 * 2);
    }
}
