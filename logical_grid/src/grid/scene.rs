// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A JSON description of a grid container and its components, used by the
//! `grid_layout` binary (and handy in tests).
//!
//! ```json
//! {
//!   "config": { "hgap": 10 },
//!   "insets": { "top": 4, "left": 4 },
//!   "size": { "width": 400, "height": 120 },
//!   "components": [
//!     { "name": "label", "grid_data": { "grid_x": 0 },
//!       "measure": { "kind": "fixed", "width": 80, "height": 20 } },
//!     { "name": "text", "grid_data": { "grid_x": 1, "weight_x": 1.0 },
//!       "margins": { "left": 2 },
//!       "measure": { "kind": "wrapping", "area": 6000, "min_width": 50, "line_height": 20 } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{CommonResult, ComponentId, FixedPrefSize, GridContainer, Insets, LayoutError,
            LogicalGridData, LogicalGridLayoutConfig, Rect, Size, SizeHints,
            WrappingPrefSize, size};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub config: LogicalGridLayoutConfig,
    #[serde(default)]
    pub insets: Insets,
    /// Container size. When missing the container is laid out at its preferred size.
    #[serde(default)]
    pub size: Option<Size>,
    pub components: Vec<SceneComponent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneComponent {
    pub name: String,
    #[serde(default)]
    pub grid_data: Option<LogicalGridData>,
    #[serde(default)]
    pub margins: Insets,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    pub measure: SceneMeasure,
}

fn visible_by_default() -> bool { true }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneMeasure {
    Fixed {
        width: i32,
        height: i32,
    },
    Wrapping {
        area: i32,
        min_width: i32,
        line_height: i32,
    },
}

/// What the `grid_layout` binary prints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub pref_size: Size,
    pub size: Size,
    pub components: Vec<SceneBounds>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub name: String,
    pub bounds: Rect,
}

impl Scene {
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidScene`] for malformed JSON, and
    /// [`LayoutError::InvalidConfig`] for an invalid `config`.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let it: Self = serde_json::from_str(json).map_err(|err| LayoutError::InvalidScene {
            reason: err.to_string(),
        })?;
        it.config.validate()?;
        if let Some(size) = it.size
            && (size.width < 0 || size.height < 0)
        {
            return Err(LayoutError::InvalidScene {
                reason: format!("container size must not be negative, got {size:?}"),
            }
            .into());
        }
        Ok(it)
    }

    /// Build the container described by this scene. The container's size is
    /// [`Scene::size`] if set.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] for an invalid `config`.
    pub fn try_into_container(&self) -> CommonResult<(GridContainer, Vec<ComponentId>)> {
        let mut container = GridContainer::new(LogicalGridLayoutConfig::default());
        container.set_config(self.config)?;
        container.set_insets(self.insets);
        if let Some(size) = self.size {
            container.set_size(size);
        }

        let mut ids = Vec::with_capacity(self.components.len());
        for component in &self.components {
            let id = match component.measure {
                SceneMeasure::Fixed { width, height } => container.add_component(
                    component.name.as_str(),
                    component.grid_data,
                    FixedPrefSize(size!(width: width, height: height)),
                ),
                SceneMeasure::Wrapping {
                    area,
                    min_width,
                    line_height,
                } => container.add_component(
                    component.name.as_str(),
                    component.grid_data,
                    WrappingPrefSize {
                        area,
                        min_width,
                        line_height,
                    },
                ),
            };
            container.set_margins(id, component.margins)?;
            container.set_visible(id, component.visible)?;
            ids.push(id);
        }

        Ok((container, ids))
    }

    /// Preferred size of the scene's container, insets included. With a `width` the
    /// height is the one the content needs at that width (wrapping content grows).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingGridData`] if a visible component has no grid data,
    /// or any error of [`Scene::try_into_container`].
    pub fn pref_size(&self, width: Option<i32>) -> CommonResult<Size> {
        let (mut container, _) = self.try_into_container()?;
        let hints = width.map_or_else(SizeHints::none, |it| SizeHints::none().with_width(it));
        container.pref_size(hints)
    }

    /// Lay out the scene. `width` and `height` override [`Scene::size`]. A dimension
    /// that is set nowhere takes the preferred size (for the height: the preferred
    /// height at the chosen width).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingGridData`] if a visible component has no grid data,
    /// or any error of [`Scene::try_into_container`].
    pub fn layout(&self, width: Option<i32>, height: Option<i32>) -> CommonResult<SceneLayout> {
        let (mut container, ids) = self.try_into_container()?;
        let pref_size = container.pref_size(SizeHints::none())?;

        let width = width
            .or(self.size.map(|it| it.width))
            .unwrap_or(pref_size.width);
        let height = match height.or(self.size.map(|it| it.height)) {
            Some(height) => height,
            None => container.pref_size(SizeHints::none().with_width(width))?.height,
        };
        let size = size!(width: width, height: height).clamp_non_negative();

        container.set_size(size);
        container.validate_layout()?;

        let components = self
            .components
            .iter()
            .zip(ids)
            .filter_map(|(component, id)| {
                container.bounds_of(id).map(|bounds| SceneBounds {
                    name: component.name.clone(),
                    bounds,
                })
            })
            .collect();

        Ok(SceneLayout {
            pref_size,
            size,
            components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, rect};

    const SCENE: &str = r#"{
        "config": { "hgap": 10, "vgap": 5 },
        "components": [
            { "name": "left", "grid_data": { "grid_x": 0 },
              "measure": { "kind": "fixed", "width": 100, "height": 30 } },
            { "name": "right", "grid_data": { "grid_x": 1 },
              "measure": { "kind": "fixed", "width": 100, "height": 30 } },
            { "name": "hidden", "visible": false,
              "measure": { "kind": "fixed", "width": 999, "height": 999 } }
        ]
    }"#;

    #[test]
    fn test_layout_at_preferred_size() {
        let scene = Scene::try_from_json_str(SCENE).unwrap();
        let it = scene.layout(None, None).unwrap();
        assert_eq2!(it.pref_size, size!(width: 210, height: 30));
        assert_eq2!(it.size, it.pref_size);
        assert_eq2!(
            it.components,
            vec![
                SceneBounds {
                    name: "left".into(),
                    bounds: rect!(x: 0, y: 0, width: 100, height: 30),
                },
                SceneBounds {
                    name: "right".into(),
                    bounds: rect!(x: 110, y: 0, width: 100, height: 30),
                },
            ]
        );
    }

    #[test]
    fn test_pref_size_at_width_wraps() {
        let scene = Scene::try_from_json_str(
            r#"{
                "config": { "hgap": 0, "vgap": 0 },
                "components": [
                    { "name": "text", "grid_data": { "weight_x": 1.0 },
                      "measure": { "kind": "wrapping", "area": 3000, "min_width": 10, "line_height": 20 } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq2!(scene.pref_size(None).unwrap(), size!(width: 150, height: 20));
        // Two lines at 100px.
        assert_eq2!(scene.pref_size(Some(100)).unwrap().height, 40);
    }

    #[test]
    fn test_malformed_scene() {
        let report = Scene::try_from_json_str(r#"{ "components": 3 }"#).unwrap_err();
        assert!(matches!(
            report.downcast_ref(),
            Some(LayoutError::InvalidScene { .. })
        ));
    }

    #[test]
    fn test_negative_size_is_invalid() {
        let report = Scene::try_from_json_str(
            r#"{ "size": { "width": -1, "height": 10 }, "components": [] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            report.downcast_ref(),
            Some(LayoutError::InvalidScene { .. })
        ));
    }

    #[test]
    fn test_invalid_config_in_scene() {
        let report = Scene::try_from_json_str(
            r#"{ "config": { "row_height": 0 }, "components": [] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            report.downcast_ref(),
            Some(LayoutError::InvalidConfig { .. })
        ));
    }
}
