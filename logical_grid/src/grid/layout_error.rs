// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ComponentId;

/// Errors produced by the layout engine. They are meant to be propagated with `?` as a
/// [`crate::CommonResult`], which wraps them in a [`miette::Report`].
///
/// A degenerate (zero sized) container is never an error, it just produces an empty
/// layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum LayoutError {
    /// A visible component takes part in the layout but has no [`crate::LogicalGridData`].
    #[error("Component '{component}' has no logical grid data")]
    #[diagnostic(
        code(r3bl_logical_grid::missing_grid_data),
        help("Every visible component needs a grid cell. Set one, or hide the component.")
    )]
    MissingGridData { component: String },

    #[error("No component with id {component} in this container")]
    #[diagnostic(code(r3bl_logical_grid::unknown_component))]
    UnknownComponent { component: ComponentId },

    #[error("Invalid layout config: {reason}")]
    #[diagnostic(code(r3bl_logical_grid::invalid_config))]
    InvalidConfig { reason: String },

    #[error("Invalid scene: {reason}")]
    #[diagnostic(
        code(r3bl_logical_grid::invalid_scene),
        help("See `grid_layout --help` for the format of the scene file.")
    )]
    InvalidScene { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommonResult, assert_eq2};

    fn fails() -> CommonResult<()> {
        Err(LayoutError::MissingGridData {
            component: "name_field".into(),
        }
        .into())
    }

    #[test]
    fn test_error_is_recoverable_from_report() {
        let report = fails().unwrap_err();
        assert_eq2!(
            report.downcast_ref::<LayoutError>(),
            Some(&LayoutError::MissingGridData {
                component: "name_field".into()
            })
        );
        assert_eq2!(
            report.to_string(),
            "Component 'name_field' has no logical grid data"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;
        let it = LayoutError::UnknownComponent {
            component: ComponentId(7),
        };
        assert_eq2!(
            it.code().map(|code| code.to_string()),
            Some("r3bl_logical_grid::unknown_component".to_string())
        );
        assert_eq2!(it.to_string(), "No component with id #7 in this container");
    }
}
