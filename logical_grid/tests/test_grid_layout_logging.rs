// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_logical_grid::{CommonResult, FixedPrefSize, GridContainer, LogicalGridData,
                        SizeHints, TracingConfig, TracingScope, init_tracing, size,
                        throws};
use serial_test::serial;
use tracing_core::LevelFilter;

#[test]
#[serial]
fn test_layout_passes_are_logged() -> CommonResult<()> {
    throws!({
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("grid_layout.log");
        let guard = init_tracing(
            TracingConfig::new_file(Some(log_file.to_string_lossy().to_string()))
                .with_scope(TracingScope::ThreadLocal)
                .with_level_filter(LevelFilter::TRACE),
        )?;

        let mut container = GridContainer::default();
        container.add_component(
            "logged",
            Some(LogicalGridData::at(0, 0)),
            FixedPrefSize(size!(width: 10, height: 10)),
        );
        container.pref_size(SizeHints::none())?;
        container.set_size(size!(width: 10, height: 10));
        container.validate_layout()?;
        drop(guard);

        let output = std::fs::read_to_string(&log_file).unwrap();
        for expected in [
            "LogicalGridLayoutInfo::try_new",
            "LogicalGridLayout::preferred_layout_size",
            "LogicalGridLayout::layout",
            "component bounds",
            "GridContainer::validate_layout",
        ] {
            assert!(output.contains(expected), "missing {expected:?} in:\n{output}");
        }
    });
}

#[test]
#[serial]
fn test_debug_level_skips_trace_events() -> CommonResult<()> {
    throws!({
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("grid_layout.log");
        let guard = init_tracing(
            TracingConfig::new_file(Some(log_file.to_string_lossy().to_string()))
                .with_scope(TracingScope::ThreadLocal)
                .with_level_filter(LevelFilter::DEBUG),
        )?;

        let mut container = GridContainer::default();
        container.add_component(
            "quiet",
            Some(LogicalGridData::at(0, 0)),
            FixedPrefSize(size!(width: 10, height: 10)),
        );
        container.set_size(size!(width: 10, height: 10));
        container.validate_layout()?;
        drop(guard);

        let output = std::fs::read_to_string(&log_file).unwrap();
        assert!(output.contains("LogicalGridLayout::layout"));
        assert!(!output.contains("component bounds"));
    });
}
