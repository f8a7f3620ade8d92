// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The logical grid layout engine.
//!
//! Data flows bottom up through these modules:
//!
//! 1. [`grid_component`]: the host registers components, each with a measurement
//!    capability and optional [`LogicalGridData`], in a [`ComponentArena`].
//! 2. [`layout_info`]: a [`LogicalGridLayoutInfo`] is built from the visible
//!    components. It holds the negotiated column and row [`TrackSize`] tables.
//! 3. [`logical_grid_layout`]: [`LogicalGridLayout`] caches infos and turns them into
//!    the preferred size of the grid, or the bounds of every component.
//! 4. [`grid_container`]: [`GridContainer`] owns all of the above and exposes the
//!    invalidate / validate cycle.

// Attach sources.
pub mod alignment;
pub mod grid_component;
pub mod grid_container;
pub mod grid_data;
pub mod layout_config;
pub mod layout_error;
pub mod layout_info;
pub mod logical_grid_layout;
pub mod scene;

// Re-export.
pub use alignment::*;
pub use grid_component::*;
pub use grid_container::*;
pub use grid_data::*;
pub use layout_config::*;
pub use layout_error::*;
pub use layout_info::*;
pub use logical_grid_layout::*;
pub use scene::*;

/// Set this to `true` to log info builds and layout passes at `debug` level, and
/// per-component bounds at `trace` level.
pub const DEBUG_GRID_LAYOUT: bool = true;
