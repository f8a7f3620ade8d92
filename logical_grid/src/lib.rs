// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_logical_grid
//!
//! A constraint based 2D grid layout engine. You describe *where* components live on a
//! virtual grid (origin cell, span, weights, fill and alignment hints) and the engine
//! figures out *how big* every column and row should be, and the pixel bounds of every
//! component inside the container.
//!
//! ```text
//!         col 0         col 1             col 2
//!       ┌────────┐hgap┌─────────────┐hgap┌────────┐
//! row 0 │ label  │    │ text field (w=2, fill)    │
//!       └────────┘    └─────────────┘    └────────┘
//!          vgap
//!       ┌────────┐    ┌─────────────┐    ┌────────┐
//! row 1 │ label  │    │ combo       │    │ button │
//!       └────────┘    └─────────────┘    └────────┘
//! ```
//!
//! # How it works
//!
//! 1. Every visible component is measured once through the [`MeasurePrefSize`]
//!    capability that the host supplies (there is no DOM here, the host knows how big
//!    its content wants to be).
//! 2. Column widths and row heights are negotiated into [`TrackSize`] tables holding
//!    the min, preferred, and max size of each track ([`SizeFlag`]).
//! 3. The available container size is distributed over the tracks using the weights,
//!    producing a table of cell rectangles.
//! 4. Each component gets the union of the cells it spans, minus its margins, then is
//!    shrunk and aligned inside that block unless it fills it.
//!
//! The computed [`LogicalGridLayoutInfo`] is cached, and the cache is keyed on the
//! size hints, the set of visible components, and a revision counter that every
//! mutation of the [`ComponentArena`] bumps. [`GridContainer`] wraps all of this up
//! with an invalidate / validate cycle.
//!
//! # Example
//!
//! ```
//! use r3bl_logical_grid::{FixedPrefSize, GridContainer, LogicalGridData,
//!                         LogicalGridLayoutConfig, SizeHints, size};
//!
//! let config = LogicalGridLayoutConfig { hgap: 10, ..Default::default() };
//! let mut container = GridContainer::new(config);
//! container.add_component(
//!     "left",
//!     Some(LogicalGridData::at(0, 0)),
//!     FixedPrefSize(size!(width: 100, height: 30)),
//! );
//! container.add_component(
//!     "right",
//!     Some(LogicalGridData::at(1, 0)),
//!     FixedPrefSize(size!(width: 100, height: 30)),
//! );
//!
//! let pref = container.pref_size(SizeHints::none()).unwrap();
//! assert_eq!(pref, size!(width: 210, height: 30));
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod grid;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use crate::core::*;
pub use crate::grid::*;
