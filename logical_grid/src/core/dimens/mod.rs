// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pixel geometry. Everything here is in integer pixels (`i32`), relative to the
//! content box of the grid container. Widths and heights produced by the layout engine
//! are never negative.

// Attach sources.
pub mod insets;
pub mod pos;
pub mod rect;
pub mod size;
pub mod size_hints;

// Re-export.
pub use insets::*;
pub use pos::*;
pub use rect::*;
pub use size::*;
pub use size_hints::*;
