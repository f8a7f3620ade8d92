// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Low level building blocks used by the [`crate::grid`] layout engine: pixel geometry,
//! result & error types, an LRU cache, declarative macros, and tracing setup.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod dimens;
pub mod log;

// Re-export.
pub use common::*;
pub use decl_macros::*;
pub use dimens::*;
pub use log::*;
