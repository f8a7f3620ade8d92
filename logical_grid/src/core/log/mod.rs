// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup. The layout engine itself only emits `tracing` events; whoever embeds
//! it decides where they go. [`init_tracing`] wires a [`TracingConfig`] into a
//! `tracing_subscriber` registry, either globally (apps, the `grid_layout` binary) or
//! thread locally (tests).

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
