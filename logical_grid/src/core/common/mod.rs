// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result_and_error;
pub mod lru_cache;

// Re-export.
pub use common_result_and_error::*;
pub use lru_cache::*;
