/*
 *   Copyright (c) 2022-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`crate::LayoutError`] and any other type of error that
///   implements [`miette::Diagnostic`].
///
/// # Example
///
/// ```
/// use r3bl_logical_grid::{CommonResult, LayoutError};
///
/// fn check_gap(gap: i32) -> CommonResult<i32> {
///     if gap < 0 {
///         return Err(LayoutError::InvalidConfig {
///             reason: format!("gap must not be negative, got {gap}"),
///         }
///         .into());
///     }
///     Ok(gap)
/// }
///
/// assert!(check_gap(5).is_ok());
/// assert!(check_gap(-1).is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;
