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

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use r3bl_logical_grid::{CommonResult, GridContainer, LogicalGridLayoutConfig,
///                         size, throws};
///
/// fn resize(container: &mut GridContainer) -> CommonResult<()> {
///     throws!({
///         container.set_size(size!(width: 500, height: 400));
///         container.validate_layout()?;
///     });
/// }
///
/// let mut container = GridContainer::new(LogicalGridLayoutConfig::default());
/// assert!(resize(&mut container).is_ok());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// [`pretty_assertions::assert_eq`] with a shorter name. Diffs of the (often large)
/// `Debug` output of layout infos and bounds tables are much easier to read this way.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
