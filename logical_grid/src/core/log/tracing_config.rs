/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

use tracing_core::LevelFilter;

/// Configure the tracing logging to suit your needs. You can send the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// You can use [`crate::init_tracing()`] to initialize the tracing system with this
/// configuration.
///
/// Fields:
/// - `scope`: [`TracingScope`] decides whether the subscriber is global or thread local.
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The most verbose level that is recorded.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    /// Once set, can't be unset or changed. Great for apps.
    Global,
    /// Scoped to the current thread until the returned guard is dropped. Great for
    /// tests.
    ThreadLocal,
}

/// - `String` is the log file path. Eg: `/tmp/grid_layout.log` or `grid_layout.log`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

pub const DEFAULT_LOG_FILE_NAME: &str = "grid_layout_log.txt";

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_scope(self, scope: TracingScope) -> Self { Self { scope, ..self } }

    #[must_use]
    pub fn with_writer_config(self, writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            ..self
        }
    }

    #[must_use]
    pub fn with_level_filter(self, level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..self
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_new_file_uses_default_name() {
        let it = TracingConfig::new_file(None);
        assert_eq2!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
        assert_eq2!(it.scope, TracingScope::Global);
    }

    #[test]
    fn test_builder_style_overrides() {
        let it = TracingConfig::new_display(DisplayPreference::Stderr)
            .with_scope(TracingScope::ThreadLocal)
            .with_level_filter(LevelFilter::TRACE)
            .with_writer_config(WriterConfig::None);
        assert_eq2!(it.scope, TracingScope::ThreadLocal);
        assert_eq2!(it.get_writer_config(), WriterConfig::None);
        assert_eq2!(it.get_level_filter(), LevelFilter::TRACE);
    }
}
