// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;

use crate::{DisplayPreference, TracingConfig, WriterConfig};

/// Used by `--log-file` when no path is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "hc_log.txt";

/// Instead of having lots of arguments, [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`] receive anything that implements
/// [`Into<TracingConfig>`]. These conversions can be composed w/ `+`:
///
/// ```no_run
/// use hc_core::{
///     DisplayPreference, TracingConfig, WriterConfig, try_initialize_logging_global,
/// };
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let to_stderr: TracingConfig = DisplayPreference::Stderr.into();
/// let to_file: TracingConfig = WriterConfig::File("hc.log".to_string()).into();
///
/// try_initialize_logging_global(TracingConfig::from(level_filter) + to_stderr + to_file)
///     .ok();
/// ```
pub mod tracing_config_options {
    use super::{Add, DisplayPreference, TracingConfig, WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::None,
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::None,
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::OFF,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::OFF,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances together. The more verbose level wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances together. The `rhs` has higher specificity,
    /// so it clobbers whatever the `self` has in the same slot:
    /// - `Display(a) + Display(b) = Display(b)`.
    /// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
    /// - `DisplayAndFile(a, f) + File(g) = DisplayAndFile(a, g)`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision (rhs has higher specificity).
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                    DisplayAndFile(dp_rhs, f_rhs)
                }
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            }
        }
    }

    #[cfg(test)]
    mod tests_add_writer_configs {
        use pretty_assertions::assert_eq;
        use test_case::test_case;

        use super::*;

        fn file(name: &str) -> WriterConfig { WriterConfig::File(name.to_string()) }

        fn stderr() -> WriterConfig { WriterConfig::Display(DisplayPreference::Stderr) }

        fn stdout() -> WriterConfig { WriterConfig::Display(DisplayPreference::Stdout) }

        fn both(dp: DisplayPreference, name: &str) -> WriterConfig {
            WriterConfig::DisplayAndFile(dp, name.to_string())
        }

        #[test_case(WriterConfig::None, stderr(), stderr())]
        #[test_case(file("a"), WriterConfig::None, file("a"))]
        #[test_case(stderr(), file("a"), both(DisplayPreference::Stderr, "a"))]
        #[test_case(file("a"), stdout(), both(DisplayPreference::Stdout, "a"))]
        #[test_case(stdout(), stderr(), stderr())]
        #[test_case(file("a"), file("b"), file("b"))]
        #[test_case(stdout(), both(DisplayPreference::Stderr, "b"), both(DisplayPreference::Stderr, "b"))]
        #[test_case(both(DisplayPreference::Stdout, "a"), stderr(), both(DisplayPreference::Stderr, "a"))]
        #[test_case(both(DisplayPreference::Stdout, "a"), file("b"), both(DisplayPreference::Stdout, "b"))]
        fn test_add_writer_configs(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
            assert_eq!(lhs + rhs, expected);
        }

        #[test]
        fn test_add_tracing_configs_keeps_most_verbose_level() {
            let config = TracingConfig::from(tracing_core::LevelFilter::DEBUG)
                + DisplayPreference::Stderr.into()
                + WriterConfig::File("hc.log".to_string()).into();
            assert_eq!(
                config,
                TracingConfig {
                    level_filter: tracing_core::LevelFilter::DEBUG,
                    writer_config: both(DisplayPreference::Stderr, "hc.log"),
                }
            );
        }
    }
}

/// Logging is **DISABLED** by **default**. Unless this is called w/ a level other than
/// [`tracing_core::LevelFilter::OFF`], the [`tracing::info!`], [`tracing::debug!`],
/// etc. macros are no-ops.
///
/// This sets the global default subscriber, so it can only be called once per process.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF)
        || matches!(it.get_writer_config(), WriterConfig::None)
    {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which is reset when the returned guard is dropped. This is
/// great for tests. Returns `None` when logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF)
        || matches!(it.get_writer_config(), WriterConfig::None)
    {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let guard = try_initialize_logging_thread_local(tracing_core::LevelFilter::OFF)
            .unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_no_writer_is_disabled() {
        let guard = try_initialize_logging_thread_local(tracing_core::LevelFilter::DEBUG)
            .unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_display_is_enabled() {
        let guard = try_initialize_logging_thread_local(
            TracingConfig::from(tracing_core::LevelFilter::DEBUG)
                + DisplayPreference::Stderr.into(),
        )
        .unwrap();
        assert!(guard.is_some());
    }
}
