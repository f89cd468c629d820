// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};

pub const UNKNOWN_GIT_HASH: &str = "unknown";

/// Populated once, the first time the CLI is built, and read-only after that.
///
/// Release builds pass the commit and build time in the environment of `cargo build`,
/// eg: `HC_GIT_HASH=$(git rev-parse --short HEAD) HC_COMPILED_AT=$(date +%s) cargo build`.
pub static BUILD_INFO: LazyLock<BuildInfo> = LazyLock::new(|| {
    BuildInfo::new(
        env!("CARGO_PKG_VERSION"),
        option_env!("HC_GIT_HASH"),
        option_env!("HC_COMPILED_AT"),
    )
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub compiled_at: DateTime<Utc>,
    /// `<version> | compiled <RFC3339 timestamp> | commit <hash>`.
    pub version_line: String,
}

impl BuildInfo {
    /// `maybe_compiled_at` is a unix timestamp in seconds. If it is missing or can't be
    /// parsed, the current time is used instead.
    #[must_use]
    pub fn new(
        version: &'static str,
        maybe_git_hash: Option<&'static str>,
        maybe_compiled_at: Option<&str>,
    ) -> Self {
        let git_hash = maybe_git_hash
            .filter(|it| !it.is_empty())
            .unwrap_or(UNKNOWN_GIT_HASH);

        let compiled_at = maybe_compiled_at
            .and_then(|it| it.trim().parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now);

        let version_line = format!(
            "{version} | compiled {compiled} | commit {git_hash}",
            compiled = compiled_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );

        Self {
            version,
            git_hash,
            compiled_at,
            version_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_version_line_from_build_env() {
        let it = BuildInfo::new("0.1.0", Some("abc1234"), Some("1700000000"));
        assert_eq!(
            it.version_line,
            "0.1.0 | compiled 2023-11-14T22:13:20Z | commit abc1234"
        );
        assert_eq!(it.compiled_at.timestamp(), 1_700_000_000);
    }

    #[test_case(None, None)]
    #[test_case(Some(""), Some("yesterday"))]
    fn test_version_line_fallbacks(
        maybe_git_hash: Option<&'static str>,
        maybe_compiled_at: Option<&str>,
    ) {
        let before = Utc::now().timestamp();
        let it = BuildInfo::new("0.1.0", maybe_git_hash, maybe_compiled_at);
        assert!(it.version_line.starts_with("0.1.0 | compiled "));
        assert!(it.version_line.ends_with(" | commit unknown"));
        assert!(it.compiled_at.timestamp() >= before);
    }

    #[test]
    fn test_build_info_uses_package_version() {
        assert_eq!(BUILD_INFO.version, env!("CARGO_PKG_VERSION"));
        assert!(BUILD_INFO.version_line.starts_with(env!("CARGO_PKG_VERSION")));
    }
}
