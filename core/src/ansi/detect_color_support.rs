// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// Global state used to:
/// 1. Override the color support.
/// 2. Memoize the result of [`examine_env_vars_to_determine_color_support`].
///
/// Override takes precedence over the cache, and the cache over a fresh detection.
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering, Stream,
                examine_env_vars_to_determine_color_support};

    static COLOR_SUPPORT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// This is the main function that is used to determine whether color is supported.
    /// And if so what type of color is supported.
    ///
    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise the cached detection result is returned, running
    ///   [`examine_env_vars_to_determine_color_support`] once to fill the cache.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        set_cached(detected);
        // % is Display, ? is Debug.
        tracing::debug!(message = "Detected color support", color_support = ?detected);
        detected
    }

    /// Override the color support. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// Any test that calls this function must be annotated w/ `#[serial]` from the
    /// [serial_test](https://crates.io/crates/serial_test) crate, since tests run in
    /// parallel and this is process wide state.
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_GLOBAL.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_GLOBAL.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no override value has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_GLOBAL.load(Ordering::Acquire))
    }

    /// Forces re-detection on the next call to [`detect()`].
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if [`detect()`] hasn't run since the cache was last cleared.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }
}

/// Determine how much color `stream` can show, from the environment:
/// 1. `NO_COLOR`, `TERM=dumb`, or a `stream` that isn't a terminal (unless
///    `IGNORE_IS_TERMINAL` is set) means [`ColorSupport::NoColor`].
/// 2. `COLORTERM=truecolor|24bit`, a terminal that is known to render 24 bit color, or
///    Windows means [`ColorSupport::Truecolor`].
/// 3. Any other `TERM`, `COLORTERM`, `CLICOLOR`, or a CI run means
///    [`ColorSupport::Ansi256`].
///
/// Call [`global_color_support::detect()`] instead, which caches this.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    let term = helpers::env_value("TERM");
    let colorterm = helpers::env_value("COLORTERM");

    if helpers::env_flag("NO_COLOR")
        || term.as_deref() == Some("dumb")
        || !(helpers::is_a_tty(stream) || helpers::env_flag("IGNORE_IS_TERMINAL"))
    {
        return ColorSupport::NoColor;
    }

    let is_truecolor_terminal = helpers::env_value("TERM_PROGRAM")
        .is_some_and(|it| helpers::TRUECOLOR_TERM_PROGRAMS.contains(&it.as_str()));
    if matches!(colorterm.as_deref(), Some("truecolor" | "24bit"))
        || is_truecolor_terminal
        || cfg!(windows)
    {
        return ColorSupport::Truecolor;
    }

    if term.is_some()
        || colorterm.is_some()
        || helpers::env_flag("CLICOLOR")
        || is_ci::uncached()
    {
        return ColorSupport::Ansi256;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The result of the color support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    Grayscale,
    NoColor,
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi256),
                2 => Ok(super::ColorSupport::Truecolor),
                3 => Ok(super::ColorSupport::NoColor),
                4 => Ok(super::ColorSupport::Grayscale),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi256   => 1,
                super::ColorSupport::Truecolor => 2,
                super::ColorSupport::NoColor   => 3,
                super::ColorSupport::Grayscale => 4,
            }
        }
    }
}

mod helpers {
    use super::{Stream, env};

    /// `TERM_PROGRAM` values for terminals that render 24 bit color but don't always
    /// set `COLORTERM`.
    pub const TRUECOLOR_TERM_PROGRAMS: &[&str] = &["iTerm.app", "WezTerm", "vscode"];

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    /// Unset and empty are the same thing.
    #[must_use]
    pub fn env_value(key: &str) -> Option<String> {
        env::var(key).ok().filter(|it| !it.is_empty())
    }

    /// Set to anything other than `0`.
    #[must_use]
    pub fn env_flag(key: &str) -> bool { env_value(key).is_some_and(|it| it != "0") }
}
