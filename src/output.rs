//! Global output configuration.
//!
//! - Chat entries go to stdout
//! - Status messages and the spinner go to stderr
//! - Quiet mode suppresses status output, never chat entries or errors
//! - Colors can be disabled via flag or the `NO_COLOR` environment variable

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress status output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the configuration from CLI flags, honoring `NO_COLOR`.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || no_color_env(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_flags(false, false)
    }
}

// https://no-color.org/
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Sets the global output configuration. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_no_color_flag() {
        let config = OutputConfig::from_flags(true, true);
        assert!(config.quiet);
        assert!(config.no_color);
    }

    #[test]
    #[serial]
    fn test_no_color_env() {
        let original = std::env::var_os("NO_COLOR");
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var("NO_COLOR", "1") };
        assert!(OutputConfig::from_flags(false, false).no_color);

        unsafe { std::env::set_var("NO_COLOR", "") };
        assert!(!OutputConfig::from_flags(false, false).no_color);

        match original {
            Some(value) => unsafe { std::env::set_var("NO_COLOR", value) },
            None => unsafe { std::env::remove_var("NO_COLOR") },
        }
    }
}
