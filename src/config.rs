//! Run configuration for the command-line driver.

use clap::ValueEnum;
use serde::Serialize;
use termcolor::ColorChoice;

/// Which printer renders the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum OutputFormat {
    /// Reference format: description names and `- test` lines
    #[default]
    Behave,
    /// Colored output with failure details and a summary
    Pretty,
    /// A single JSON document
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Configuration for test execution and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    pub format: OutputFormat,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl RunConfig {
    pub fn new(format: OutputFormat, color: ColorMode) -> Self {
        let use_colors = match color {
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        Self { format, use_colors }
    }

    pub fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_color_modes_override_terminal_detection() {
        let always = RunConfig::new(OutputFormat::Pretty, ColorMode::Always);
        assert!(always.use_colors);
        assert_eq!(always.color_choice(), ColorChoice::Always);

        let never = RunConfig::new(OutputFormat::Json, ColorMode::Never);
        assert!(!never.use_colors);
        assert_eq!(never.format, OutputFormat::Json);
    }

    #[test]
    fn default_format_is_the_reference_format() {
        assert_eq!(RunConfig::default().format, OutputFormat::Behave);
    }
}
