//! Command-line arguments of the generated test driver.

use clap::Parser;

use crate::config::{ColorMode, OutputFormat, RunConfig};

#[derive(Debug, Parser)]
#[command(about = "Runs every declared description and reports each test.")]
pub struct DescribeArgs {
    /// Output format of the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Behave)]
    pub format: OutputFormat,

    /// When to color the `pretty` format.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl DescribeArgs {
    pub fn to_config(&self) -> RunConfig {
        RunConfig::new(self.format, self.color)
    }
}
