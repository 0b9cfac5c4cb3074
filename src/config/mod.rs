#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
use crate::core::Limits;
use crate::utils::error::Result;
use crate::utils::validation;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRECISION: usize = 2;
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "road-neighborhoods")]
#[command(about = "Finds the smallest city neighborhood along a road")]
pub struct CliConfig {
    /// Road description file; prompted for when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Query to run: 1 = smallest neighborhood, 2 = city with the smallest neighborhood
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory relative input paths are resolved against
    #[arg(long)]
    pub base_dir: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for the neighborhood width
    #[arg(long)]
    pub precision: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub limits: Limits,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fills every option not given on the command line from the file.
    pub fn apply_file_config(&mut self, file: &toml_config::TomlConfig) {
        if self.input.is_none() {
            self.input = file.input_path().map(str::to_string);
        }
        if self.base_dir.is_none() {
            self.base_dir = file.base_dir().map(str::to_string);
        }
        if self.mode.is_none() {
            self.mode = file.mode().map(str::to_string);
        }
        if self.format.is_none() {
            self.format = file.output_format();
        }
        if self.precision.is_none() {
            self.precision = file.output.as_ref().and_then(|o| o.precision);
        }
        self.limits = file.limits();
    }

    pub fn base_dir(&self) -> &str {
        self.base_dir.as_deref().unwrap_or(".")
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn limits(&self) -> Limits {
        self.limits
    }

    fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validation::validate_required_field("input", &self.input)?;
        validation::validate_path("input", input)?;
        validation::validate_path("base_dir", self.base_dir())?;
        validate_limits(&self.limits)?;
        validation::validate_range("precision", self.precision(), 0, MAX_PRECISION)
    }
}

pub(crate) fn validate_limits(limits: &Limits) -> Result<()> {
    validation::validate_range("limits.min_road_length", limits.min_road_length, 1, u32::MAX)?;
    validation::validate_ordered_bounds(
        "limits.road_length",
        limits.min_road_length,
        limits.max_road_length,
    )?;
    validation::validate_range("limits.min_cities", limits.min_cities, 1, usize::MAX)?;
    validation::validate_ordered_bounds("limits.cities", limits.min_cities, limits.max_cities)
}
