use crate::config::{validate_limits, OutputFormat, DEFAULT_PRECISION, MAX_PRECISION};
use crate::core::{ConfigProvider, Limits};
use crate::utils::error::{Result, RoadError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub query: Option<QueryConfig>,
    pub limits: Option<LimitsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Menu selector, `"1"` or `"2"`.
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub min_road_length: Option<u32>,
    pub max_road_length: Option<u32>,
    pub min_cities: Option<usize>,
    pub max_cities: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub precision: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RoadError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RoadError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references; unknown variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RoadError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_dir(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.base_dir.as_deref())
    }

    pub fn mode(&self) -> Option<&str> {
        self.query.as_ref().and_then(|q| q.mode.as_deref())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.path.as_deref())
    }

    fn limits(&self) -> Limits {
        let defaults = Limits::default();
        match &self.limits {
            Some(l) => Limits {
                min_road_length: l.min_road_length.unwrap_or(defaults.min_road_length),
                max_road_length: l.max_road_length.unwrap_or(defaults.max_road_length),
                min_cities: l.min_cities.unwrap_or(defaults.min_cities),
                max_cities: l.max_cities.unwrap_or(defaults.max_cities),
            },
            None => defaults,
        }
    }

    fn precision(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }
        if let Some(mode) = self.mode() {
            validation::validate_non_empty_string("query.mode", mode)?;
        }
        validate_limits(&self.limits())?;
        validation::validate_range("output.precision", self.precision(), 0, MAX_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
path = "roads/sul.txt"

[query]
mode = "2"

[limits]
min_road_length = 5
max_cities = 100

[output]
format = "json"
precision = 3
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), Some("roads/sul.txt"));
        assert_eq!(config.mode(), Some("2"));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.precision(), 3);

        let limits = config.limits();
        assert_eq!(limits.min_road_length, 5);
        assert_eq!(limits.max_road_length, 1_000_000);
        assert_eq!(limits.max_cities, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.input_path(), None);
        assert_eq!(config.limits(), Limits::default());
        assert_eq!(config.precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROAD_TEST_DATA_DIR", "/srv/roads");

        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "${ROAD_TEST_DATA_DIR}/road.txt"
"#,
        )
        .unwrap();
        assert_eq!(config.input_path(), Some("/srv/roads/road.txt"));

        std::env::remove_var("ROAD_TEST_DATA_DIR");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[input\npath = 1").unwrap_err();
        assert!(matches!(err, RoadError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[limits]
min_road_length = 10
max_road_length = 5
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[output]
precision = 40
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"road.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), Some("road.txt"));
    }
}
