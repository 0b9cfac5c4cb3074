use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadError {
    #[error("Cannot open '{path}': {source}")]
    ResourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid header field '{field}': {reason}")]
    MalformedHeader { field: &'static str, reason: String },

    #[error("Invalid city record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Could not allocate storage for {requested} cities")]
    AllocationFailure { requested: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Resource,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RoadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RoadError::ResourceUnavailable { .. } | RoadError::IoError(_) => ErrorCategory::Input,
            RoadError::MalformedHeader { .. } | RoadError::MalformedRecord { .. } => {
                ErrorCategory::Parse
            }
            RoadError::AllocationFailure { .. } => ErrorCategory::Resource,
            RoadError::ConfigError { .. }
            | RoadError::InvalidConfigValueError { .. }
            | RoadError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Resource => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for the terminal rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RoadError::ResourceUnavailable { path, .. } => {
                format!("Could not open the input file '{}'", path)
            }
            RoadError::MalformedHeader { field, .. } => {
                format!("The road header has an invalid '{}' value", field)
            }
            RoadError::MalformedRecord { line, .. } => {
                format!("City record {} is not in the '<position> <name>' format", line)
            }
            RoadError::AllocationFailure { .. } => "Not enough memory to load the road".to_string(),
            RoadError::IoError(e) => format!("IO error: {}", e),
            RoadError::ConfigError { message } => format!("Configuration problem: {}", message),
            RoadError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            RoadError::MissingConfigError { field } => format!("Option '{}' is required", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RoadError::ResourceUnavailable { .. } | RoadError::IoError(_) => {
                "Check that the file exists and is readable"
            }
            RoadError::MalformedHeader { .. } => {
                "The first line must hold the road length and the second the city count, both within the allowed limits"
            }
            RoadError::MalformedRecord { .. } => {
                "Each city line must be an integer position inside the road, whitespace, then the city name"
            }
            RoadError::AllocationFailure { .. } => "Reduce the number of cities in the input",
            RoadError::ConfigError { .. }
            | RoadError::InvalidConfigValueError { .. }
            | RoadError::MissingConfigError { .. } => "Review the command line flags and the TOML configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, RoadError>;
