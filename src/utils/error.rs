use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseGenError {
    #[error("Unknown course category: {value}")]
    InvalidCategory { value: String },

    #[error("Unknown course electiveness: {value}")]
    InvalidElectiveness { value: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Cannot access '{path}': {source}")]
    FileAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl CourseGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCategory { .. } | Self::InvalidElectiveness { .. } | Self::CsvError(_) => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::FileAccessError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 對應 process exit code
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidCategory { .. } => {
                "Use 'computer-science' or 'cyber-security' in the category column".to_string()
            }
            Self::InvalidElectiveness { .. } => {
                "Use 'mandatory' or 'elective' in the electiveness column".to_string()
            }
            Self::CsvError(_) => {
                "Check that every row has at least 5 columns: code, name, display name, category, electiveness"
                    .to_string()
            }
            Self::FileAccessError { path, .. } => {
                format!("Make sure '{}' exists and is readable/writable", path)
            }
            Self::ConfigError { .. } => "Make sure the config file is valid TOML".to_string(),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Data => format!("Course catalog problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("File system problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseGenError>;
