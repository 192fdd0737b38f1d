use thiserror::Error;

/// 遠端文字生成失敗的具體原因
#[derive(Error, Debug)]
pub enum NarrativeFailure {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("inference endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("completion was empty")]
    EmptyCompletion,
}

impl NarrativeFailure {
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            NarrativeFailure::Timeout
        } else {
            NarrativeFailure::Transport(error)
        }
    }
}

#[derive(Error, Debug)]
pub enum TarotError {
    #[error("Not enough cards available. Need {requested}, have {available}")]
    InsufficientResources { requested: usize, available: usize },

    #[error("Failed to generate prophecy: {source}")]
    NarrativeGeneration {
        #[source]
        source: NarrativeFailure,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("{field} environment variable is required")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// 錯誤分類，協調層依此決定回應方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InsufficientResources,
    NarrativeGeneration,
    Configuration,
    Unclassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 啟動失敗時的結束碼，一律非零
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TarotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TarotError::InsufficientResources { .. } => ErrorCategory::InsufficientResources,
            TarotError::NarrativeGeneration { .. } => ErrorCategory::NarrativeGeneration,
            TarotError::ConfigError { .. }
            | TarotError::MissingConfigError { .. }
            | TarotError::InvalidConfigValueError { .. }
            | TarotError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            TarotError::IoError(_)
            | TarotError::ApiError(_)
            | TarotError::SerializationError(_)
            | TarotError::ServerError { .. } => ErrorCategory::Unclassified,
        }
    }

    /// Domain errors are the ones the service raises on purpose; everything
    /// else bubbled up from a library.
    pub fn is_domain_error(&self) -> bool {
        self.category() != ErrorCategory::Unclassified
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TarotError::NarrativeGeneration { .. } => ErrorSeverity::Low,
            TarotError::ApiError(_) | TarotError::SerializationError(_) => ErrorSeverity::Medium,
            TarotError::InsufficientResources { .. }
            | TarotError::ConfigError { .. }
            | TarotError::MissingConfigError { .. }
            | TarotError::InvalidConfigValueError { .. }
            | TarotError::ConfigValidationError { .. } => ErrorSeverity::High,
            TarotError::IoError(_) | TarotError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TarotError::InsufficientResources { requested, .. } => format!(
                "Add at least {} card images to the cards folder",
                requested
            ),
            TarotError::NarrativeGeneration { .. } => {
                "Check HF_TOKEN and the inference endpoint; the fallback prophecy is used meanwhile"
                    .to_string()
            }
            TarotError::MissingConfigError { field } => {
                format!("Set {} in the environment or the config file", field)
            }
            TarotError::ConfigError { .. }
            | TarotError::InvalidConfigValueError { .. }
            | TarotError::ConfigValidationError { .. } => {
                "Review the command line flags or the TOML config file".to_string()
            }
            TarotError::IoError(_) => "Check that the folders exist and are readable".to_string(),
            TarotError::ApiError(_) => "Check network connectivity".to_string(),
            TarotError::SerializationError(_) => "Check the response format".to_string(),
            TarotError::ServerError { .. } => {
                "Check that the port is free and the host address is valid".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::InsufficientResources => {
                format!("The deck is too small: {}", self)
            }
            ErrorCategory::NarrativeGeneration => {
                "The oracle could not be reached right now".to_string()
            }
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Unclassified => format!("Unexpected error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TarotError>;
