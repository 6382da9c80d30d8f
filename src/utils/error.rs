use thiserror::Error;

/// 更新失敗時顯示給使用者的提示
pub const REFRESH_FAILED_ALERT: &str = "データの更新に失敗しました。";

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Refresh failed: {reason}")]
    RefreshFailed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ListingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ListingError::ApiError(_)
            | ListingError::HttpStatusError { .. }
            | ListingError::RefreshFailed { .. } => ErrorCategory::Network,
            ListingError::CsvError(_)
            | ListingError::SerializationError(_)
            | ListingError::ValidationError { .. } => ErrorCategory::Data,
            ListingError::IoError(_) => ErrorCategory::Storage,
            ListingError::ConfigError { .. }
            | ListingError::ConfigValidationError { .. }
            | ListingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ListingError::RefreshFailed { .. } => REFRESH_FAILED_ALERT.to_string(),
            ListingError::ApiError(_) | ListingError::HttpStatusError { .. } => {
                format!("サウナ情報の取得に失敗しました: {}", self)
            }
            ListingError::SerializationError(_) => {
                "サウナ情報の形式が正しくありません".to_string()
            }
            ListingError::IoError(e) => format!("ファイルの読み書きに失敗しました: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the API endpoint is reachable and try again",
            ErrorCategory::Data => "Check that the input data matches the expected JSON shape",
            ErrorCategory::Storage => "Check that the output path exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
        }
    }
}

/// CLI 結束碼：依錯誤嚴重程度決定
pub fn exit_code(error: &ListingError) -> i32 {
    match error.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
