use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("IO error at {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Manifest error: {message}")]
    ManifestError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid version rule pattern '{pattern}': {source}")]
    RuleError {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl DiscoverError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn manifest(message: impl Into<String>) -> Self {
        Self::ManifestError {
            message: message.into(),
        }
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, .. } => format!("無法讀寫檔案: {}", path.display()),
            Self::SerializationError(_) => "composer.json 不是有效的 JSON".to_string(),
            Self::ManifestError { message } => format!("composer.json 格式錯誤: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("參數 {} 無效: {}", field, reason)
            }
            Self::RuleError { .. } => "內部版本規則錯誤".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { .. } => "Check that the path exists and is readable",
            Self::SerializationError(_) | Self::ManifestError { .. } => {
                "Run `composer validate` on the manifest and fix reported problems"
            }
            Self::InvalidConfigValueError { .. } => "Check the command line arguments",
            Self::RuleError { .. } => "Please report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, DiscoverError>;
