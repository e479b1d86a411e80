use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Validation failed for fields: {}", .0.field_names().join(", "))]
    InvalidForm(FieldErrors),

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

// 便捷的错误创建函数
impl AppError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The message shown to the user in a notification, without the
    /// variant prefix used by `Display`.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http(e) => e.to_string(),
            AppError::Api { message, .. } => message.clone(),
            AppError::Decode(e) => format!("Unexpected response: {}", e),
            AppError::Auth { message } => message.clone(),
            AppError::Validation { message } => message.clone(),
            AppError::InvalidForm(errors) => errors
                .first_message()
                .unwrap_or("Validation failed")
                .to_string(),
            AppError::NotFound { resource } => format!("{} not found", resource),
            AppError::Config(message) => message.clone(),
            AppError::Internal(message) => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Http(e) => e.status().map(|s| s.as_u16()),
            AppError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}
