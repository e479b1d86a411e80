pub mod auth;
pub mod comment;
pub mod password;
pub mod project;
pub mod rules;
pub mod task;
pub mod workspace;

pub use password::{PasswordStrength, StrengthLabel, get_password_strength};
pub use rules::{is_required, is_valid_email, validate_length, validate_password};

use validator::ValidationErrors;

/// 单个字段的校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// `None` when the field passed, the message otherwise.
    pub fn error(&self) -> Option<&str> {
        if self.valid { None } else { Some(&self.message) }
    }
}

/// Field name to error message, in the order the fields were checked.
///
/// A form's error state is always replaced wholesale by a fresh
/// `FieldErrors`, so a field that passed simply has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    /// Records the outcome of one field check; passing checks leave no entry.
    pub fn record(&mut self, field: &str, result: &ValidationResult) {
        if let Some(message) = result.error() {
            self.set(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn first_message(&self) -> Option<&str> {
        self.entries.first().map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = FieldErrors::new();
        for (field, field_errors) in fields {
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field: {}", field));
                out.set(field.to_string(), message);
            }
        }
        out
    }
}

/// A form model that knows how to validate all of its fields at once.
pub trait FormValidation {
    fn validate_fields(&self) -> FieldErrors;
}
