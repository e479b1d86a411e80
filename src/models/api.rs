use serde::{Deserialize, Serialize};

/// Error body returned by the server on non-2xx responses.
///
/// Servers disagree on the field carrying the human readable text, so both
/// `message` and `error` are accepted.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|m| !m.trim().is_empty()))
            .or_else(|| self.errors.into_iter().next().map(|e| e.message))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default)]
    pub code: String,
    pub message: String,
}
