use url::Url;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

/// Builds absolute endpoint URLs from the configured API base.
#[derive(Clone, Debug)]
pub struct ApiUrl {
    base_url: String,
    base_url_with_slash: String,
}

impl ApiUrl {
    pub fn new(api_config: &ApiConfig) -> Self {
        Self::from_base(&api_config.base_url)
    }

    pub fn from_base(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base_url_with_slash = format!("{}/", base_url);

        Self {
            base_url,
            base_url_with_slash,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 构建完整的接口 URL
    ///
    /// ```ignore
    /// let url = ApiUrl::from_base("http://localhost:5000/api");
    /// url.build_url("/workspaces/42");
    /// // 返回: "http://localhost:5000/api/workspaces/42"
    /// ```
    pub fn build_url(&self, path: &str) -> String {
        let clean_path = path.trim_start_matches('/');
        if clean_path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}{}", self.base_url_with_slash, clean_path)
    }
}

/// Joins path segments into an API path, percent-encoding each one:
/// `api_path(&["workspaces", "42", "projects"])` is `/workspaces/42/projects`.
///
/// An empty segment is an error, so a missing id can never collapse a
/// single-resource path into its collection.
pub fn api_path(segments: &[&str]) -> AppResult<String> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| AppError::internal(format!("Failed to build API path: {}", e)))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| AppError::internal("Failed to build API path"))?;
        path.clear();
        for segment in segments {
            if segment.trim().is_empty() {
                return Err(AppError::validation("Resource id must not be empty"));
            }
            path.push(segment);
        }
    }
    Ok(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_url() -> ApiUrl {
        let api_config = ApiConfig {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
            access_token: None,
        };
        ApiUrl::new(&api_config)
    }

    #[test]
    fn test_build_url() {
        let url = create_test_url();

        assert_eq!(
            url.build_url("workspaces"),
            "http://localhost:5000/api/workspaces"
        );
        assert_eq!(
            url.build_url("/workspaces/42"),
            "http://localhost:5000/api/workspaces/42"
        );
        assert_eq!(url.build_url("/"), "http://localhost:5000/api");
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let url = ApiUrl::from_base("http://localhost:5000/api/");
        assert_eq!(url.base_url(), "http://localhost:5000/api");
        assert_eq!(url.build_url("auth/login"), "http://localhost:5000/api/auth/login");
    }

    #[test]
    fn test_api_path() {
        assert_eq!(api_path(&["workspaces"]).unwrap(), "/workspaces");
        assert_eq!(
            api_path(&["workspaces", "w1", "projects", "p1"]).unwrap(),
            "/workspaces/w1/projects/p1"
        );
        assert_eq!(api_path(&[]).unwrap(), "/");
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert!(matches!(
            api_path(&["workspaces", ""]),
            Err(AppError::Validation { .. })
        ));
        assert!(api_path(&["workspaces", "  ", "projects"]).is_err());
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(
            api_path(&["workspaces", "w1/members/u9"]).unwrap(),
            "/workspaces/w1%2Fmembers%2Fu9"
        );
        assert_eq!(
            api_path(&["tasks", "t 1", "comments"]).unwrap(),
            "/tasks/t%201/comments"
        );
    }
}
