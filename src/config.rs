use crate::error::{AppError, AppResult};
use crate::pages::pagination::ItemsPerPage;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,

    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub access_token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub items_per_page: ItemsPerPage,
}

// Default value functions
fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}
fn default_api_timeout_secs() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}
fn default_items_per_page() -> usize {
    ItemsPerPage::default().get()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_timeout_secs: default_api_timeout_secs(),
            access_token: None,
            log_level: default_log_level(),
            log_format: default_log_format(),
            items_per_page: default_items_per_page(),
        }
    }
}

impl Config {
    /// 读取 .env 与环境变量，不做校验；命令行覆盖之后再调用 `validate`
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))
    }

    pub fn apply_overrides(&mut self, base_url: Option<String>, access_token: Option<String>) {
        if let Some(base_url) = base_url {
            self.api_base_url = base_url;
        }
        if let Some(access_token) = access_token {
            self.access_token = Some(access_token);
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let parsed = url::Url::parse(&self.api_base_url).map_err(|e| {
            AppError::Config(format!("API_BASE_URL is not a valid URL: {}", e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(
                "API_BASE_URL must use http or https".to_string(),
            ));
        }

        if self.api_timeout_secs == 0 {
            return Err(AppError::Config("API_TIMEOUT_SECS must be > 0".to_string()));
        }

        if ItemsPerPage::try_from(self.items_per_page).is_err() {
            return Err(AppError::Config(format!(
                "ITEMS_PER_PAGE must be one of {:?}",
                ItemsPerPage::ALL.iter().map(|p| p.get()).collect::<Vec<_>>()
            )));
        }

        if !matches!(self.log_format.as_str(), "json" | "text") {
            return Err(AppError::Config(
                "LOG_FORMAT must be json or text".to_string(),
            ));
        }

        Ok(())
    }

    pub fn api(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            timeout_secs: self.api_timeout_secs,
            access_token: self.access_token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }

    pub fn ui(&self) -> UiConfig {
        UiConfig {
            items_per_page: ItemsPerPage::try_from(self.items_per_page).unwrap_or_default(),
        }
    }
}
