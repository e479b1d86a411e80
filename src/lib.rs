pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;
pub mod validation;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::services::{PageContext, WorkspaceSource};
use crate::pages::WorkspacesPage;
use crate::utils::ApiUrl;
use std::sync::Arc;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct ClientState {
    pub api: ApiClient,
    pub config: Arc<Config>,
    pub api_url: ApiUrl,
}

impl ClientState {
    pub fn new(config: Config) -> AppResult<Self> {
        let api_config = config.api();
        let api = ApiClient::from_config(&api_config)?;
        let api_url = ApiUrl::new(&api_config);
        Ok(Self {
            api,
            config: Arc::new(config),
            api_url,
        })
    }

    pub fn workspaces_page(&self, context: PageContext) -> WorkspacesPage<WorkspaceSource> {
        WorkspacesPage::new(
            WorkspaceSource::new(self.api.clone()),
            context,
            self.config.ui().items_per_page,
        )
    }
}

pub fn init_tracing(config: &Config) {
    let logging = config.logging();
    let level = match logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout belongs to the console UI
    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
