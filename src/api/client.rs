use async_trait::async_trait;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::models::ApiErrorBody;
use crate::utils::ApiUrl;

/// One HTTP call against the API, path relative to the configured base.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub bearer_token: Option<String>,
}

/// The HTTP seam. Implementations return the decoded JSON body of a 2xx
/// response (`Value::Null` for an empty body) or an error carrying the
/// server's message.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> AppResult<Value>;
}

pub struct ReqwestTransport {
    http: reqwest::Client,
    url: ApiUrl,
}

impl ReqwestTransport {
    pub fn new(api_config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api_config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: ApiUrl::new(api_config),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<Value> {
        let trace_id = Uuid::new_v4();
        let url = self.url.build_url(&request.path);
        let start = Instant::now();

        let mut builder = self.http.request(request.method.clone(), &url);
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(trace_id = %trace_id, method = %request.method, path = %request.path, error = %e, "Request failed");
                return Err(AppError::Http(e));
            }
        };

        let status = response.status();
        let bytes = response.bytes().await?;
        let elapsed = start.elapsed().as_millis() as u64;

        info!(trace_id = %trace_id, method = %request.method, path = %request.path, status = status.as_u16(), elapsed_ms = elapsed, "Request log");

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });
            return Err(AppError::api(status.as_u16(), message));
        }

        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Shared handle used by every resource client: a transport plus the
/// current bearer token.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    token: Arc<RwLock<Option<String>>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(api_config: &ApiConfig) -> AppResult<Self> {
        let transport = ReqwestTransport::new(api_config)?;
        Ok(Self {
            transport: Arc::new(transport),
            token: Arc::new(RwLock::new(api_config.access_token.clone())),
        })
    }

    pub async fn set_access_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn access_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.execute(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> AppResult<T> {
        let bearer_token = self.token.read().await.clone();
        let value = self
            .transport
            .send(ApiRequest {
                method,
                path: path.to_string(),
                body,
                bearer_token,
            })
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
