use serde_json::Value;
use tracing::info;

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RefreshRequest, RegisterRequest,
};
use crate::validation::FormValidation;

pub struct AuthApi;

impl AuthApi {
    /// 用户注册
    pub async fn register(api: &ApiClient, req: &RegisterRequest) -> AppResult<AuthResponse> {
        ensure_valid(req)?;
        let response: AuthResponse = api.post("/auth/register", req).await?;
        remember_token(api, &response).await;
        info!(email = %req.email, "registered");
        Ok(response)
    }

    /// 用户登录
    pub async fn login(api: &ApiClient, req: &LoginRequest) -> AppResult<AuthResponse> {
        ensure_valid(req)?;
        let response: AuthResponse = api.post("/auth/login", req).await?;
        if response.access_token.is_none() {
            return Err(AppError::auth("Login response did not include an access token"));
        }
        remember_token(api, &response).await;
        info!(email = %req.email, "logged in");
        Ok(response)
    }

    /// 刷新访问令牌
    pub async fn refresh(api: &ApiClient, req: &RefreshRequest) -> AppResult<AuthResponse> {
        if req.refresh_token.is_empty() {
            return Err(AppError::validation("Refresh token is required"));
        }
        let response: AuthResponse = api.post("/auth/refresh", req).await?;
        if response.access_token.is_none() {
            return Err(AppError::auth("Refresh response did not include an access token"));
        }
        remember_token(api, &response).await;
        Ok(response)
    }

    /// Requires an authenticated session.
    pub async fn change_password(api: &ApiClient, req: &ChangePasswordRequest) -> AppResult<Value> {
        if !api.is_authenticated().await {
            return Err(AppError::auth("You must be logged in to change your password"));
        }
        ensure_valid(req)?;
        api.post("/auth/change-password", req).await
    }

    pub async fn logout(api: &ApiClient) {
        api.set_access_token(None).await;
    }
}

fn ensure_valid<T: FormValidation>(req: &T) -> AppResult<()> {
    let errors = req.validate_fields();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidForm(errors))
    }
}

async fn remember_token(api: &ApiClient, response: &AuthResponse) {
    if let Some(token) = &response.access_token {
        api.set_access_token(Some(token.clone())).await;
    }
}
