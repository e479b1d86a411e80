use serde_json::Value;
use tracing::debug;

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::{AddMemberRequest, Workspace, WorkspaceForm};
use crate::utils::api_url::api_path;
use crate::validation::workspace::validate_add_member;

pub struct WorkspacesApi;

impl WorkspacesApi {
    /// 获取当前用户的所有工作空间
    pub async fn list(api: &ApiClient) -> AppResult<Vec<Workspace>> {
        api.get(&api_path(&["workspaces"])?).await
    }

    /// 创建工作空间
    pub async fn create(api: &ApiClient, form: &WorkspaceForm) -> AppResult<Workspace> {
        debug!(name = %form.name, "creating workspace");
        api.post(&api_path(&["workspaces"])?, form).await
    }

    /// 更新工作空间
    pub async fn update(
        api: &ApiClient,
        workspace_id: &str,
        form: &WorkspaceForm,
    ) -> AppResult<Workspace> {
        api.put(&api_path(&["workspaces", workspace_id])?, form).await
    }

    /// 删除工作空间
    pub async fn delete(api: &ApiClient, workspace_id: &str) -> AppResult<Value> {
        api.delete(&api_path(&["workspaces", workspace_id])?).await
    }

    pub async fn add_member(
        api: &ApiClient,
        workspace_id: &str,
        member: &AddMemberRequest,
    ) -> AppResult<Value> {
        let errors = validate_add_member(member);
        if !errors.is_empty() {
            return Err(AppError::InvalidForm(errors));
        }
        api.post(&api_path(&["workspaces", workspace_id, "members"])?, member)
            .await
    }

    pub async fn remove_member(
        api: &ApiClient,
        workspace_id: &str,
        member_id: &str,
    ) -> AppResult<Value> {
        api.delete(&api_path(&["workspaces", workspace_id, "members", member_id])?)
            .await
    }
}
