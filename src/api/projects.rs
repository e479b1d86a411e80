use serde_json::Value;

use crate::api::ApiClient;
use crate::error::AppResult;
use crate::models::{Project, ProjectForm};
use crate::utils::api_url::api_path;

pub struct ProjectsApi;

impl ProjectsApi {
    pub async fn list(api: &ApiClient, workspace_id: &str) -> AppResult<Vec<Project>> {
        api.get(&api_path(&["workspaces", workspace_id, "projects"])?)
            .await
    }

    pub async fn create(
        api: &ApiClient,
        workspace_id: &str,
        form: &ProjectForm,
    ) -> AppResult<Project> {
        api.post(&api_path(&["workspaces", workspace_id, "projects"])?, form)
            .await
    }

    pub async fn update(
        api: &ApiClient,
        workspace_id: &str,
        project_id: &str,
        form: &ProjectForm,
    ) -> AppResult<Project> {
        api.put(
            &api_path(&["workspaces", workspace_id, "projects", project_id])?,
            form,
        )
        .await
    }

    pub async fn delete(api: &ApiClient, workspace_id: &str, project_id: &str) -> AppResult<Value> {
        api.delete(&api_path(&["workspaces", workspace_id, "projects", project_id])?)
            .await
    }
}
