use serde_json::Value;

use crate::api::ApiClient;
use crate::error::AppResult;
use crate::models::{Task, TaskForm};
use crate::utils::api_url::api_path;

pub struct TasksApi;

impl TasksApi {
    pub async fn list(api: &ApiClient, workspace_id: &str, project_id: &str) -> AppResult<Vec<Task>> {
        api.get(&tasks_path(workspace_id, project_id, None)?).await
    }

    pub async fn create(
        api: &ApiClient,
        workspace_id: &str,
        project_id: &str,
        form: &TaskForm,
    ) -> AppResult<Task> {
        api.post(&tasks_path(workspace_id, project_id, None)?, form)
            .await
    }

    pub async fn update(
        api: &ApiClient,
        workspace_id: &str,
        project_id: &str,
        task_id: &str,
        form: &TaskForm,
    ) -> AppResult<Task> {
        api.put(&tasks_path(workspace_id, project_id, Some(task_id))?, form)
            .await
    }

    pub async fn delete(
        api: &ApiClient,
        workspace_id: &str,
        project_id: &str,
        task_id: &str,
    ) -> AppResult<Value> {
        api.delete(&tasks_path(workspace_id, project_id, Some(task_id))?)
            .await
    }
}

fn tasks_path(workspace_id: &str, project_id: &str, task_id: Option<&str>) -> AppResult<String> {
    let mut segments = vec!["workspaces", workspace_id, "projects", project_id, "tasks"];
    segments.extend(task_id);
    api_path(&segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::testing::scripted_client;
    use serde_json::json;

    #[tokio::test]
    async fn task_paths() {
        let (transport, api) = scripted_client();
        transport.respond(Ok(json!([{"id": "t1", "title": "Write docs", "status": "todo"}])));
        let tasks = TasksApi::list(&api, "w1", "p1").await.unwrap();
        assert_eq!(tasks[0].status.as_deref(), Some("todo"));

        TasksApi::delete(&api, "w1", "p1", "t1").await.unwrap();
        let requests = transport.requests();
        assert_eq!(requests[0].path, "/workspaces/w1/projects/p1/tasks");
        assert_eq!(requests[1].path, "/workspaces/w1/projects/p1/tasks/t1");
    }

    #[tokio::test]
    async fn empty_task_id_does_not_fall_back_to_collection() {
        let (transport, api) = scripted_client();
        let err = TasksApi::delete(&api, "w1", "p1", "").await.unwrap_err();
        assert!(matches!(err, crate::error::AppError::Validation { .. }));
        assert!(transport.requests().is_empty());
    }
}
