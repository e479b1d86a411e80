use async_trait::async_trait;

use crate::api::{ApiClient, CommentsApi, ProjectsApi, TasksApi, WorkspacesApi};
use crate::error::AppResult;
use crate::models::{
    Comment, CommentForm, Project, ProjectForm, Task, TaskForm, Workspace, WorkspaceForm,
};

use super::collection::CollectionSource;

pub struct WorkspaceSource {
    api: ApiClient,
}

impl WorkspaceSource {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CollectionSource for WorkspaceSource {
    type Item = Workspace;
    type Payload = WorkspaceForm;

    fn resource_name(&self) -> &'static str {
        "workspace"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Workspace>> {
        WorkspacesApi::list(&self.api).await
    }

    async fn create(&self, payload: &WorkspaceForm) -> AppResult<Workspace> {
        WorkspacesApi::create(&self.api, payload).await
    }

    async fn update(&self, id: &str, payload: &WorkspaceForm) -> AppResult<Workspace> {
        WorkspacesApi::update(&self.api, id, payload).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        WorkspacesApi::delete(&self.api, id).await.map(|_| ())
    }
}

pub struct ProjectSource {
    api: ApiClient,
    workspace_id: String,
}

impl ProjectSource {
    pub fn new(api: ApiClient, workspace_id: impl Into<String>) -> Self {
        Self {
            api,
            workspace_id: workspace_id.into(),
        }
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }
}

#[async_trait]
impl CollectionSource for ProjectSource {
    type Item = Project;
    type Payload = ProjectForm;

    fn resource_name(&self) -> &'static str {
        "project"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Project>> {
        ProjectsApi::list(&self.api, &self.workspace_id).await
    }

    async fn create(&self, payload: &ProjectForm) -> AppResult<Project> {
        ProjectsApi::create(&self.api, &self.workspace_id, payload).await
    }

    async fn update(&self, id: &str, payload: &ProjectForm) -> AppResult<Project> {
        ProjectsApi::update(&self.api, &self.workspace_id, id, payload).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        ProjectsApi::delete(&self.api, &self.workspace_id, id)
            .await
            .map(|_| ())
    }
}

pub struct TaskSource {
    api: ApiClient,
    workspace_id: String,
    project_id: String,
}

impl TaskSource {
    pub fn new(api: ApiClient, workspace_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api,
            workspace_id: workspace_id.into(),
            project_id: project_id.into(),
        }
    }
}

#[async_trait]
impl CollectionSource for TaskSource {
    type Item = Task;
    type Payload = TaskForm;

    fn resource_name(&self) -> &'static str {
        "task"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Task>> {
        TasksApi::list(&self.api, &self.workspace_id, &self.project_id).await
    }

    async fn create(&self, payload: &TaskForm) -> AppResult<Task> {
        TasksApi::create(&self.api, &self.workspace_id, &self.project_id, payload).await
    }

    async fn update(&self, id: &str, payload: &TaskForm) -> AppResult<Task> {
        TasksApi::update(&self.api, &self.workspace_id, &self.project_id, id, payload).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        TasksApi::delete(&self.api, &self.workspace_id, &self.project_id, id)
            .await
            .map(|_| ())
    }
}

pub struct CommentSource {
    api: ApiClient,
    task_id: String,
}

impl CommentSource {
    pub fn new(api: ApiClient, task_id: impl Into<String>) -> Self {
        Self {
            api,
            task_id: task_id.into(),
        }
    }
}

#[async_trait]
impl CollectionSource for CommentSource {
    type Item = Comment;
    type Payload = CommentForm;

    fn resource_name(&self) -> &'static str {
        "comment"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Comment>> {
        CommentsApi::list(&self.api, &self.task_id).await
    }

    async fn create(&self, payload: &CommentForm) -> AppResult<Comment> {
        CommentsApi::create(&self.api, &self.task_id, payload).await
    }

    async fn update(&self, id: &str, payload: &CommentForm) -> AppResult<Comment> {
        CommentsApi::update(&self.api, &self.task_id, id, payload).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        CommentsApi::delete(&self.api, &self.task_id, id)
            .await
            .map(|_| ())
    }
}
