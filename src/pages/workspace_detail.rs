use tracing::warn;

use crate::components::{Button, ButtonVariant, Modal, workspace_link};
use crate::error::AppResult;
use crate::models::{Project, ProjectForm};
use crate::services::{CollectionSource, PageContext, ResourceCollection};
use crate::validation::FieldErrors;

use super::form_session::{FormMode, FormSession, SubmitBlocked};
use super::workspaces::{DeleteOutcome, SubmitOutcome};

pub const DELETE_PROJECT_PROMPT: &str = "Delete this project?";

pub fn project_link(workspace_id: &str, project_id: &str) -> String {
    format!("{}/projects/{}", workspace_link(workspace_id), project_id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub view: Button,
    pub delete: Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    Loading,
    Error(String),
    Empty { create: Button },
    Projects(Vec<ProjectEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFormView {
    pub modal: Modal,
    pub name: String,
    pub description: String,
    pub errors: FieldErrors,
    pub submit: Button,
    pub cancel: Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDetailView {
    pub breadcrumb: String,
    pub create: Button,
    pub body: DetailBody,
    pub form: Option<ProjectFormView>,
}

/// Projects of a single workspace, with a create-project form.
pub struct WorkspaceDetailPage<S>
where
    S: CollectionSource<Item = Project, Payload = ProjectForm>,
{
    workspace_id: String,
    collection: ResourceCollection<S>,
    session: FormSession<ProjectForm>,
    context: PageContext,
}

impl<S> WorkspaceDetailPage<S>
where
    S: CollectionSource<Item = Project, Payload = ProjectForm>,
{
    pub fn new(workspace_id: impl Into<String>, source: S, context: PageContext) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            collection: ResourceCollection::new(source),
            session: FormSession::new(),
            context,
        }
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    pub async fn load(&mut self) -> AppResult<()> {
        self.collection.refresh().await
    }

    pub fn projects(&self) -> &[Project] {
        self.collection.items()
    }

    pub fn session(&self) -> &FormSession<ProjectForm> {
        &self.session
    }

    pub fn open_create_modal(&mut self) {
        self.session.open_create();
    }

    pub fn close_modal(&mut self) {
        self.session.cancel();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.session.form_mut().name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.session.form_mut().description = description.into();
    }

    pub async fn submit(&mut self) -> SubmitOutcome<Project> {
        let mode = match self.session.begin_submit() {
            Ok(mode) => mode,
            Err(SubmitBlocked::Invalid) => return SubmitOutcome::Invalid,
            Err(_) => return SubmitOutcome::Ignored,
        };
        let payload = self.session.form().clone();

        let result = match &mode {
            FormMode::Create => self.collection.add(&payload).await,
            FormMode::Edit { id } => self.collection.edit(id, &payload).await,
        };

        match (result, mode) {
            (Ok(project), FormMode::Create) => {
                self.session.finish_success();
                SubmitOutcome::Created(project)
            }
            (Ok(project), FormMode::Edit { .. }) => {
                self.session.finish_success();
                SubmitOutcome::Updated(project)
            }
            (Err(e), _) => {
                self.session.finish_failure();
                let message = e.user_message();
                warn!(workspace_id = %self.workspace_id, error = %e, "project save failed");
                self.context.notifier.error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn delete(&mut self, project_id: &str) -> DeleteOutcome {
        if !self.context.confirmer.confirm(DELETE_PROJECT_PROMPT) {
            return DeleteOutcome::Cancelled;
        }
        match self.collection.remove(project_id).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => {
                let message = e.user_message();
                warn!(project_id, error = %e, "project delete failed");
                self.context.notifier.error(&message);
                DeleteOutcome::Failed(message)
            }
        }
    }

    pub fn view(&self) -> WorkspaceDetailView {
        let body = if self.collection.loading() {
            DetailBody::Loading
        } else if let Some(error) = self.collection.error() {
            DetailBody::Error(format!("Error: {}", error))
        } else if self.collection.items().is_empty() {
            DetailBody::Empty {
                create: Button::new("Create First Project"),
            }
        } else {
            DetailBody::Projects(
                self.collection
                    .items()
                    .iter()
                    .map(|project| ProjectEntry {
                        id: project.id.clone(),
                        name: project.name.clone(),
                        description: project.description.clone().unwrap_or_default(),
                        link: project_link(&self.workspace_id, &project.id),
                        view: Button::new("View"),
                        delete: Button::new("Delete").variant(ButtonVariant::Danger),
                    })
                    .collect(),
            )
        };

        let form = self.session.is_open().then(|| {
            let mut modal = Modal::titled("Create Project");
            modal.open();
            ProjectFormView {
                modal,
                name: self.session.form().name.clone(),
                description: self.session.form().description.clone(),
                errors: self.session.errors().clone(),
                submit: Button::submit(self.session.submit_label())
                    .disabled(self.session.is_submitting()),
                cancel: Button::new("Cancel").variant(ButtonVariant::Secondary),
            }
        });

        WorkspaceDetailView {
            breadcrumb: format!("Workspaces / {}", self.workspace_id),
            create: Button::new("+ New Project"),
            body,
            form,
        }
    }
}
