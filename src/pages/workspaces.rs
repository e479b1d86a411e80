use tracing::{info, warn};

use crate::components::{Button, ButtonType, ButtonVariant, Modal, PaginationBar, WorkspaceCard};
use crate::error::AppResult;
use crate::models::{Workspace, WorkspaceForm};
use crate::services::{CollectionSource, PageContext, ResourceCollection};
use crate::validation::FieldErrors;
use crate::validation::workspace::{DESCRIPTION_MAX, NAME_MAX};

use super::form_session::{FormMode, FormSession, SubmitBlocked};
use super::pagination::{ItemsPerPage, Pagination};

pub const DELETE_WORKSPACE_PROMPT: &str = "Are you sure you want to delete this workspace?";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Created(T),
    Updated(T),
    /// Field validation failed; nothing was sent.
    Invalid,
    /// No form open, or a submission already in flight.
    Ignored,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt.
    Cancelled,
    Deleted,
    Failed(String),
}

/// Snapshot of the open create/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub modal: Modal,
    pub name: String,
    pub description: String,
    pub name_counter: String,
    pub description_counter: String,
    pub errors: FieldErrors,
    pub submit: Button,
    pub cancel: Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspacesBody {
    Loading,
    Error { message: String, retry: Button },
    Empty { create: Button },
    Grid {
        cards: Vec<WorkspaceCard>,
        pagination: Option<PaginationBar>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacesView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub create: Button,
    pub body: WorkspacesBody,
    pub form: Option<FormView>,
}

/// 工作空间列表页
///
/// Owns the workspace collection, the create/edit form session and the
/// pagination cursor. Every handler runs to completion before the next one.
pub struct WorkspacesPage<S>
where
    S: CollectionSource<Item = Workspace, Payload = WorkspaceForm>,
{
    collection: ResourceCollection<S>,
    session: FormSession<WorkspaceForm>,
    pagination: Pagination,
    context: PageContext,
}

impl<S> WorkspacesPage<S>
where
    S: CollectionSource<Item = Workspace, Payload = WorkspaceForm>,
{
    pub fn new(source: S, context: PageContext, items_per_page: ItemsPerPage) -> Self {
        Self {
            collection: ResourceCollection::new(source),
            session: FormSession::new(),
            pagination: Pagination::new(items_per_page),
            context,
        }
    }

    /// Fetches the list and pulls the current page back into range.
    pub async fn load(&mut self) -> AppResult<()> {
        let result = self.collection.refresh().await;
        self.pagination.clamp(self.collection.items().len());
        result
    }

    pub fn collection(&self) -> &ResourceCollection<S> {
        &self.collection
    }

    pub fn session(&self) -> &FormSession<WorkspaceForm> {
        &self.session
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn workspaces(&self) -> &[Workspace] {
        self.collection.items()
    }

    pub fn visible_workspaces(&self) -> &[Workspace] {
        self.pagination.page_items(self.collection.items())
    }

    pub fn open_create_modal(&mut self) {
        self.session.open_create();
    }

    pub fn open_edit_modal(&mut self, workspace: &Workspace) {
        self.session
            .open_edit(workspace.id.clone(), WorkspaceForm::from(workspace));
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

    /// Submits the open form as a create or an update, depending on how it
    /// was opened.
    pub async fn submit(&mut self) -> SubmitOutcome<Workspace> {
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

        match result {
            Ok(workspace) => {
                self.session.finish_success();
                self.pagination.clamp(self.collection.items().len());
                let (message, outcome) = match mode {
                    FormMode::Create => (
                        "Workspace created successfully",
                        SubmitOutcome::Created(workspace),
                    ),
                    FormMode::Edit { .. } => (
                        "Workspace updated successfully",
                        SubmitOutcome::Updated(workspace),
                    ),
                };
                info!(message, "workspace saved");
                self.context.notifier.success(message);
                outcome
            }
            Err(e) => {
                self.session.finish_failure();
                let message = e.user_message();
                warn!(error = %e, "workspace save failed");
                self.context.notifier.error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn delete(&mut self, workspace_id: &str) -> DeleteOutcome {
        if !self.context.confirmer.confirm(DELETE_WORKSPACE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match self.collection.remove(workspace_id).await {
            Ok(()) => {
                self.pagination.clamp(self.collection.items().len());
                info!(workspace_id, "workspace deleted");
                self.context.notifier.success("Workspace deleted successfully");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                let message = e.user_message();
                warn!(workspace_id, error = %e, "workspace delete failed");
                self.context.notifier.error(&message);
                DeleteOutcome::Failed(message)
            }
        }
    }

    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.pagination.set_items_per_page(items_per_page);
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let changed = self.pagination.go_to(page, self.collection.items().len());
        self.scroll_if(changed)
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pagination.next(self.collection.items().len());
        self.scroll_if(changed)
    }

    pub fn previous_page(&mut self) -> bool {
        let changed = self.pagination.previous(self.collection.items().len());
        self.scroll_if(changed)
    }

    fn scroll_if(&self, changed: bool) -> bool {
        if changed {
            self.context.viewport.scroll_to_top();
        }
        changed
    }

    pub fn view(&self) -> WorkspacesView {
        let body = if self.collection.loading() {
            WorkspacesBody::Loading
        } else if let Some(error) = self.collection.error() {
            WorkspacesBody::Error {
                message: format!("Error: {}", error),
                retry: Button::new("Retry").variant(ButtonVariant::Secondary),
            }
        } else if self.collection.items().is_empty() {
            WorkspacesBody::Empty {
                create: Button::new("Create Workspace"),
            }
        } else {
            WorkspacesBody::Grid {
                cards: self
                    .visible_workspaces()
                    .iter()
                    .map(WorkspaceCard::new)
                    .collect(),
                pagination: PaginationBar::new(&self.pagination, self.collection.items().len()),
            }
        };

        WorkspacesView {
            title: "My Workspaces",
            subtitle: "Manage your workspaces and projects",
            create: Button::new("+ Create Workspace"),
            body,
            form: self.form_view(),
        }
    }

    fn form_view(&self) -> Option<FormView> {
        let mode = self.session.mode()?;
        let title = match mode {
            FormMode::Create => "Create Workspace",
            FormMode::Edit { .. } => "Edit Workspace",
        };
        let mut modal = Modal::titled(title);
        modal.open();

        let form = self.session.form();
        Some(FormView {
            modal,
            name: form.name.clone(),
            description: form.description.clone(),
            name_counter: format!("({}/{})", form.name.chars().count(), NAME_MAX),
            description_counter: format!(
                "({}/{})",
                form.description.chars().count(),
                DESCRIPTION_MAX
            ),
            errors: self.session.errors().clone(),
            submit: Button::submit(self.session.submit_label())
                .disabled(self.session.is_submitting()),
            cancel: Button::new("Cancel")
                .variant(ButtonVariant::Secondary)
                .button_type(ButtonType::Button),
        })
    }
}
