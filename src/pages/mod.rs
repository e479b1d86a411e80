pub mod form_session;
pub mod pagination;
pub mod workspace_detail;
pub mod workspaces;

pub use form_session::{FormMode, FormSession, SubmitBlocked};
pub use pagination::{ItemsPerPage, PageMarker, Pagination, page_markers};
pub use workspace_detail::{DELETE_PROJECT_PROMPT, WorkspaceDetailPage, project_link};
pub use workspaces::{
    DELETE_WORKSPACE_PROMPT, DeleteOutcome, SubmitOutcome, WorkspacesBody, WorkspacesPage,
    WorkspacesView,
};
