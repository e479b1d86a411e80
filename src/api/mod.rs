pub mod auth;
pub mod client;
pub mod comments;
pub mod projects;
pub mod tasks;
pub mod workspaces;

pub use auth::AuthApi;
pub use client::{ApiClient, ApiRequest, HttpTransport, ReqwestTransport};
pub use comments::CommentsApi;
pub use projects::ProjectsApi;
pub use tasks::TasksApi;
pub use workspaces::WorkspacesApi;
