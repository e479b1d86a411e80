pub mod api;
pub mod auth;
pub mod comment;
pub mod project;
pub mod task;
pub mod workspace;

pub use api::*;
pub use auth::*;
pub use comment::*;
pub use project::*;
pub use task::*;
pub use workspace::*;

/// Anything a collection can address by server id.
pub trait Identified {
    fn id(&self) -> &str;
}
