//! Presentational view models. Stateless apart from [`Modal`]'s open flag.

pub mod button;
pub mod modal;
pub mod pagination_bar;
pub mod workspace_card;

pub use button::{Button, ButtonType, ButtonVariant};
pub use modal::{Modal, ModalClick};
pub use pagination_bar::PaginationBar;
pub use workspace_card::{WorkspaceCard, workspace_link};
