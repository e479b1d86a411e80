pub mod collection;
pub mod confirm;
pub mod context;
pub mod notifications;
pub mod sources;
pub mod terminal;
pub mod viewport;

pub use collection::{CollectionSource, ResourceCollection};
pub use confirm::{Confirmer, FixedConfirmer};
pub use context::{HeadlessServices, PageContext};
pub use notifications::{MemoryNotifier, Notification, NotificationLevel, Notifier};
pub use sources::{CommentSource, ProjectSource, TaskSource, WorkspaceSource};
pub use terminal::{StdinConfirmer, TerminalNotifier, TerminalViewport};
pub use viewport::{HeadlessViewport, Viewport};
