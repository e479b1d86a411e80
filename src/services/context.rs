use std::sync::Arc;

use super::confirm::{Confirmer, FixedConfirmer};
use super::notifications::{MemoryNotifier, Notifier};
use super::viewport::{HeadlessViewport, Viewport};

/// Ambient services a page talks to, injected rather than global.
#[derive(Clone)]
pub struct PageContext {
    pub notifier: Arc<dyn Notifier>,
    pub confirmer: Arc<dyn Confirmer>,
    pub viewport: Arc<dyn Viewport>,
}

impl PageContext {
    pub fn new(
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
        viewport: Arc<dyn Viewport>,
    ) -> Self {
        Self {
            notifier,
            confirmer,
            viewport,
        }
    }
}

/// Concrete handles behind a headless [`PageContext`], kept so callers can
/// inspect what the page did.
pub struct HeadlessServices {
    pub notifier: Arc<MemoryNotifier>,
    pub confirmer: Arc<FixedConfirmer>,
    pub viewport: Arc<HeadlessViewport>,
}

impl HeadlessServices {
    pub fn new(confirm_answer: bool) -> Self {
        Self {
            notifier: Arc::new(MemoryNotifier::new()),
            confirmer: Arc::new(FixedConfirmer::new(confirm_answer)),
            viewport: Arc::new(HeadlessViewport::new()),
        }
    }

    pub fn context(&self) -> PageContext {
        PageContext::new(
            self.notifier.clone(),
            self.confirmer.clone(),
            self.viewport.clone(),
        )
    }
}
