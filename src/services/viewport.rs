use std::sync::atomic::{AtomicUsize, Ordering};

/// The scrollable surface a page renders into.
pub trait Viewport: Send + Sync {
    fn scroll_to_top(&self);
}

/// No screen attached; counts scroll requests.
#[derive(Debug, Default)]
pub struct HeadlessViewport {
    scrolls: AtomicUsize,
}

impl HeadlessViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl Viewport for HeadlessViewport {
    fn scroll_to_top(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}
