use crate::pages::pagination::{PageMarker, Pagination};

use super::button::{Button, ButtonVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub markers: Vec<PageMarker>,
    pub current_page: usize,
    pub total_pages: usize,
    pub previous: Button,
    pub next: Button,
}

impl PaginationBar {
    /// `None` when the list fits on a single page.
    pub fn new(pagination: &Pagination, count: usize) -> Option<Self> {
        if !pagination.shows_controls(count) {
            return None;
        }
        Some(Self {
            markers: pagination.markers(count),
            current_page: pagination.current_page(),
            total_pages: pagination.total_pages(count),
            previous: Button::new("Previous")
                .variant(ButtonVariant::Secondary)
                .disabled(!pagination.has_previous()),
            next: Button::new("Next")
                .variant(ButtonVariant::Secondary)
                .disabled(!pagination.has_next(count)),
        })
    }

    pub fn status(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    pub fn render(&self) -> String {
        let pages: Vec<String> = self
            .markers
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(n) if *n == self.current_page => format!("[{}]", n),
                PageMarker::Page(n) => n.to_string(),
                PageMarker::Ellipsis => "…".to_string(),
            })
            .collect();
        format!(
            "{} {} {}  {}",
            self.previous,
            pages.join(" "),
            self.next,
            self.status()
        )
    }
}
