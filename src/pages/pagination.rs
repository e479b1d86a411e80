use std::fmt;
use std::ops::Range;

use crate::error::AppError;

/// The page sizes offered in the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemsPerPage {
    #[default]
    Six,
    Twelve,
    TwentyFour,
    FortyEight,
}

impl ItemsPerPage {
    pub const ALL: [ItemsPerPage; 4] = [
        ItemsPerPage::Six,
        ItemsPerPage::Twelve,
        ItemsPerPage::TwentyFour,
        ItemsPerPage::FortyEight,
    ];

    pub fn get(self) -> usize {
        match self {
            ItemsPerPage::Six => 6,
            ItemsPerPage::Twelve => 12,
            ItemsPerPage::TwentyFour => 24,
            ItemsPerPage::FortyEight => 48,
        }
    }
}

impl TryFrom<usize> for ItemsPerPage {
    type Error = AppError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        ItemsPerPage::ALL
            .into_iter()
            .find(|p| p.get() == value)
            .ok_or_else(|| AppError::validation(format!("Unsupported page size: {}", value)))
    }
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

pub fn total_pages(count: usize, items_per_page: ItemsPerPage) -> usize {
    count.div_ceil(items_per_page.get())
}

/// Page buttons to render: the first and last page plus the current page
/// and its neighbours. Each gap gets one ellipsis, except a gap of a single
/// page, which shows that page's number instead.
pub fn page_markers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);

    let mut markers = Vec::new();
    let mut previous: Option<usize> = None;
    for page in 1..=total_pages {
        let shown = page == 1 || page == total_pages || page.abs_diff(current) <= 1;
        if !shown {
            continue;
        }
        if let Some(prev) = previous {
            match page - prev - 1 {
                0 => {}
                1 => markers.push(PageMarker::Page(prev + 1)),
                _ => markers.push(PageMarker::Ellipsis),
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}

/// Client-side pagination over a list that is already fully in memory.
///
/// `current_page` is 1-indexed and kept inside `[1, total_pages]` by every
/// navigation method and by [`clamp`](Self::clamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: ItemsPerPage,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(ItemsPerPage::default())
    }
}

impl Pagination {
    pub fn new(items_per_page: ItemsPerPage) -> Self {
        Self {
            current_page: 1,
            items_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        self.items_per_page
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.items_per_page)
    }

    /// Controls are only worth rendering with more than one page.
    pub fn shows_controls(&self, count: usize) -> bool {
        self.total_pages(count) > 1
    }

    /// Index range of the current page, cut short at the end of the list.
    pub fn page_range(&self, count: usize) -> Range<usize> {
        let per_page = self.items_per_page.get();
        let start = ((self.current_page - 1) * per_page).min(count);
        let end = (start + per_page).min(count);
        start..end
    }

    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }

    /// Always returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }

    /// Moves to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        let last = self.total_pages(count).max(1);
        let target = page.clamp(1, last);
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    pub fn next(&mut self, count: usize) -> bool {
        if !self.has_next(count) {
            return false;
        }
        self.go_to(self.current_page + 1, count)
    }

    pub fn previous(&mut self, count: usize) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.go_to(self.current_page - 1, count)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    /// Pulls the current page back into range after the list shrank.
    pub fn clamp(&mut self, count: usize) -> bool {
        self.go_to(self.current_page, count)
    }

    pub fn markers(&self, count: usize) -> Vec<PageMarker> {
        page_markers(self.current_page, self.total_pages(count))
    }
}
