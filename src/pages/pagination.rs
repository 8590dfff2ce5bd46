//! Page-number state for paginated lists.

use crate::config::DEFAULT_PAGE_SIZE;

/// Identifies one fetch issued by a [`Pager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u32,
    generation: u64,
}

/// Current page of a list plus the bounds reported by the last fetch.
///
/// Every fetch takes a ticket from [`Pager::begin`]; only the response to the
/// most recent ticket is accepted, so a slow earlier response can never
/// overwrite a newer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: u32,
    total_pages: u32,
    generation: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self::starting_at(1, page_size)
    }

    /// Start on `page`, e.g. one taken from the route.
    pub fn starting_at(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total_pages: 1,
            generation: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Controls are only shown when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Move to `page` (at least 1). Returns whether the page changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let page = page.max(1);
        let changed = page != self.page;
        self.page = page;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.has_next() && self.go_to(self.page + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.has_previous() && self.go_to(self.page - 1)
    }

    /// Back to the first page, e.g. after creating an item.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Issue a ticket for fetching the current page. Earlier tickets go stale.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            page: self.page,
            generation: self.generation,
        }
    }

    /// Record the bounds from a response. Returns `false` (and changes
    /// nothing) when the ticket has been superseded.
    pub fn accept(&mut self, ticket: FetchTicket, total_pages: u32) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale response for page {} (generation {} < {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.total_pages = total_pages.max(1);
        true
    }

    /// "Page 2 of 3"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
