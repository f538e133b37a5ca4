//! Paginated user-listing controller for the dashboard.
//!
//! DESIGN
//! ======
//! The controller is sans-IO: each operation returns a request ticket that the
//! page executes against the API, and the result comes back through a
//! `complete_*` transition. This keeps every state change synchronous and
//! testable without a browser.
//!
//! ORDERING
//! ========
//! Every load carries a monotonically increasing sequence number. Only the
//! completion matching the latest issued number is applied; older ones are
//! reported as `Stale` and dropped, so rapid paging always settles on the last
//! action the user took. In-flight requests are never cancelled.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::api::ApiError;
use crate::net::types::{User, UserPage};

/// Page sizes offered by the per-page selector.
pub const PAGE_SIZE_OPTIONS: [u32; 6] = [2, 4, 6, 8, 10, 12];

pub const DEFAULT_PAGE_SIZE: u32 = 6;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete user.";
pub const DELETE_SUCCESS_MESSAGE: &str = "User deleted successfully!";

/// A page size drawn from `PAGE_SIZE_OPTIONS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// `None` unless `value` is one of the offered sizes.
    pub fn new(value: u32) -> Option<Self> {
        PAGE_SIZE_OPTIONS.contains(&value).then_some(Self(value))
    }

    /// Parse the `<select>` value.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(Self::new)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn options() -> impl Iterator<Item = Self> {
        PAGE_SIZE_OPTIONS.into_iter().map(Self)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Current position within the remote listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: PageSize,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1, page_size: PageSize::default(), total_pages: 0 }
    }
}

impl Pagination {
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether `page` is a valid jump target.
    pub const fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.total_pages
    }
}

/// One issued page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub page: u32,
    pub page_size: PageSize,
}

/// One issued delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    pub user_id: u32,
}

/// Lifecycle of the most recent page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingPhase {
    #[default]
    Idle,
    Loading {
        seq: u64,
    },
    Loaded,
    Failed {
        message: String,
    },
}

/// What a load completion did to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed(String),
    /// A newer load was issued after this one; the result was discarded.
    Stale,
}

/// What a delete completion did to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed { user_id: u32 },
    Failed(String),
}

/// Dashboard listing state: the visible page of users plus pagination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingState {
    users: Vec<User>,
    pagination: Pagination,
    phase: ListingPhase,
    has_loaded: bool,
    last_seq: u64,
    deleting: Option<u32>,
    pending_page_size: Option<PageSize>,
}

impl ListingState {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub const fn phase(&self) -> &ListingPhase {
        &self.phase
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, ListingPhase::Loading { .. })
    }

    /// True until the first successful load lands.
    pub const fn is_initial_load(&self) -> bool {
        !self.has_loaded
    }

    /// Failure with nothing loaded yet; rendered as a full-page error.
    pub fn initial_failure(&self) -> Option<&str> {
        match &self.phase {
            ListingPhase::Failed { message } if !self.has_loaded => Some(message),
            _ => None,
        }
    }

    /// Failure on top of previously loaded data; rendered as a banner.
    pub fn banner_error(&self) -> Option<&str> {
        match &self.phase {
            ListingPhase::Failed { message } if self.has_loaded => Some(message),
            _ => None,
        }
    }

    pub const fn deleting(&self) -> Option<u32> {
        self.deleting
    }

    /// Size shown in the per-page selector: the in-flight size change if any,
    /// otherwise the committed size. Falls back to the committed size as soon
    /// as that change fails or is superseded.
    pub fn selected_page_size(&self) -> PageSize {
        self.pending_page_size.unwrap_or(self.pagination.page_size)
    }

    /// Issue a load for `page` at `page_size`, superseding any in-flight load.
    pub fn load_page(&mut self, page: u32, page_size: PageSize) -> PageRequest {
        self.last_seq += 1;
        self.phase = ListingPhase::Loading { seq: self.last_seq };
        self.pending_page_size = None;
        PageRequest { seq: self.last_seq, page: page.max(1), page_size }
    }

    /// Reload the current page at the current size.
    pub fn reload(&mut self) -> PageRequest {
        self.load_page(self.pagination.current_page, self.pagination.page_size)
    }

    /// Jump to `page`; `None` (and no state change) when out of range.
    pub fn go_to_page(&mut self, page: u32) -> Option<PageRequest> {
        if !self.pagination.contains(page) {
            return None;
        }
        Some(self.load_page(page, self.pagination.page_size))
    }

    pub fn next_page(&mut self) -> Option<PageRequest> {
        self.go_to_page(self.pagination.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Option<PageRequest> {
        self.go_to_page(self.pagination.current_page.saturating_sub(1))
    }

    /// Switch page size, restarting from page 1.
    pub fn change_page_size(&mut self, page_size: PageSize) -> PageRequest {
        let request = self.load_page(1, page_size);
        self.pending_page_size = Some(page_size);
        request
    }

    /// Apply a load result if it belongs to the latest issued request.
    ///
    /// On success the page, size, total and list are replaced together. On
    /// failure the previous list and pagination are kept.
    pub fn complete_load(&mut self, request: PageRequest, result: Result<UserPage, ApiError>) -> LoadOutcome {
        if request.seq != self.last_seq {
            return LoadOutcome::Stale;
        }
        self.pending_page_size = None;
        match result {
            Ok(page) => {
                self.users = page.data;
                self.pagination = Pagination {
                    current_page: request.page,
                    page_size: request.page_size,
                    total_pages: page.total_pages,
                };
                self.phase = ListingPhase::Loaded;
                self.has_loaded = true;
                LoadOutcome::Applied
            }
            Err(_) => {
                self.phase = ListingPhase::Failed { message: LOAD_FAILED_MESSAGE.to_owned() };
                LoadOutcome::Failed(LOAD_FAILED_MESSAGE.to_owned())
            }
        }
    }

    /// Start deleting `user_id`; `None` while another delete is in flight.
    pub fn begin_delete(&mut self, user_id: u32) -> Option<DeleteRequest> {
        if self.deleting.is_some() {
            return None;
        }
        self.deleting = Some(user_id);
        Some(DeleteRequest { user_id })
    }

    /// Drop the deleted record locally on success; leave the list untouched otherwise.
    pub fn complete_delete(&mut self, request: DeleteRequest, result: Result<(), ApiError>) -> DeleteOutcome {
        if self.deleting == Some(request.user_id) {
            self.deleting = None;
        }
        match result {
            Ok(()) => {
                self.users.retain(|user| user.id != request.user_id);
                DeleteOutcome::Removed { user_id: request.user_id }
            }
            Err(_) => DeleteOutcome::Failed(DELETE_FAILED_MESSAGE.to_owned()),
        }
    }
}
