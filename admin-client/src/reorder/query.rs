//! Filter and pagination state of one list

use shared::models::StatusFilter;
use shared::request::ListQuery;
use tokio::time::{Duration, Instant};

/// Filters as the user sees them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub name_search: String,
    pub seq_search: String,
    pub status: StatusFilter,
    /// 1-based
    pub current_page: u32,
    /// -1 = unpaged
    pub page_size: i32,
}

impl FilterState {
    pub fn new(page_size: i32) -> Self {
        Self {
            name_search: String::new(),
            seq_search: String::new(),
            status: StatusFilter::All,
            current_page: 1,
            page_size,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingSearch {
    name: Option<String>,
    seq_no: Option<String>,
    deadline: Instant,
}

/// Owns filters, pagination, the loading flag and the fetch generation.
///
/// Text filters are debounced: keystrokes only schedule a change, and the
/// change (plus the reset to page 1) lands once the quiet period expires.
/// Every fetch gets a generation number and only the latest one may be
/// applied.
#[derive(Debug, Clone)]
pub struct ListQueryStore {
    filters: FilterState,
    pending: Option<PendingSearch>,
    debounce: Duration,
    loading: bool,
    generation: u64,
}

impl ListQueryStore {
    pub fn new(page_size: i32, debounce: Duration) -> Self {
        Self {
            filters: FilterState::new(page_size),
            pending: None,
            debounce,
            loading: false,
            generation: 0,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn set_name_search(&mut self, term: impl Into<String>, now: Instant) {
        let pending = self.pending_mut(now);
        pending.name = Some(term.into());
    }

    pub fn set_seq_search(&mut self, term: impl Into<String>, now: Instant) {
        let pending = self.pending_mut(now);
        pending.seq_no = Some(term.into());
    }

    fn pending_mut(&mut self, now: Instant) -> &mut PendingSearch {
        let deadline = now + self.debounce;
        let pending = self.pending.get_or_insert(PendingSearch {
            name: None,
            seq_no: None,
            deadline,
        });
        // Each keystroke pushes the deadline back
        pending.deadline = deadline;
        pending
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn has_pending_search(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the pending search if its quiet period is over.
    ///
    /// Returns whether the filters changed (and a refetch is due).
    pub fn apply_due(&mut self, now: Instant) -> bool {
        match self.pending_deadline() {
            Some(deadline) if deadline <= now => self.apply_pending(),
            _ => false,
        }
    }

    /// Apply the pending search unconditionally.
    pub fn apply_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let mut changed = false;
        if let Some(name) = pending.name
            && name != self.filters.name_search
        {
            self.filters.name_search = name;
            changed = true;
        }
        if let Some(seq_no) = pending.seq_no
            && seq_no != self.filters.seq_search
        {
            self.filters.seq_search = seq_no;
            changed = true;
        }
        if changed {
            self.filters.current_page = 1;
        }
        changed
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) -> bool {
        if self.filters.status == status {
            return false;
        }
        self.filters.status = status;
        self.filters.current_page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.filters.current_page == page {
            return false;
        }
        self.filters.current_page = page;
        true
    }

    /// Changing the page size starts over at page 1
    pub fn set_page_size(&mut self, page_size: i32) -> bool {
        if self.filters.page_size == page_size {
            return false;
        }
        self.filters.page_size = page_size;
        self.filters.current_page = 1;
        true
    }

    /// The query for the next fetch, from the applied filters only
    pub fn query(&self) -> ListQuery {
        let mut query = ListQuery::new(self.filters.current_page, self.filters.page_size);
        if !self.filters.name_search.trim().is_empty() {
            query.name = Some(self.filters.name_search.clone());
        }
        if !self.filters.seq_search.trim().is_empty() {
            query.seq_no = Some(self.filters.seq_search.clone());
        }
        query.status = self.filters.status.as_status();
        query
    }

    /// Mark a fetch as started; returns its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Mark a fetch as finished; returns whether its result may be applied
    pub fn finish_fetch(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "Discarding superseded fetch"
            );
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
