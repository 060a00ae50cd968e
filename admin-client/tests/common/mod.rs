//! In-memory category backend for list tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use admin_client::{ClientError, ClientResult, ReorderBackend};
use async_trait::async_trait;
use shared::models::{Category, EntityStatus};
use shared::request::ListQuery;
use shared::response::PagedList;
use shared::ErrorCode;

pub fn category(id: i64, name: &str, seq_no: i32) -> Category {
    Category {
        id,
        name: name.to_string(),
        seq_no,
        status: EntityStatus::Active,
        image: None,
    }
}

/// Appetizers(1), Beverages(2), Combos(3)
pub fn three_categories() -> Vec<Category> {
    vec![
        category(1, "Appetizers", 1),
        category(2, "Beverages", 2),
        category(3, "Combos", 3),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCall {
    pub id: i64,
    pub name: String,
    pub new_seq_no: i32,
}

#[derive(Default)]
struct State {
    rows: Mutex<Vec<Category>>,
    shifts: Mutex<Vec<ShiftCall>>,
    queries: Mutex<Vec<ListQuery>>,
    fetches: AtomicUsize,
    fail_fetch: AtomicBool,
    fail_shift: Mutex<Option<ErrorCode>>,
    shift_delay: Mutex<Option<Duration>>,
    fetch_delay: Mutex<Option<Duration>>,
}

/// Applies shifts the way the server does: the moved row takes the target
/// slot and every sibling is renumbered 1..=N.
#[derive(Clone, Default)]
pub struct FakeCategories {
    state: Arc<State>,
}

impl FakeCategories {
    pub fn new(rows: Vec<Category>) -> Self {
        let fake = Self::default();
        *fake.state.rows.lock().unwrap() = rows;
        fake
    }

    pub fn rows(&self) -> Vec<Category> {
        self.state.rows.lock().unwrap().clone()
    }

    pub fn shifts(&self) -> Vec<ShiftCall> {
        self.state.shifts.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> Option<ListQuery> {
        self.state.queries.lock().unwrap().last().cloned()
    }

    pub fn fetch_count(&self) -> usize {
        self.state.fetches.load(Ordering::SeqCst)
    }

    /// Simulate an edit made from another session
    pub fn rename(&self, id: i64, name: &str) {
        let mut rows = self.state.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == id) {
            row.name = name.to_string();
        }
    }

    pub fn set_status(&self, id: i64, status: EntityStatus) {
        let mut rows = self.state.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == id) {
            row.status = status;
        }
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.state.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_shift(&self, code: Option<ErrorCode>) {
        *self.state.fail_shift.lock().unwrap() = code;
    }

    pub fn delay_shift(&self, delay: Duration) {
        *self.state.shift_delay.lock().unwrap() = Some(delay);
    }

    pub fn delay_fetch(&self, delay: Duration) {
        *self.state.fetch_delay.lock().unwrap() = Some(delay);
    }
}

#[async_trait]
impl ReorderBackend for FakeCategories {
    type Entity = Category;

    fn label(&self) -> &'static str {
        "category"
    }

    async fn fetch(&self, query: &ListQuery) -> ClientResult<PagedList<Category>> {
        self.state.fetches.fetch_add(1, Ordering::SeqCst);
        self.state.queries.lock().unwrap().push(query.clone());

        let delay = *self.state.fetch_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.state.fail_fetch.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("database unavailable".into()));
        }

        let mut rows: Vec<Category> = self
            .rows()
            .into_iter()
            .filter(|c| match &query.name {
                Some(name) => c.name.to_lowercase().contains(&name.to_lowercase()),
                None => true,
            })
            .filter(|c| match query.status {
                Some(status) => c.status == status,
                None => true,
            })
            .collect();
        rows.sort_by_key(|c| c.seq_no);

        let total = rows.len() as u64;
        let items = if query.is_unpaged() {
            rows
        } else {
            let limit = query.limit.max(1) as usize;
            let skip = (query.page.max(1) as usize - 1) * limit;
            rows.into_iter().skip(skip).take(limit).collect()
        };
        Ok(PagedList::new(items, total))
    }

    async fn shift(&self, id: i64, name: &str, new_seq_no: i32) -> ClientResult<()> {
        self.state.shifts.lock().unwrap().push(ShiftCall {
            id,
            name: name.to_string(),
            new_seq_no,
        });

        let delay = *self.state.shift_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(code) = *self.state.fail_shift.lock().unwrap() {
            return Err(ClientError::Api {
                code,
                message: code.message().to_string(),
            });
        }

        let mut rows = self.state.rows.lock().unwrap();
        rows.sort_by_key(|c| c.seq_no);
        let Some(pos) = rows.iter().position(|c| c.id == id) else {
            return Err(ClientError::NotFound(format!("category {}", id)));
        };
        if rows[pos].name != name {
            return Err(ClientError::Api {
                code: ErrorCode::SequenceConflict,
                message: "Name does not match".into(),
            });
        }

        let moved = rows.remove(pos);
        let slot = (new_seq_no.max(1) as usize - 1).min(rows.len());
        rows.insert(slot, moved);
        for (i, row) in rows.iter_mut().enumerate() {
            row.seq_no = i as i32 + 1;
        }
        Ok(())
    }
}
