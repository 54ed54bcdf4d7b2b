//! In-memory repository implementation.
//!
//! Design:
//! - One store object per process, shared via `Arc`. No ambient globals.
//! - A single `RwLock` guards the whole collection: create/update/delete
//!   take the write lock, `get_by_id` and both listings take the read lock.
//! - Id assignment is linearized by the write lock, so concurrent creates
//!   never collide and ids form a gapless 1..=N sequence per store.
//! - Listings observe a consistent snapshot as of read-lock acquisition.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    Cursor, CursorPage, NewTask, OffsetPage, Status, StoreError, Task, TaskId, UpdateTaskInput,
};
use crate::observability::StatusCounts;
use crate::ports::{Clock, Repository, SystemClock};

const DEFAULT_LIMIT: u64 = 10;

/// In-memory store state (single source of truth).
struct StoreState {
    /// Next sequence value minus one. Advances irreversibly; deleted ids
    /// are never handed out again.
    seq: i64,

    /// All live task records, keyed by id.
    items: HashMap<TaskId, Task>,
}

impl StoreState {
    fn new() -> Self {
        Self {
            seq: 0,
            items: HashMap::new(),
        }
    }

    /// Allocate the next TaskId (1, 2, 3, ...).
    fn allocate_id(&mut self) -> TaskId {
        self.seq += 1;
        TaskId::new(self.seq)
    }

    /// Collect copies of all records matching the status filter.
    fn matching(&self, status: Option<Status>) -> Vec<Task> {
        self.items
            .values()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .cloned()
            .collect()
    }
}

/// In-memory repository. The clock is injected so tests can control the
/// `updated_at` stamp deterministically.
pub struct InMemoryRepository<C: Clock = SystemClock> {
    state: RwLock<StoreState>,
    clock: C,
}

impl InMemoryRepository<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryRepository<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryRepository<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: RwLock::new(StoreState::new()),
            clock,
        }
    }
}

#[async_trait]
impl<C: Clock> Repository for InMemoryRepository<C> {
    async fn create(&self, draft: NewTask) -> Result<Task, StoreError> {
        let mut state = self.state.write().await;
        let id = state.allocate_id();
        let task = draft.into_task(id);
        state.items.insert(id, task.clone());
        Ok(task)
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError> {
        let state = self.state.read().await;
        state.items.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: TaskId, input: UpdateTaskInput) -> Result<Task, StoreError> {
        let now = self.clock.now();
        let mut state = self.state.write().await;
        let task = state.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        task.merge(&input);
        task.updated_at = now;
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.items.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list_offset(
        &self,
        status: Option<Status>,
        page: u64,
        page_size: u64,
    ) -> Result<OffsetPage, StoreError> {
        let state = self.state.read().await;
        let mut out = state.matching(status);
        out.sort_by_key(|t| t.id);

        let total_count = out.len() as u64;
        let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let items: Vec<Task> = out
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        Ok(OffsetPage {
            items,
            total_count,
            page,
            page_size,
        })
    }

    async fn list_cursor(
        &self,
        after: Option<&Cursor>,
        limit: u64,
        status: Option<Status>,
    ) -> Result<CursorPage, StoreError> {
        let state = self.state.read().await;
        let mut out: Vec<Task> = state
            .matching(status)
            .into_iter()
            // Strict-after: a record equal to the cursor pair is excluded.
            .filter(|t| after.is_none_or(|c| (t.created_at, t.id) > (c.created_at, c.id)))
            .collect();
        out.sort_by_key(|t| (t.created_at, t.id));

        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit } as usize;
        let has_more = out.len() > limit;
        out.truncate(limit);

        let next_cursor = if has_more {
            out.last().map(Cursor::from_task)
        } else {
            None
        };

        Ok(CursorPage {
            items: out,
            next_cursor,
        })
    }

    async fn counts_by_status(&self) -> Result<StatusCounts, StoreError> {
        let state = self.state.read().await;
        let mut counts = StatusCounts::default();
        for task in state.items.values() {
            match task.status {
                Status::Pending => counts.pending += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Completed => counts.completed += 1,
            }
        }
        Ok(counts)
    }
}
