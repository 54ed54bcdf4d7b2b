//! Service - Repository の上のオーケストレーション層
//!
//! - create 時の default 補完（status → Pending）とタイムスタンプ打刻
//! - list 系パラメータの正規化（page/page_size/limit < 1 → default）
//! - それ以外は Repository への純粋な委譲
//!
//! `updated_at` の打刻は Repository::update が merge と同一の排他区間で
//! 行うため、Service 側に二度目の書き込みは存在しない。

use std::sync::Arc;

use crate::domain::{
    CreateTaskInput, Cursor, CursorPage, NewTask, OffsetPage, Status, StoreError, Task, TaskId,
    UpdateTaskInput,
};
use crate::observability::StatusCounts;
use crate::ports::{Clock, Repository, SystemClock};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn Repository>,
    clock: Arc<dyn Clock>,
}

impl Service {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self::with_clock(repo, Arc::new(SystemClock))
    }

    pub fn with_clock(repo: Arc<dyn Repository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Defaults missing status to Pending, stamps
    /// `created_at = updated_at = now`, and delegates to the store.
    pub async fn create(&self, input: CreateTaskInput) -> Result<Task, StoreError> {
        let now = self.clock.now();
        let draft = NewTask {
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(draft).await
    }

    pub async fn get(&self, id: TaskId) -> Result<Task, StoreError> {
        self.repo.get_by_id(id).await
    }

    pub async fn update(&self, id: TaskId, input: UpdateTaskInput) -> Result<Task, StoreError> {
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        self.repo.delete(id).await
    }

    /// Offset listing with `page < 1 → 1` and `page_size < 1 → 10`
    /// normalization.
    pub async fn list_offset(
        &self,
        status: Option<Status>,
        page: u64,
        page_size: u64,
    ) -> Result<OffsetPage, StoreError> {
        let page = page.max(DEFAULT_PAGE);
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self.repo.list_offset(status, page, page_size).await
    }

    /// Cursor listing with `limit < 1 → 10` normalization.
    pub async fn list_cursor(
        &self,
        after: Option<&Cursor>,
        limit: u64,
        status: Option<Status>,
    ) -> Result<CursorPage, StoreError> {
        let limit = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };
        self.repo.list_cursor(after, limit, status).await
    }

    pub async fn counts(&self) -> Result<StatusCounts, StoreError> {
        self.repo.counts_by_status().await
    }
}
