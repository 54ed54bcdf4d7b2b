//! Repository port - タスク格納層の正本（source of truth）
//!
//! # 設計原則
//! - 呼び出し側にはレコードのコピーだけを返す（内部状態への参照は漏らさない）
//! - `update` はフィールドマージと `updated_at` の打刻を 1 回の排他操作で行う
//!   （merge と re-stamp を別呼び出しにすると lost update の競合が生まれる）
//! - 2 つのページング戦略は 1 つの正本マップから計算する

use async_trait::async_trait;

use crate::domain::{
    Cursor, CursorPage, NewTask, OffsetPage, Status, StoreError, Task, TaskId, UpdateTaskInput,
};
use crate::observability::StatusCounts;

/// Repository は task レコードの正本を管理する。
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数のリクエストハンドラから使える）
#[async_trait]
pub trait Repository: Send + Sync {
    /// Assign the next sequence id and store the record. Never fails; the
    /// counter advances irreversibly even if the caller later discards the
    /// result.
    async fn create(&self, draft: NewTask) -> Result<Task, StoreError>;

    /// Fetch a copy of the record, or NotFound.
    async fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError>;

    /// Merge the present fields into the stored record and re-stamp
    /// `updated_at`, atomically. Returns the full merged record.
    async fn update(&self, id: TaskId, input: UpdateTaskInput) -> Result<Task, StoreError>;

    /// Remove the record. The freed id is never reassigned.
    async fn delete(&self, id: TaskId) -> Result<(), StoreError>;

    /// Offset-based listing: filter by status, order ascending by id,
    /// return the `[(page-1)*page_size, page*page_size)` slice clipped to
    /// bounds. A page beyond the end yields an empty slice, not an error.
    /// Normalization of page/page_size below 1 is the caller's job.
    async fn list_offset(
        &self,
        status: Option<Status>,
        page: u64,
        page_size: u64,
    ) -> Result<OffsetPage, StoreError>;

    /// Cursor-based listing: filter by status, order ascending by
    /// `(created_at, id)`, skip records at or before `after` (strict-after),
    /// return up to `limit` records. `limit == 0` defaults to 10.
    /// `next_cursor` is present iff more matching records remain.
    async fn list_cursor(
        &self,
        after: Option<&Cursor>,
        limit: u64,
        status: Option<Status>,
    ) -> Result<CursorPage, StoreError>;

    /// Observability hook: live record counts by status.
    async fn counts_by_status(&self) -> Result<StatusCounts, StoreError>;
}
