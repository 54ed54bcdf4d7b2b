//! Domain model (IDs, tasks, cursors, pages, errors).

pub mod cursor;
pub mod errors;
pub mod ids;
pub mod page;
pub mod status;
pub mod task;

pub use cursor::Cursor;
pub use errors::StoreError;
pub use ids::TaskId;
pub use page::{CursorPage, OffsetPage};
pub use status::{ParseStatusError, Status};
pub use task::{CreateTaskInput, NewTask, Task, UpdateTaskInput};
