//! Task record and its input shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Status, TaskId};

/// The unit of record.
///
/// Invariants:
/// - `id` is assigned once by the store and never changes.
/// - `created_at` is set once at creation.
/// - `updated_at >= created_at`, refreshed on every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Field-level merge: `Some` overwrites, `None` leaves the field untouched.
    pub fn merge(&mut self, input: &UpdateTaskInput) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(status) = input.status {
            self.status = status;
        }
    }
}

/// A task draft without an id. The store's `create` assigns the id and
/// returns the full record.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewTask {
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Creation input. Title non-emptiness is enforced at the transport
/// boundary, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<Status>,
}

/// Partial update input (field-level merge).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Task {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Task {
            id: TaskId::new(1),
            title: "write report".to_string(),
            description: "quarterly numbers".to_string(),
            status: Status::Pending,
            created_at: t0,
            updated_at: t0,
        }
    }

    #[test]
    fn merge_overwrites_only_present_fields() {
        let mut task = sample();
        task.merge(&UpdateTaskInput {
            title: Some("send report".to_string()),
            description: None,
            status: Some(Status::InProgress),
        });

        assert_eq!(task.title, "send report");
        assert_eq!(task.description, "quarterly numbers");
        assert_eq!(task.status, Status::InProgress);
    }

    #[test]
    fn merge_with_empty_input_is_a_no_op() {
        let mut task = sample();
        let before = task.clone();
        task.merge(&UpdateTaskInput::default());
        assert_eq!(task, before);
    }

    #[test]
    fn task_uses_camel_case_timestamps_on_the_wire() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["id"], 1);
        assert_eq!(value["status"], "Pending");
    }

    #[test]
    fn create_input_defaults_description_and_status() {
        let input: CreateTaskInput = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(input.description, "");
        assert!(input.status.is_none());
    }
}
