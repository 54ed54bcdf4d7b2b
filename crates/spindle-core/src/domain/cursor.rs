//! Pagination cursor: an opaque `(created_at, id)` marker.
//!
//! A cursor identifies the last record seen by a cursor-based listing
//! call. Validity is purely positional: the next page is computed by
//! comparing `(created_at, id)` pairs, so a cursor stays usable even if
//! the record it points at has been deleted in the meantime.
//!
//! The external encoding is URL-safe base64 over the JSON form
//! `{"t": <created_at>, "id": <id>}`. It must survive transit unmodified
//! and round-trip exactly; anything that fails to decode is an input
//! error (`StoreError::InvalidCursor`), never an internal fault.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::StoreError;
use super::ids::TaskId;
use super::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    #[serde(rename = "t")]
    pub created_at: DateTime<Utc>,
    pub id: TaskId,
}

impl Cursor {
    pub fn from_task(task: &Task) -> Self {
        Self {
            created_at: task.created_at,
            id: task.id,
        }
    }

    /// Encode as an opaque token.
    pub fn encode(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE.encode(bytes)
    }

    /// Decode a token back into the `(created_at, id)` pair it encodes.
    pub fn decode(token: &str) -> Result<Self, StoreError> {
        let bytes = URL_SAFE
            .decode(token)
            .map_err(|e| StoreError::InvalidCursor(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::InvalidCursor(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn token_round_trips_exactly() {
        let cursor = Cursor {
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
            id: TaskId::new(17),
        };

        let token = cursor.encode();
        let decoded = Cursor::decode(&token).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn garbage_token_is_an_input_error() {
        let err = Cursor::decode("not base64 at all!!").unwrap_err();
        assert!(matches!(err, StoreError::InvalidCursor(_)));
    }

    #[test]
    fn valid_base64_of_wrong_shape_is_an_input_error() {
        let token = URL_SAFE.encode(b"{\"foo\": 1}");
        let err = Cursor::decode(&token).unwrap_err();
        assert!(matches!(err, StoreError::InvalidCursor(_)));
    }
}
