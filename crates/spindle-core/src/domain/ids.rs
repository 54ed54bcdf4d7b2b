//! Domain identifiers (strongly-typed IDs).
//!
//! TaskId は store が払い出すシーケンス番号（1 始まり、単調増加）です。
//! 削除されても再利用されません。wire 上は素の整数として出すため、
//! `#[serde(transparent)]` を付けています。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a Task. Assigned once by the store, immutable thereafter.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
