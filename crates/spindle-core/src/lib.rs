//! spindle-core
//!
//! Core building blocks for the spindle task store.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, status, task, cursor, page, errors）
//! - **ports**: 抽象化レイヤー（Repository, Clock）
//! - **store**: 実装（InMemoryRepository）
//! - **service**: アプリケーションロジック（default 補完、正規化、委譲）
//! - **observability**: status views
//!
//! # 設計原則
//! - Store が唯一の正本（source of truth）。呼び出し側にはコピーだけを返す。
//! - 変更系は write lock、参照系は read lock（single RwLock discipline）。
//! - ID は store 単位で単調増加、削除後も再利用しない。

pub mod domain;
pub mod observability;
pub mod ports;
pub mod service;
pub mod store;

pub use service::Service;
