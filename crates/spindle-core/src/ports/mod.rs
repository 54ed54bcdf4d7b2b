//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! Repository は格納層のインターフェースで、別のバックエンド
//! （on-disk, remote など）に差し替え可能です。Clock はテスト容易性の
//! ための時刻抽象です。

pub mod clock;
pub mod repository;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::repository::Repository;
