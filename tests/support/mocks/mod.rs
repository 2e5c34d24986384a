// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod slug_repo;
pub mod time;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// ユーティリティ関連
pub use util::{DummyClock, UnderscoreSlug};

// スラッグリポジトリ
pub use slug_repo::{InMemorySlugRepo, StoredRow};
