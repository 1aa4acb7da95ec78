//! Repository パターンの実装
//!
//! ドメイン層が定義する TableRepository trait の具体的な実装を提供します。
//! UseCase 層は trait（ドメイン層）に依存し、この実装に直接依存しません（依存性の逆転）。

pub mod inmemory;

pub use inmemory::InMemoryTable;

use crate::domain::MODEL_INDEX;

/// デバイスプロファイルテーブル（キー: deviceId、model-index: model）
pub fn device_profiles_table(name: &str) -> InMemoryTable {
    InMemoryTable::new(name, "deviceId").with_index(MODEL_INDEX, "model")
}

/// セッションテーブル（キー: sessionId、TTL: expiresAt）
pub fn sessions_table(name: &str) -> InMemoryTable {
    InMemoryTable::new(name, "sessionId").with_ttl_attribute("expiresAt")
}

/// ユーザー設定テーブル（キー: userId）
pub fn user_settings_table(name: &str) -> InMemoryTable {
    InMemoryTable::new(name, "userId")
}
