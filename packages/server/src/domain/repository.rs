//! Repository trait（ストレージ層の抽象化）
//!
//! ドメイン層が必要とするキーバリューテーブルの操作を定義します。
//! 具体的な実装は infrastructure 層が提供し、UseCase 層はこの trait にのみ依存します（依存性の逆転）。

use async_trait::async_trait;
use thiserror::Error;

use super::attribute::Item;

/// Secondary index of the device profile table, keyed by `model`
pub const MODEL_INDEX: &str = "model-index";

/// Errors raised by a table implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Partial update targeted a key with no item
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Item written without a string primary key attribute
    #[error("missing primary key attribute: {0}")]
    MissingKey(String),

    /// Query against an index the table does not define
    #[error("index not found: {0}")]
    IndexNotFound(String),

    /// The backing store could not serve the request
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// キーバリューテーブル
///
/// 1 つのテーブルはプライマリキー属性（文字列）で識別される Item の集合です。
/// 条件付き書き込み・トランザクションは提供しません（最後の書き込みが勝つ）。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Item を書き込む（同じキーの Item は上書き）
    async fn put_item(&self, item: Item) -> Result<(), RepositoryError>;

    /// キーで Item を取得（存在しなければ `None`）
    async fn get_item(&self, key: &str) -> Result<Option<Item>, RepositoryError>;

    /// 指定した属性だけを上書きする部分更新
    ///
    /// キーが存在しない場合は `RepositoryError::ItemNotFound`
    async fn update_item(&self, key: &str, attributes: Item) -> Result<(), RepositoryError>;

    /// キーで Item を削除（存在しなくても成功）
    async fn delete_item(&self, key: &str) -> Result<(), RepositoryError>;

    /// セカンダリインデックスで `key_value` に一致する Item を最大 `limit` 件取得
    async fn query(
        &self,
        index_name: &str,
        key_value: &str,
        limit: usize,
    ) -> Result<Vec<Item>, RepositoryError>;
}
