//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{EntityError, RepositoryError};

/// UseCase 実行時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    /// 入力または保存済みデータがドメインルールに違反している
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// 対象のセッションが存在しない
    #[error("Session not found")]
    SessionNotFound,

    /// 対象のユーザー設定が存在しない
    #[error("Settings not found")]
    SettingsNotFound,

    /// ストレージ層のエラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
