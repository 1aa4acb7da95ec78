//! UseCase: セッション削除
//!
//! 存在チェックは行いません。存在しないセッションの削除も成功します。

use std::sync::Arc;

use crate::domain::{SessionId, TableRepository};

use super::error::UseCaseError;

/// セッション削除のユースケース
pub struct DeleteSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn TableRepository>,
}

impl DeleteSessionUseCase {
    /// 新しい DeleteSessionUseCase を作成
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// セッション削除を実行
    pub async fn execute(&self, session_id: SessionId) -> Result<(), UseCaseError> {
        self.repository.delete_item(session_id.as_str()).await?;
        Ok(())
    }
}
