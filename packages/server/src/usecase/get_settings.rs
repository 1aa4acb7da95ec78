//! UseCase: ユーザー設定の取得

use std::sync::Arc;

use crate::domain::{Item, TableRepository, UserId};

use super::error::UseCaseError;

/// ユーザー設定取得のユースケース
pub struct GetSettingsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn TableRepository>,
}

impl GetSettingsUseCase {
    /// 新しい GetSettingsUseCase を作成
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// ユーザー設定の取得を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Item)` - 保存されているレコードそのもの
    /// * `Err(UseCaseError::SettingsNotFound)` - 一度も書き込まれていない
    pub async fn execute(&self, user_id: UserId) -> Result<Item, UseCaseError> {
        self.repository
            .get_item(user_id.as_str())
            .await?
            .ok_or(UseCaseError::SettingsNotFound)
    }
}
