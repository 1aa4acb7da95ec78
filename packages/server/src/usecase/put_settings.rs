//! UseCase: ユーザー設定の書き込み
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PutSettingsUseCase::execute() メソッド
//! - userId / lastUpdated の注入とレコード全体の置き換え
//!
//! ### なぜこのテストが必要か
//! - 書き込みはマージではなく全置換であることを保証
//! - 書き込んだ内容が取得時にそのまま返ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規作成
//! - エッジケース：既存レコードの全置換

use std::sync::Arc;

use crate::domain::{Item, TableRepository, Timestamp, UserId, UserSettings};

use super::error::UseCaseError;

/// ユーザー設定書き込みのユースケース
pub struct PutSettingsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn TableRepository>,
}

impl PutSettingsUseCase {
    /// 新しい PutSettingsUseCase を作成
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// ユーザー設定の書き込みを実行
    ///
    /// # Returns
    ///
    /// * `Ok(Item)` - 書き込んだレコード（userId / lastUpdated を含む）
    /// * `Err(UseCaseError)` - 保存失敗
    pub async fn execute(&self, user_id: UserId, body: Item) -> Result<Item, UseCaseError> {
        let record = UserSettings::from_body(user_id, body, Timestamp::now()).into_item();

        // 既存レコードは全置換（マージしない）
        self.repository.put_item(record.clone()).await?;

        Ok(record)
    }
}
