//! UseCase: セッション作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateSessionUseCase::execute() メソッド
//! - デフォルト値・有効期限付きのセッションレコードの保存
//!
//! ### なぜこのテストが必要か
//! - 省略された項目のデフォルト値と 24 時間の有効期限を保証
//! - 同じ id での作成は上書きになることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：最小限の項目でのセッション作成
//! - 異常系：id / hostDeviceId の欠落
//! - エッジケース：同じ id での再作成

use std::sync::Arc;

use crate::domain::{Item, SessionFactory, SessionId, TableRepository, Timestamp};

use super::error::UseCaseError;

/// セッション作成のユースケース
pub struct CreateSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn TableRepository>,
}

impl CreateSessionUseCase {
    /// 新しい CreateSessionUseCase を作成
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// セッション作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(SessionId)` - 作成したセッションの ID
    /// * `Err(UseCaseError)` - 検証または保存の失敗
    pub async fn execute(&self, body: Item) -> Result<SessionId, UseCaseError> {
        // 1. デフォルト値と有効期限を含むレコードを構築
        let session = SessionFactory::create(body, Timestamp::now())?;
        let session_id = session.id.clone();

        // 2. 無条件に保存（同じ id は上書き）
        self.repository.put_item(session.into_item()).await?;

        Ok(session_id)
    }
}
