//! UseCase: セッション更新
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateSessionUseCase::execute() メソッド
//! - 更新可能な項目だけの部分更新
//!
//! ### なぜこのテストが必要か
//! - 更新不可の項目（hostDeviceId など）が書き換えられないことを保証
//! - 存在しないセッションは 404 相当のエラーになることを確認
//! - 有効期限が延長されないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：state の更新
//! - 異常系：存在しないセッション、更新可能な項目なし
//! - エッジケース：存在確認と更新の間に削除された場合

use std::sync::Arc;

use crate::domain::{Item, RepositoryError, SessionId, SessionUpdate, TableRepository};

use super::error::UseCaseError;

/// セッション更新のユースケース
pub struct UpdateSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn TableRepository>,
}

impl UpdateSessionUseCase {
    /// 新しい UpdateSessionUseCase を作成
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// セッション更新を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 更新するセッションの ID（Domain Model）
    /// * `body` - 更新内容（更新可能な項目以外は無視される）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 更新成功
    /// * `Err(UseCaseError)` - セッションが存在しない、更新項目なし、保存失敗
    pub async fn execute(&self, session_id: SessionId, body: Item) -> Result<(), UseCaseError> {
        // 1. 存在チェック
        if self.repository.get_item(session_id.as_str()).await?.is_none() {
            return Err(UseCaseError::SessionNotFound);
        }

        // 2. 更新可能な項目だけを抽出
        let update = SessionUpdate::from_body(body)?;
        tracing::debug!(
            "Updating session '{}' fields: {:?}",
            session_id,
            update.field_names()
        );

        // 3. 部分更新（expiresAt は延長しない）
        self.repository
            .update_item(session_id.as_str(), update.into_attributes())
            .await
            .map_err(|e| match e {
                RepositoryError::ItemNotFound(_) => UseCaseError::SessionNotFound,
                other => UseCaseError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{AttributeValue, Decimal, EntityError, MockTableRepository},
        infrastructure::repository::{InMemoryTable, sessions_table},
        usecase::CreateSessionUseCase,
    };

    async fn create_test_repository_with_session() -> Arc<InMemoryTable> {
        let repository = Arc::new(sessions_table("sessions-test"));
        CreateSessionUseCase::new(repository.clone())
            .execute(
                serde_json::from_value(serde_json::json!({"id": "s1", "hostDeviceId": "d1"}))
                    .unwrap(),
            )
            .await
            .unwrap();
        repository
    }

    fn session_id(id: &str) -> SessionId {
        SessionId::new(id.to_string()).unwrap()
    }

    fn body(json: serde_json::Value) -> Item {
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn test_update_session_success() {
        // テスト項目: 更新可能な項目だけが更新され、それ以外は変わらない
        // given (前提条件):
        let repository = create_test_repository_with_session().await;
        let before = repository.get_item("s1").await.unwrap().unwrap();
        let usecase = UpdateSessionUseCase::new(repository.clone());

        // when (操作):
        let result = usecase
            .execute(
                session_id("s1"),
                body(serde_json::json!({
                    "state": "active",
                    "audioConfig": {"gain": 0.5},
                    "hostDeviceId": "intruder"
                })),
            )
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        let after = repository.get_item("s1").await.unwrap().unwrap();
        assert_eq!(after["state"], AttributeValue::from("active"));
        assert_eq!(
            after["audioConfig"],
            AttributeValue::Map(Item::from([(
                "gain".to_string(),
                Decimal::parse("0.5").unwrap().into()
            )]))
        );
        assert_eq!(after["hostDeviceId"], AttributeValue::from("d1"));
        assert_eq!(after["expiresAt"], before["expiresAt"]);
    }

    #[tokio::test]
    async fn test_update_nonexistent_session() {
        // テスト項目: 存在しないセッションの更新は SessionNotFound になる
        let repository = create_test_repository_with_session().await;
        let usecase = UpdateSessionUseCase::new(repository.clone());

        let result = usecase
            .execute(
                session_id("missing-id"),
                body(serde_json::json!({"state": "active"})),
            )
            .await;

        assert_eq!(result, Err(UseCaseError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_update_without_updatable_fields() {
        // テスト項目: 更新可能な項目がなければエラーになる
        let repository = create_test_repository_with_session().await;
        let usecase = UpdateSessionUseCase::new(repository.clone());

        let result = usecase
            .execute(
                session_id("s1"),
                body(serde_json::json!({"hostDeviceId": "d2", "createdAt": "yesterday"})),
            )
            .await;

        assert_eq!(
            result,
            Err(UseCaseError::Entity(EntityError::NoUpdatableFields))
        );
    }

    #[tokio::test]
    async fn test_update_session_deleted_concurrently() {
        // テスト項目: 存在確認後に削除されていた場合も SessionNotFound になる
        // given (前提条件):
        let mut repository = MockTableRepository::new();
        repository
            .expect_get_item()
            .returning(|_| Ok(Some(Item::new())));
        repository
            .expect_update_item()
            .returning(|key, _| Err(RepositoryError::ItemNotFound(key.to_string())));
        let usecase = UpdateSessionUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase
            .execute(session_id("s1"), body(serde_json::json!({"state": "active"})))
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(UseCaseError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_update_session_storage_failure() {
        // テスト項目: ストレージ障害はそのままエラーとして返される
        let mut repository = MockTableRepository::new();
        repository
            .expect_get_item()
            .returning(|_| Err(RepositoryError::Unavailable("connection reset".to_string())));
        repository.expect_update_item().never();
        let usecase = UpdateSessionUseCase::new(Arc::new(repository));

        let result = usecase
            .execute(session_id("s1"), body(serde_json::json!({"state": "active"})))
            .await;

        assert_eq!(
            result,
            Err(UseCaseError::Repository(RepositoryError::Unavailable(
                "connection reset".to_string()
            )))
        );
    }
}
