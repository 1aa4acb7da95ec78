//! UseCase: デバイスプロファイル登録
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitDeviceProfileUseCase::execute() メソッド
//! - 必須項目の検証、createdAt の付与、小数の Decimal 保存
//!
//! ### なぜこのテストが必要か
//! - 推奨バッファサイズの集計はここで保存されたプロファイルに依存する
//! - 同じ deviceId の再登録は上書きになることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：プロファイルの登録
//! - 異常系：必須項目の欠落
//! - エッジケース：同じ deviceId での再登録

use std::sync::Arc;

use crate::domain::{DeviceId, DeviceProfile, Item, TableRepository, Timestamp};

use super::error::UseCaseError;

/// デバイスプロファイル登録のユースケース
pub struct SubmitDeviceProfileUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn TableRepository>,
}

impl SubmitDeviceProfileUseCase {
    /// 新しい SubmitDeviceProfileUseCase を作成
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// プロファイル登録を実行
    ///
    /// # Arguments
    ///
    /// * `body` - 送信されたプロファイル（必須項目以外もそのまま保存される）
    ///
    /// # Returns
    ///
    /// * `Ok(DeviceId)` - 保存したプロファイルの deviceId
    /// * `Err(UseCaseError)` - 検証または保存の失敗
    pub async fn execute(&self, body: Item) -> Result<DeviceId, UseCaseError> {
        // 1. 必須項目の検証と createdAt の付与
        let profile = DeviceProfile::from_submission(body, Timestamp::now())?;
        let device_id = profile.device_id.clone();

        // 2. 上書きで保存（重複チェックなし）
        self.repository.put_item(profile.into_item()).await?;

        Ok(device_id)
    }
}
