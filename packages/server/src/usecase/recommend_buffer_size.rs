//! UseCase: 推奨バッファサイズの取得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RecommendBufferSizeUseCase::execute() メソッド
//! - model-index による検索と集計結果
//!
//! ### なぜこのテストが必要か
//! - 登録直後のプロファイルが推奨値に反映されることを保証
//! - ストレージ障害がそのまま呼び出し元に伝わることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みプロファイルからの推奨値
//! - エッジケース：プロファイル 0 件、別プラットフォームのみ
//! - 異常系：ストレージ障害

use std::sync::Arc;

use crate::domain::{
    BufferRecommendation, MODEL_INDEX, Model, Platform, RECOMMENDATION_SAMPLE_LIMIT,
    TableRepository,
};

use super::error::UseCaseError;

/// 推奨バッファサイズ取得のユースケース
pub struct RecommendBufferSizeUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn TableRepository>,
}

impl RecommendBufferSizeUseCase {
    /// 新しい RecommendBufferSizeUseCase を作成
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// 推奨バッファサイズの計算を実行
    ///
    /// # Arguments
    ///
    /// * `model` - デバイスのモデル名（Domain Model）
    /// * `platform` - プラットフォーム名（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(BufferRecommendation)` - 推奨値と集計に使った件数
    /// * `Err(UseCaseError)` - 検索または集計の失敗
    pub async fn execute(
        &self,
        model: Model,
        platform: Platform,
    ) -> Result<BufferRecommendation, UseCaseError> {
        // 1. model-index で同じモデルのプロファイルを最大 100 件取得
        let profiles = self
            .repository
            .query(MODEL_INDEX, model.as_str(), RECOMMENDATION_SAMPLE_LIMIT)
            .await?;
        tracing::debug!(
            "Found {} profile(s) for model '{}'",
            profiles.len(),
            model
        );

        // 2. プラットフォームで絞り込んで平均を計算
        Ok(BufferRecommendation::from_profiles(
            model, platform, &profiles,
        )?)
    }
}
