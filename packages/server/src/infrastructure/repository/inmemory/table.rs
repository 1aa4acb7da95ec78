//! InMemory Table Repository 実装
//!
//! ドメイン層が定義する TableRepository trait の具体的な実装。
//! BTreeMap をインメモリのキーバリューテーブルとして使用します。
//!
//! 実際のキーバリューストアと同様に、以下をサポートします：
//!
//! - プライマリキー属性による put / get / update / delete
//! - 名前付きセカンダリインデックスによる query（件数上限あり）
//! - TTL 属性（Unix 秒）を過ぎた Item の自動削除
//!
//! TTL の削除はアクセス時に遅延して行います。

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{AttributeValue, Item, RepositoryError, TableRepository};

/// インメモリ Table Repository 実装
pub struct InMemoryTable {
    /// テーブル名（ログ出力用）
    name: String,
    /// プライマリキー属性名
    key_attribute: String,
    /// インデックス名 → キー属性名
    indexes: HashMap<String, String>,
    /// TTL 属性名（Unix 秒）
    ttl_attribute: Option<String>,
    /// プライマリキー → Item
    items: Mutex<BTreeMap<String, Item>>,
}

impl InMemoryTable {
    /// 新しい InMemoryTable を作成
    pub fn new(name: &str, key_attribute: &str) -> Self {
        Self {
            name: name.to_string(),
            key_attribute: key_attribute.to_string(),
            indexes: HashMap::new(),
            ttl_attribute: None,
            items: Mutex::new(BTreeMap::new()),
        }
    }

    /// セカンダリインデックスを追加
    pub fn with_index(mut self, index_name: &str, attribute: &str) -> Self {
        self.indexes
            .insert(index_name.to_string(), attribute.to_string());
        self
    }

    /// TTL 属性を設定
    pub fn with_ttl_attribute(mut self, attribute: &str) -> Self {
        self.ttl_attribute = Some(attribute.to_string());
        self
    }

    /// テーブル名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 有効な Item 数
    pub async fn count_items(&self) -> usize {
        let mut items = self.items.lock().await;
        self.purge_expired(&mut items);
        items.len()
    }

    fn purge_expired(&self, items: &mut BTreeMap<String, Item>) {
        let Some(ttl_attribute) = &self.ttl_attribute else {
            return;
        };
        let now = auracast_shared::time::unix_seconds(&auracast_shared::time::now_utc());
        let before = items.len();
        items.retain(|_, item| !is_expired(item, ttl_attribute, now));

        let purged = before - items.len();
        if purged > 0 {
            tracing::debug!("Purged {} expired item(s) from table '{}'", purged, self.name);
        }
    }
}

/// TTL 属性が数値で、かつ現在時刻より過去なら期限切れ
fn is_expired(item: &Item, ttl_attribute: &str, now: i64) -> bool {
    match item.get(ttl_attribute) {
        Some(AttributeValue::Integer(expires_at)) => *expires_at < now,
        Some(AttributeValue::Decimal(expires_at)) => expires_at.trunc().is_some_and(|t| t < now),
        _ => false,
    }
}

#[async_trait]
impl TableRepository for InMemoryTable {
    async fn put_item(&self, item: Item) -> Result<(), RepositoryError> {
        let key = item
            .get(&self.key_attribute)
            .and_then(AttributeValue::as_str)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| RepositoryError::MissingKey(self.key_attribute.clone()))?;

        tracing::debug!("put_item '{}' into table '{}'", key, self.name);
        let mut items = self.items.lock().await;
        items.insert(key, item);
        Ok(())
    }

    async fn get_item(&self, key: &str) -> Result<Option<Item>, RepositoryError> {
        tracing::debug!("get_item '{}' from table '{}'", key, self.name);
        let mut items = self.items.lock().await;
        self.purge_expired(&mut items);
        Ok(items.get(key).cloned())
    }

    async fn update_item(&self, key: &str, attributes: Item) -> Result<(), RepositoryError> {
        tracing::debug!("update_item '{}' in table '{}'", key, self.name);
        let mut items = self.items.lock().await;
        self.purge_expired(&mut items);

        let item = items
            .get_mut(key)
            .ok_or_else(|| RepositoryError::ItemNotFound(key.to_string()))?;
        // the primary key attribute is immutable
        for (name, value) in attributes {
            if name != self.key_attribute {
                item.insert(name, value);
            }
        }
        Ok(())
    }

    async fn delete_item(&self, key: &str) -> Result<(), RepositoryError> {
        tracing::debug!("delete_item '{}' from table '{}'", key, self.name);
        let mut items = self.items.lock().await;
        items.remove(key);
        Ok(())
    }

    async fn query(
        &self,
        index_name: &str,
        key_value: &str,
        limit: usize,
    ) -> Result<Vec<Item>, RepositoryError> {
        let attribute = self
            .indexes
            .get(index_name)
            .ok_or_else(|| RepositoryError::IndexNotFound(index_name.to_string()))?;

        tracing::debug!(
            "query '{}' = '{}' on table '{}' (limit {})",
            index_name,
            key_value,
            self.name,
            limit
        );
        let mut items = self.items.lock().await;
        self.purge_expired(&mut items);

        Ok(items
            .values()
            .filter(|item| item.get(attribute).and_then(AttributeValue::as_str) == Some(key_value))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Decimal;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryTable の基本的な CRUD 操作
    // - セカンダリインデックスによる query と件数上限
    // - TTL 属性による期限切れ Item の削除
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - 部分更新・上書き・存在しないキーの扱いが外部ストアの契約どおりであることを保証する
    //
    // 【どのようなシナリオをテストするか】
    // 1. put / get の成功ケースと上書き
    // 2. プライマリキーがない Item の put（エラーケース）
    // 3. 部分更新の成功ケースと存在しないキー（エラーケース）
    // 4. 存在しないキーの削除（成功する）
    // 5. インデックスによる query と limit
    // 6. TTL 切れの Item が見えなくなること
    // ========================================

    fn profile(device_id: &str, model: &str) -> Item {
        Item::from([
            ("deviceId".to_string(), device_id.into()),
            ("model".to_string(), model.into()),
        ])
    }

    fn create_test_table() -> InMemoryTable {
        InMemoryTable::new("device-profiles-test", "deviceId").with_index("model-index", "model")
    }

    #[tokio::test]
    async fn test_put_and_get_item() {
        // テスト項目: put した Item を get で取得できる
        // given (前提条件):
        let table = create_test_table();

        // when (操作):
        table.put_item(profile("d1", "Pixel 8")).await.unwrap();
        let result = table.get_item("d1").await.unwrap();

        // then (期待する結果):
        assert_eq!(result, Some(profile("d1", "Pixel 8")));
        assert_eq!(table.count_items().await, 1);
        assert_eq!(table.name(), "device-profiles-test");
    }

    #[tokio::test]
    async fn test_put_item_overwrites() {
        // テスト項目: 同じキーの put は上書きになる（重複チェックなし）
        let table = create_test_table();
        table.put_item(profile("d1", "Pixel 8")).await.unwrap();

        table.put_item(profile("d1", "Galaxy S24")).await.unwrap();

        let item = table.get_item("d1").await.unwrap().unwrap();
        assert_eq!(item["model"], AttributeValue::from("Galaxy S24"));
        assert_eq!(table.count_items().await, 1);
    }

    #[tokio::test]
    async fn test_put_item_without_key() {
        // テスト項目: プライマリキー属性のない Item は書き込めない
        let table = create_test_table();

        let result = table
            .put_item(Item::from([("model".to_string(), "Pixel 8".into())]))
            .await;

        assert_eq!(
            result,
            Err(RepositoryError::MissingKey("deviceId".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent_item() {
        // テスト項目: 存在しないキーは None が返される
        let table = create_test_table();
        assert_eq!(table.get_item("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_item_merges_attributes() {
        // テスト項目: 部分更新は指定した属性だけを上書きし、他の属性は残る
        // given (前提条件):
        let table = create_test_table();
        table.put_item(profile("d1", "Pixel 8")).await.unwrap();

        // when (操作):
        let result = table
            .update_item(
                "d1",
                Item::from([
                    (
                        "gain".to_string(),
                        Decimal::parse("0.5").unwrap().into(),
                    ),
                    ("deviceId".to_string(), "d2".into()),
                ]),
            )
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        let item = table.get_item("d1").await.unwrap().unwrap();
        assert_eq!(item["model"], AttributeValue::from("Pixel 8"));
        assert_eq!(
            item["gain"],
            AttributeValue::Decimal(Decimal::parse("0.5").unwrap())
        );
        assert_eq!(item["deviceId"], AttributeValue::from("d1"));
    }

    #[tokio::test]
    async fn test_update_nonexistent_item() {
        // テスト項目: 存在しないキーの部分更新はエラーになる
        let table = create_test_table();

        let result = table.update_item("missing", Item::new()).await;

        assert_eq!(
            result,
            Err(RepositoryError::ItemNotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_nonexistent_item() {
        // テスト項目: 存在しないキーの削除は成功する
        let table = create_test_table();
        table.put_item(profile("d1", "Pixel 8")).await.unwrap();

        assert!(table.delete_item("missing").await.is_ok());
        assert!(table.delete_item("d1").await.is_ok());
        assert_eq!(table.count_items().await, 0);
    }

    #[tokio::test]
    async fn test_query_by_index_with_limit() {
        // テスト項目: インデックスで一致する Item を limit 件まで取得できる
        // given (前提条件):
        let table = create_test_table();
        for i in 0..5 {
            table
                .put_item(profile(&format!("pixel-{}", i), "Pixel 8"))
                .await
                .unwrap();
        }
        table.put_item(profile("galaxy", "Galaxy S24")).await.unwrap();

        // when (操作):
        let all = table.query("model-index", "Pixel 8", 100).await.unwrap();
        let limited = table.query("model-index", "Pixel 8", 3).await.unwrap();

        // then (期待する結果):
        assert_eq!(all.len(), 5);
        assert_eq!(limited.len(), 3);
        assert!(
            all.iter()
                .all(|item| item["model"] == AttributeValue::from("Pixel 8"))
        );
    }

    #[tokio::test]
    async fn test_query_unknown_index() {
        // テスト項目: 定義されていないインデックスの query はエラーになる
        let table = create_test_table();

        let result = table.query("platform-index", "android", 10).await;

        assert_eq!(
            result,
            Err(RepositoryError::IndexNotFound("platform-index".to_string()))
        );
    }

    #[tokio::test]
    async fn test_expired_items_are_removed() {
        // テスト項目: TTL を過ぎた Item は取得・更新できない
        // given (前提条件):
        let table = InMemoryTable::new("sessions-test", "sessionId").with_ttl_attribute("expiresAt");
        let now = auracast_shared::time::unix_seconds(&auracast_shared::time::now_utc());
        table
            .put_item(Item::from([
                ("sessionId".to_string(), "expired".into()),
                ("expiresAt".to_string(), AttributeValue::Integer(now - 60)),
            ]))
            .await
            .unwrap();
        table
            .put_item(Item::from([
                ("sessionId".to_string(), "alive".into()),
                ("expiresAt".to_string(), AttributeValue::Integer(now + 3600)),
            ]))
            .await
            .unwrap();

        // when (操作):
        let expired = table.get_item("expired").await.unwrap();
        let alive = table.get_item("alive").await.unwrap();
        let update = table.update_item("expired", Item::new()).await;

        // then (期待する結果):
        assert!(expired.is_none());
        assert!(alive.is_some());
        assert_eq!(
            update,
            Err(RepositoryError::ItemNotFound("expired".to_string()))
        );
        assert_eq!(table.count_items().await, 1);
    }
}
