use crate::types::{InfraError, InfraResult};
use sqlx::PgPool;

/// データベース接続プールを作成
///
/// スキーマ（`regular_news` / `subscribed_news`）は外部で管理されている前提のため、
/// マイグレーションは実行しない。定義は`schema.sql`を参照。
pub async fn create_pool(database_url: &str) -> InfraResult<PgPool> {
    PgPool::connect(database_url)
        .await
        .map_err(InfraError::database_connection)
}
