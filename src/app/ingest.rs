use crate::domain::news::{collect_all, persist, AggregatedResult, DateRange, NewsProvider, NewsStore};
use crate::types::{IngestError, IngestResult};

/// ニュース取り込みのメイン実行関数（依存性を注入）
///
/// 1. 日付範囲内の記事を全ページ分集約
/// 2. 集約結果を1トランザクションで保存
/// 3. 保存したものと同じ集約結果を返す
pub async fn ingest_news(
    provider: &dyn NewsProvider,
    store: &dyn NewsStore,
    range: &DateRange,
    max_pages: u32,
) -> IngestResult<AggregatedResult> {
    tracing::info!(%range, "=== ニュース取り込み開始 ===");

    let result = collect_all(provider, range, max_pages).await?;
    if result.is_empty() {
        tracing::info!(%range, "対象期間の記事はありません");
    }

    let summary = persist(store, &result)
        .await
        .map_err(IngestError::Persist)?;

    tracing::info!(%range, %summary, "=== ニュース取り込み完了 ===");
    Ok(result)
}
