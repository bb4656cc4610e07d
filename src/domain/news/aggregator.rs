use super::filter::{dedupe_by_id, exclude_ids, filter_by_date};
use super::model::{AggregatedResult, DateRange};
use super::provider::NewsProvider;
use crate::types::{IngestError, IngestResult};

/// 日付範囲内の記事を全ページ分集める
///
/// ## 動作
/// - 1ページ目から順に取得し、各ページで日付フィルタを適用して受信順に追加
/// - レスポンスの`currentPage < pages`の間は次のページを取得
/// - `max_pages`を超えて続く場合は`IngestError::PaginationLimit`で中断
/// - 最後に識別子の重複を除き、購読記事と重複する通常記事を取り除く
///
/// ## エラー
/// どのページの取得に失敗しても全体を中断し、途中までの結果は返さない。
pub async fn collect_all(
    provider: &dyn NewsProvider,
    range: &DateRange,
    max_pages: u32,
) -> IngestResult<AggregatedResult> {
    let mut result = AggregatedResult::default();
    let mut page: u32 = 1;

    loop {
        if page > max_pages {
            tracing::error!(max_pages, %range, "ページネーションが上限に達しました");
            return Err(IngestError::PaginationLimit { max_pages });
        }

        let current = provider
            .fetch_page(page, range)
            .await
            .map_err(|e| IngestError::upstream(page, e))?;

        let regular = filter_by_date(current.regular, range);
        let subscribed = current
            .subscribed
            .map(|articles| filter_by_date(articles, range))
            .unwrap_or_default();

        tracing::debug!(
            page,
            current_page = current.pagination.current_page,
            pages = current.pagination.pages,
            regular = regular.len(),
            subscribed = subscribed.len(),
            "ページ取得完了"
        );

        result.regular_data.extend(regular);
        result.subscribed_data.extend(subscribed);

        if !current.pagination.has_more() {
            break;
        }
        page += 1;
    }

    let subscribed_data = dedupe_by_id(result.subscribed_data);
    let regular_data = exclude_ids(dedupe_by_id(result.regular_data), &subscribed_data);

    tracing::info!(
        %range,
        pages = page,
        regular = regular_data.len(),
        subscribed = subscribed_data.len(),
        "記事の集約完了"
    );

    Ok(AggregatedResult {
        regular_data,
        subscribed_data,
    })
}
