use super::model::{DateRange, NewsArticle};
use std::collections::HashSet;

/// 日付範囲（両端を含む）に収まる記事だけを残す
///
/// ニュースAPI側の日付フィルタは厳密ではないため、取得後にも必ず適用する。
pub fn filter_by_date<T: NewsArticle>(articles: Vec<T>, range: &DateRange) -> Vec<T> {
    articles
        .into_iter()
        .filter(|article| range.contains(article.date()))
        .collect()
}

/// 同じ識別子の記事は最初の1件だけを残す
pub fn dedupe_by_id<T: NewsArticle>(articles: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.id().clone()))
        .collect()
}

/// `excluded`に含まれる識別子の記事を取り除く
pub fn exclude_ids<T: NewsArticle, U: NewsArticle>(articles: Vec<T>, excluded: &[U]) -> Vec<T> {
    let excluded: HashSet<_> = excluded.iter().map(|article| article.id()).collect();
    articles
        .into_iter()
        .filter(|article| !excluded.contains(article.id()))
        .collect()
}
