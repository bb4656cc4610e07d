use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 記事の識別子
///
/// ニュースAPIは数値・文字列のどちらでも返すことがあるため、文字列表現に揃えて保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ArticleId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

// 誰でも閲覧できる通常記事
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularArticle {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub commodities: Vec<String>,
}

// 購読者向け記事（企業ロゴURLを追加で持つ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribedArticle {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
    pub commodities: Vec<String>,
}

/// 通常記事・購読記事に共通する参照
pub trait NewsArticle {
    fn id(&self) -> &ArticleId;
    fn date(&self) -> NaiveDate;
}

impl NewsArticle for RegularArticle {
    fn id(&self) -> &ArticleId {
        &self.id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl NewsArticle for SubscribedArticle {
    fn id(&self) -> &ArticleId {
        &self.id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// 1回の取り込みで集約した記事
///
/// リクエストの間だけ存在し、内容は2つのテーブルに分けて保存される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub regular_data: Vec<RegularArticle>,
    pub subscribed_data: Vec<SubscribedArticle>,
}

impl AggregatedResult {
    pub fn is_empty(&self) -> bool {
        self.regular_data.is_empty() && self.subscribed_data.is_empty()
    }
}

/// ニュースAPIが返すページ情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationCursor {
    pub current_page: u32,
    pub pages: u32,
}

impl PaginationCursor {
    /// 次のページが存在するか
    pub fn has_more(&self) -> bool {
        self.current_page < self.pages
    }
}

/// 両端を含む暦日の範囲
///
/// `start > end`の場合も検証はせず、どの日付も含まない範囲として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 開始日・終了日ともにローカル時刻の今日
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self::new(today, today)
    }

    /// 未指定の端を今日で補う
    pub fn or_today(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let today = Local::now().date_naive();
        Self::new(start.unwrap_or(today), end.unwrap_or(today))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}〜{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_article_id_from_number_or_string() {
        let from_number: ArticleId = serde_json::from_value(json!(1234)).unwrap();
        let from_string: ArticleId = serde_json::from_value(json!("1234")).unwrap();

        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "1234");
        assert_eq!(serde_json::to_value(&from_number).unwrap(), json!("1234"));
    }

    #[test]
    fn test_aggregated_result_json_shape() {
        let result = AggregatedResult {
            regular_data: vec![RegularArticle {
                id: ArticleId::from(1),
                title: "Drill results".to_string(),
                description: "Assays returned".to_string(),
                date: ymd(2025, 3, 4),
                commodities: vec!["Gold".to_string()],
            }],
            subscribed_data: vec![SubscribedArticle {
                id: ArticleId::from(2),
                title: "Financing".to_string(),
                description: "Private placement".to_string(),
                date: ymd(2025, 3, 5),
                logo_url: "https://example.com/company_logo/9".to_string(),
                commodities: vec![],
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["regularData"][0]["id"], "1");
        assert_eq!(value["regularData"][0]["date"], "2025-03-04");
        assert_eq!(
            value["subscribedData"][0]["logoUrl"],
            "https://example.com/company_logo/9"
        );
    }

    #[test]
    fn test_date_range_inclusive() {
        let range = DateRange::new(ymd(2025, 1, 10), ymd(2025, 1, 12));

        assert!(range.contains(ymd(2025, 1, 10)));
        assert!(range.contains(ymd(2025, 1, 11)));
        assert!(range.contains(ymd(2025, 1, 12)));
        assert!(!range.contains(ymd(2025, 1, 9)));
        assert!(!range.contains(ymd(2025, 1, 13)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::new(ymd(2025, 1, 12), ymd(2025, 1, 10));
        assert!(!range.contains(ymd(2025, 1, 11)));
        assert!(!range.contains(ymd(2025, 1, 12)));
    }

    #[test]
    fn test_or_today_fills_missing_ends() {
        let today = Local::now().date_naive();
        let range = DateRange::or_today(Some(ymd(2025, 1, 1)), None);
        assert_eq!(range.start, ymd(2025, 1, 1));
        assert_eq!(range.end, today);
    }

    #[test]
    fn test_pagination_has_more() {
        assert!(PaginationCursor { current_page: 1, pages: 2 }.has_more());
        assert!(!PaginationCursor { current_page: 2, pages: 2 }.has_more());
        assert!(!PaginationCursor { current_page: 0, pages: 0 }.has_more());
    }
}
