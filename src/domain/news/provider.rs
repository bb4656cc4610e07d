use super::model::{ArticleId, DateRange, PaginationCursor, RegularArticle, SubscribedArticle};
use crate::infra::api::http::HttpClient;
use crate::infra::parser::normalize_date;
use crate::types::{AppConfig, ProviderError};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 時価総額・発行済株式数の範囲指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumericRange {
    pub min: u64,
    pub max: u64,
}

/// 日付範囲の指定（`YYYY-MM-DD`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilter {
    pub from_date: String,
    pub to_date: String,
}

impl From<&DateRange> for DateFilter {
    fn from(range: &DateRange) -> Self {
        Self {
            from_date: range.start.format("%Y-%m-%d").to_string(),
            to_date: range.end.format("%Y-%m-%d").to_string(),
        }
    }
}

/// ニュースAPIへ送るフィルタ条件
///
/// `Default`は日付以外の全条件を「すべて一致」にした値。
/// 呼び出し側は`for_range`で日付範囲だけを差し込む。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFilters {
    pub country: String,
    pub state: String,
    pub area: String,
    pub commodity: Vec<String>,
    #[serde(rename = "type")]
    pub article_type: Vec<String>,
    pub article: String,
    pub project: String,
    pub company: String,
    pub ticker: String,
    #[serde(rename = "free-text-search")]
    pub free_text_search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateFilter>,
    pub country_where: String,
    pub state_where: String,
    pub area_where: String,
    pub commodities_where: String,
    pub marketcap: NumericRange,
    pub outstandingshares: NumericRange,
    pub mode: String,
}

impl Default for ProviderFilters {
    fn default() -> Self {
        let unbounded = NumericRange { min: 0, max: 10000 };
        Self {
            country: String::new(),
            state: String::new(),
            area: String::new(),
            commodity: Vec::new(),
            article_type: Vec::new(),
            article: String::new(),
            project: String::new(),
            company: String::new(),
            ticker: String::new(),
            free_text_search: String::new(),
            date: None,
            country_where: "all".to_string(),
            state_where: "all".to_string(),
            area_where: "all".to_string(),
            commodities_where: "all".to_string(),
            marketcap: unbounded,
            outstandingshares: unbounded,
            mode: "normal".to_string(),
        }
    }
}

impl ProviderFilters {
    /// デフォルト条件に日付範囲を加えたフィルタ
    pub fn for_range(range: &DateRange) -> Self {
        Self {
            date: Some(DateFilter::from(range)),
            ..Self::default()
        }
    }
}

/// 1ページ分のリクエストボディ
#[derive(Debug, Clone, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub filters: ProviderFilters,
}

/// 1ページ分の取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub regular: Vec<RegularArticle>,
    /// レスポンスに`subscribed`が含まれない場合は`None`
    pub subscribed: Option<Vec<SubscribedArticle>>,
    pub pagination: PaginationCursor,
}

/// ニュース記事の提供元
///
/// 本番は`ApiNewsProvider`、テストでは任意の実装を注入する。
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// 指定ページの記事を取得する（日付範囲は提供元へのヒントとして渡す）
    async fn fetch_page(&self, page: u32, range: &DateRange) -> Result<PageResult, ProviderError>;
}

// APIレスポンスの記事（通常）
#[derive(Debug, Deserialize)]
struct ApiArticle {
    id: ArticleId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    date: String,
    #[serde(default, deserialize_with = "deserialize_commodities")]
    commodities: Vec<String>,
}

// APIレスポンスの記事（購読）
#[derive(Debug, Deserialize)]
struct ApiSubscribedArticle {
    #[serde(flatten)]
    article: ApiArticle,
    #[serde(default, deserialize_with = "deserialize_optional_text_or_number")]
    company_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiPageResponse {
    #[serde(default)]
    data: Option<Vec<ApiArticle>>,
    #[serde(default)]
    subscribed: Option<Vec<ApiSubscribedArticle>>,
    pagination: PaginationCursor,
}

// null・未指定は企業IDなしとして扱う
fn deserialize_optional_text_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "文字列または数値が必要です: {}",
            other
        ))),
    }
}

// 配列・カンマ区切り文字列・nullのいずれも受け付ける
fn deserialize_commodities<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::String(text) => text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "commoditiesの形式が不正です: {}",
                other
            )))
        }
    })
}

/// HTTP経由でニュースAPIを呼び出す実装
pub struct ApiNewsProvider<H: HttpClient> {
    client: H,
    base_url: String,
    articles_path: String,
    timeout_secs: u64,
}

impl<H: HttpClient> ApiNewsProvider<H> {
    pub fn new<B: Into<String>, P: Into<String>>(
        client: H,
        base_url: B,
        articles_path: P,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            articles_path: articles_path.into(),
            timeout_secs,
        }
    }

    /// 設定値から作成
    pub fn from_config(client: H, config: &AppConfig) -> Self {
        Self::new(
            client,
            config.news_api_base_url.clone(),
            config.news_api_articles_path.clone(),
            config.http_timeout_secs,
        )
    }

    fn articles_url(&self) -> String {
        format!("{}{}", self.base_url, self.articles_path)
    }

    /// 企業IDからロゴ画像のURLを組み立てる
    pub fn logo_url(&self, company_id: &str) -> String {
        format!("{}/company_logo/{}", self.base_url, company_id)
    }

    fn to_regular(&self, raw: ApiArticle) -> Result<RegularArticle, ProviderError> {
        let date = normalize_date(&raw.date).map_err(|e| {
            ProviderError::malformed(format!("記事{}の日付を解釈できません: {}", raw.id, e))
        })?;
        Ok(RegularArticle {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            date,
            commodities: raw.commodities,
        })
    }

    fn to_subscribed(&self, raw: ApiSubscribedArticle) -> Result<SubscribedArticle, ProviderError> {
        // 企業IDが無い記事はロゴなし（空文字列）で保存する
        let logo_url = raw
            .company_id
            .as_deref()
            .map(|company_id| self.logo_url(company_id))
            .unwrap_or_default();
        let article = self.to_regular(raw.article)?;
        Ok(SubscribedArticle {
            id: article.id,
            title: article.title,
            description: article.description,
            date: article.date,
            logo_url,
            commodities: article.commodities,
        })
    }

    /// レスポンスJSONを検証し、記事を正規化する
    fn process_response(&self, body: Value) -> Result<PageResult, ProviderError> {
        let status = body
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| ProviderError::malformed("statusフィールドが見つかりません"))?;
        if status != "success" {
            return Err(ProviderError::status(status));
        }

        let response: ApiPageResponse = serde_json::from_value(body)
            .map_err(|e| ProviderError::malformed(e.to_string()))?;

        let regular = response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|raw| self.to_regular(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let subscribed = response
            .subscribed
            .map(|items| {
                items
                    .into_iter()
                    .map(|raw| self.to_subscribed(raw))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(PageResult {
            regular,
            subscribed,
            pagination: response.pagination,
        })
    }
}

#[async_trait]
impl<H: HttpClient> NewsProvider for ApiNewsProvider<H> {
    async fn fetch_page(&self, page: u32, range: &DateRange) -> Result<PageResult, ProviderError> {
        let request = PageRequest {
            page,
            filters: ProviderFilters::for_range(range),
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| ProviderError::malformed(format!("リクエストの作成に失敗: {}", e)))?;

        let url = self.articles_url();
        let response = self.client.post_json(&url, &body, self.timeout_secs).await?;

        self.process_response(response).map_err(|e| {
            tracing::error!(page, error = %e, "ニュースAPIのレスポンス処理に失敗");
            e
        })
    }
}
