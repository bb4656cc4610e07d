use crate::app::ingest_news;
use crate::domain::news::DateRange;
use crate::web::AppState;
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// `GET /`のクエリパラメータ（`YYYY-MM-DD`）
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl IngestParams {
    /// 未指定（空文字列を含む）の日付は今日として範囲を作る
    pub fn date_range(&self) -> Result<DateRange> {
        let start = parse_query_date("startDate", self.start_date.as_deref())?;
        let end = parse_query_date("endDate", self.end_date.as_deref())?;
        Ok(DateRange::or_today(start, end))
    }
}

fn parse_query_date(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("{}の日付形式が不正です: {}", name, value)),
        None => Ok(None),
    }
}

/// 失敗の種類によらず返す応答
fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

/// 日付範囲の記事を取り込み、保存した集約結果を返す
pub async fn ingest_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<IngestParams>, QueryRejection>,
) -> Response {
    let range = match params
        .context("クエリパラメータの解析に失敗")
        .and_then(|Query(params)| params.date_range())
    {
        Ok(range) => range,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "リクエストの日付指定が不正です");
            return internal_error();
        }
    };

    match ingest_news(
        state.provider.as_ref(),
        state.store.as_ref(),
        &range,
        state.max_pages,
    )
    .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %range, "ニュースの取り込みに失敗しました");
            internal_error()
        }
    }
}
