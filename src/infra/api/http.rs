use crate::types::{InfraError, InfraResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTPクライアントの抽象化トレイト
///
/// 実際のHTTP通信とテスト用の実装を統一的に扱うためのインターフェース。
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// 指定されたURLへJSONをPOSTし、レスポンスのJSONを返す
    ///
    /// # Arguments
    /// * `url` - 送信先URL
    /// * `body` - リクエストボディ
    /// * `timeout_secs` - タイムアウト時間（秒）
    async fn post_json(&self, url: &str, body: &Value, timeout_secs: u64) -> InfraResult<Value>;
}

/// `reqwest` を使用した本番用のHTTPクライアント実装
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// 新しいHTTPクライアントを作成
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(&self, url: &str, body: &Value, timeout_secs: u64) -> InfraResult<Value> {
        let response = self
            .client
            .post(url)
            .json(body)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(|e| InfraError::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfraError::http_status(url, status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| InfraError::http(url, e))
    }
}
