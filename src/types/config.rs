use crate::types::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// ニュースAPIのデフォルトのベースURL
pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://map.juniormininghub.com";
/// 記事一覧エンドポイントのデフォルトパス
pub const DEFAULT_NEWS_API_ARTICLES_PATH: &str = "/api/newsArticlesAll";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_PAGES: u32 = 500;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// アプリケーション設定
///
/// `.env`ファイル（`dotenvy`で読み込み済み）と環境変数から構築する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub news_api_base_url: String,
    pub news_api_articles_path: String,
    pub http_timeout_secs: u64,
    /// 1回の取り込みで取得する最大ページ数
    pub max_pages: u32,
    pub bind_addr: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでは環境変数を書き換えずにHashMapなどを渡せる。
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| ConfigError::missing_env_var("DATABASE_URL"))?;

        let news_api_base_url = lookup("NEWS_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_NEWS_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let news_api_articles_path = lookup("NEWS_API_ARTICLES_PATH")
            .unwrap_or_else(|| DEFAULT_NEWS_API_ARTICLES_PATH.to_string());

        let http_timeout_secs = parse_or_default(
            &lookup,
            "NEWS_HTTP_TIMEOUT_SECS",
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        let max_pages = parse_or_default(&lookup, "NEWS_MAX_PAGES", DEFAULT_MAX_PAGES)?;
        if max_pages == 0 {
            return Err(ConfigError::invalid_value(
                "NEWS_MAX_PAGES",
                "1以上を指定してください",
            ));
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url,
            news_api_base_url,
            news_api_articles_path,
            http_timeout_secs,
            max_pages,
            bind_addr,
        })
    }

    /// 記事一覧エンドポイントの完全なURL
    pub fn articles_url(&self) -> String {
        format!("{}{}", self.news_api_base_url, self.news_api_articles_path)
    }
}

fn parse_or_default<F, T>(lookup: &F, name: &str, default: T) -> ConfigResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::invalid_value(name, format!("'{}': {}", raw, e))),
        None => Ok(default),
    }
}
