//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - エラー型: 設定・インフラ・ニュースAPI・取り込み処理
//! - 設定: 環境変数から構築する`AppConfig`
//! - データベース操作結果型: インサート結果の統一表現

pub mod config;
pub mod error;
pub mod infra;

// 便利な再エクスポート
pub use config::AppConfig;
pub use error::{
    ConfigError, ConfigResult, InfraError, InfraResult, IngestError, IngestResult, ProviderError,
};
pub use infra::DatabaseInsertResult;
