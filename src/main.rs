use anyhow::{Context, Result};
use newsdoggo::domain::news::{ApiNewsProvider, PgNewsStore};
use newsdoggo::infra::api::http::ReqwestHttpClient;
use newsdoggo::infra::db::create_pool;
use newsdoggo::types::AppConfig;
use newsdoggo::web::{create_app, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;
    let pool = create_pool(&config.database_url)
        .await
        .context("データベースへの接続に失敗しました")?;

    let state = AppState {
        provider: Arc::new(ApiNewsProvider::from_config(ReqwestHttpClient::new(), &config)),
        store: Arc::new(PgNewsStore::new(pool)),
        max_pages: config.max_pages,
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("{}での待ち受けに失敗しました", config.bind_addr))?;
    tracing::info!(
        addr = %config.bind_addr,
        api = %config.articles_url(),
        max_pages = config.max_pages,
        "サーバーを起動しました"
    );

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("サーバーの実行中にエラーが発生しました")?;

    tracing::info!("サーバーを停止しました");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "シグナルの待機に失敗しました");
    }
}
