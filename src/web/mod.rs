use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// 取り込みエンドポイントを持つルーターを作成する
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ingest_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
