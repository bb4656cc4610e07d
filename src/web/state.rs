use crate::domain::news::{NewsProvider, NewsStore};
use std::sync::Arc;

/// ハンドラ間で共有する依存関係
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn NewsProvider>,
    pub store: Arc<dyn NewsStore>,
    pub max_pages: u32,
}
