use super::model::{ArticleId, RegularArticle, SubscribedArticle};
use super::repository::{NewsStore, NewsTransaction};
use crate::types::{InfraError, InfraResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

/// メモリ上の保存先で記録される操作回数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStoreStats {
    pub regular_inserts: usize,
    pub subscribed_inserts: usize,
    pub commits: usize,
    pub rollbacks: usize,
}

#[derive(Debug, Default)]
struct MemoryTables {
    regular: Vec<RegularArticle>,
    subscribed: Vec<SubscribedArticle>,
    stats: MemoryStoreStats,
    fail_on_subscribed: Option<usize>,
}

impl MemoryTables {
    fn has_regular(&self, id: &ArticleId) -> bool {
        self.regular.iter().any(|a| &a.id == id)
    }

    fn has_subscribed(&self, id: &ArticleId) -> bool {
        self.subscribed.iter().any(|a| &a.id == id)
    }
}

/// テスト用のメモリ上の保存先
///
/// コミットされるまで挿入内容は見えず、ロールバックで破棄される。
#[derive(Debug, Clone, Default)]
pub struct MemoryNewsStore {
    tables: Arc<Mutex<MemoryTables>>,
}

impl MemoryNewsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// n回目（1始まり）の購読記事挿入を失敗させる
    pub fn fail_on_subscribed_insert(self, nth: usize) -> Self {
        self.lock().fail_on_subscribed = Some(nth);
        self
    }

    pub fn stats(&self) -> MemoryStoreStats {
        self.lock().stats
    }

    pub fn regular_rows(&self) -> Vec<RegularArticle> {
        self.lock().regular.clone()
    }

    pub fn subscribed_rows(&self) -> Vec<SubscribedArticle> {
        self.lock().subscribed.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryTables> {
        // パニックしたテストの後でも中身は参照できるようにする
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl NewsStore for MemoryNewsStore {
    async fn begin(&self) -> InfraResult<Box<dyn NewsTransaction>> {
        Ok(Box::new(MemoryTransaction {
            store: self.clone(),
            regular: Vec::new(),
            subscribed: Vec::new(),
        }))
    }
}

struct MemoryTransaction {
    store: MemoryNewsStore,
    regular: Vec<RegularArticle>,
    subscribed: Vec<SubscribedArticle>,
}

#[async_trait]
impl NewsTransaction for MemoryTransaction {
    async fn insert_regular(&mut self, article: &RegularArticle) -> InfraResult<bool> {
        let mut tables = self.store.lock();
        tables.stats.regular_inserts += 1;

        if tables.has_regular(&article.id) || self.regular.iter().any(|a| a.id == article.id) {
            return Ok(false);
        }
        self.regular.push(article.clone());
        Ok(true)
    }

    async fn insert_subscribed(&mut self, article: &SubscribedArticle) -> InfraResult<bool> {
        let mut tables = self.store.lock();
        tables.stats.subscribed_inserts += 1;

        if tables.fail_on_subscribed == Some(tables.stats.subscribed_inserts) {
            return Err(InfraError::database_query(
                format!("購読記事{}の挿入", article.id),
                sqlx::Error::Protocol("injected failure".to_string()),
            ));
        }

        if tables.has_subscribed(&article.id) || self.subscribed.iter().any(|a| a.id == article.id)
        {
            return Ok(false);
        }
        self.subscribed.push(article.clone());
        Ok(true)
    }

    async fn commit(self: Box<Self>) -> InfraResult<()> {
        let MemoryTransaction {
            store,
            regular,
            subscribed,
        } = *self;
        let mut tables = store.lock();
        for article in regular {
            if !tables.has_regular(&article.id) {
                tables.regular.push(article);
            }
        }
        for article in subscribed {
            if !tables.has_subscribed(&article.id) {
                tables.subscribed.push(article);
            }
        }
        tables.stats.commits += 1;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> InfraResult<()> {
        self.store.lock().stats.rollbacks += 1;
        Ok(())
    }
}
