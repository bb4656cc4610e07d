pub mod aggregator;
pub mod filter;
pub mod memory;
pub mod model;
pub mod provider;
pub mod repository;

// 公開APIの再エクスポート

// model.rsから
pub use model::{
    AggregatedResult, ArticleId, DateRange, NewsArticle, PaginationCursor, RegularArticle,
    SubscribedArticle,
};

// provider.rsから
pub use provider::{ApiNewsProvider, NewsProvider, PageResult, ProviderFilters};

// repository.rsから
pub use repository::{persist, NewsStore, NewsTransaction, PgNewsStore};

pub use aggregator::collect_all;
pub use filter::filter_by_date;
pub use memory::MemoryNewsStore;
