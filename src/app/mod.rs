pub mod ingest;

pub use ingest::ingest_news;
