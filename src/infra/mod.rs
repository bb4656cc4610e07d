//! インフラ層
//!
//! データベース接続、HTTP通信、文字列のパースなど外部とのやり取りを扱う。

pub mod api;
pub mod db;
pub mod parser;
