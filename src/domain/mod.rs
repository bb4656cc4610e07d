//! ドメイン層
//!
//! ニュース記事の取得・集約・保存を扱う。

pub mod news;
