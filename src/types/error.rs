use thiserror::Error;

/// 設定関連のエラー型
/// 環境変数や設定値の検証など設定に関するエラーを定義
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 環境変数が見つからない
    #[error("環境変数が見つかりません: {name}")]
    MissingEnvironmentVariable { name: String },

    /// 設定値が不正
    #[error("設定値が不正です: {name} - {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ConfigError {
    /// 環境変数不足エラーを作成
    pub fn missing_env_var<N: Into<String>>(name: N) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }

    /// 不正な設定値エラーを作成
    pub fn invalid_value<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// インフラストラクチャ層のエラー型
/// データベース、HTTP通信など基盤的なエラーを定義
#[derive(Error, Debug)]
pub enum InfraError {
    /// データベース接続エラー
    #[error("データベース接続エラー: {source}")]
    DatabaseConnection {
        #[source]
        source: sqlx::Error,
    },

    /// データベースクエリエラー
    #[error("データベースクエリエラー: {operation} - {source}")]
    DatabaseQuery {
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    /// HTTP通信エラー
    #[error("HTTP通信エラー: {url} - {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTPステータスが成功以外
    #[error("HTTPステータスエラー: {url} - {status}")]
    HttpStatus { url: String, status: u16 },
}

impl InfraError {
    /// データベース接続エラーを作成
    pub fn database_connection(source: sqlx::Error) -> Self {
        Self::DatabaseConnection { source }
    }

    /// データベースクエリエラーを作成
    pub fn database_query<O: Into<String>>(operation: O, source: sqlx::Error) -> Self {
        Self::DatabaseQuery {
            operation: operation.into(),
            source,
        }
    }

    /// HTTP通信エラーを作成
    pub fn http<U: Into<String>>(url: U, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// HTTPステータスエラーを作成
    pub fn http_status<U: Into<String>>(url: U, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }
}

/// インフラエラーのResult型エイリアス
pub type InfraResult<T> = std::result::Result<T, InfraError>;

/// ニュース提供APIとの通信エラー
#[derive(Error, Debug)]
pub enum ProviderError {
    /// 通信そのものに失敗
    #[error("ニュースAPIへのリクエストに失敗しました: {0}")]
    Transport(#[from] InfraError),

    /// レスポンスのstatusが"success"以外
    #[error("ニュースAPIがエラーを返しました: status={status}")]
    Status { status: String },

    /// レスポンスの形式が想定外
    #[error("ニュースAPIのレスポンス形式が不正です: {reason}")]
    Malformed { reason: String },
}

impl ProviderError {
    /// ステータスエラーを作成
    pub fn status<S: Into<String>>(status: S) -> Self {
        Self::Status {
            status: status.into(),
        }
    }

    /// 形式不正エラーを作成
    pub fn malformed<R: Into<String>>(reason: R) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// 取り込み処理全体のエラー型
/// HTTPハンドラではどの種類でも同じ500応答に変換される
#[derive(Error, Debug)]
pub enum IngestError {
    /// ページ取得の失敗
    #[error("ページ{page}の取得に失敗しました: {source}")]
    Upstream {
        page: u32,
        #[source]
        source: ProviderError,
    },

    /// ページネーションが上限ページ数までに終わらなかった
    #[error("ページネーションが終了しませんでした: 上限{max_pages}ページ")]
    PaginationLimit { max_pages: u32 },

    /// 保存処理の失敗
    #[error("記事の保存に失敗しました: {0}")]
    Persist(#[source] InfraError),
}

impl IngestError {
    /// ページ取得エラーを作成
    pub fn upstream(page: u32, source: ProviderError) -> Self {
        Self::Upstream { page, source }
    }
}

/// 取り込み処理のResult型エイリアス
pub type IngestResult<T> = std::result::Result<T, IngestError>;
