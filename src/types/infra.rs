/// データベースインサート操作の結果を表す構造体
/// 新規挿入と重複スキップの件数を記録
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseInsertResult {
    /// 新規挿入された件数
    pub inserted: usize,
    /// 重複によりスキップされた件数
    pub skipped_duplicate: usize,
}

impl DatabaseInsertResult {
    /// 新しい操作結果を作成
    pub fn new(inserted: usize, skipped: usize) -> Self {
        Self {
            inserted,
            skipped_duplicate: skipped,
        }
    }

    /// 空の結果（全て0）を作成
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// 1件分の挿入結果を加算する
    pub fn record(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.skipped_duplicate += 1;
        }
    }

    /// 処理した総件数
    pub fn total(&self) -> usize {
        self.inserted + self.skipped_duplicate
    }

    /// ドメイン名を指定して表示用の文字列を生成
    pub fn display_with_domain(&self, domain_name: &str) -> String {
        format!(
            "{}処理完了: 新規{}件、重複スキップ{}件",
            domain_name, self.inserted, self.skipped_duplicate
        )
    }
}

impl std::ops::Add for DatabaseInsertResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.inserted + rhs.inserted,
            self.skipped_duplicate + rhs.skipped_duplicate,
        )
    }
}

// 汎用的なDisplay実装（デフォルトでは「データ」という名称を使用）
impl std::fmt::Display for DatabaseInsertResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with_domain("データ"))
    }
}
