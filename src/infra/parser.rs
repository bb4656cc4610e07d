use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 記事の日付文字列を暦日（`NaiveDate`）に正規化する
///
/// 正規化後は時刻・タイムゾーンを保持しないため、`YYYY-MM-DD`の文字列比較と
/// 日付としての比較が一致する。
///
/// # サポート形式の例
/// - "2025-01-15"（そのままの暦日として扱う）
/// - "2025-01-15T10:00:00Z" / "2025-01-15T21:00:00+09:00"（UTCに変換してから日付部分を取る）
/// - "2025-01-15 10:00:00"（日付部分を取る）
/// - その他`dateparser`が解釈できる形式（UTCに変換）
pub fn normalize_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("日付が空です"));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    // `dateparser`はタイムゾーンを持つ`DateTime`を返すため、UTCに変換する
    match dateparser::parse(trimmed) {
        Ok(dt) => Ok(dt.with_timezone(&Utc).date_naive()),
        Err(_) => Err(anyhow!("不正な日付形式: {}", date_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date_kept_as_is() {
        assert_eq!(normalize_date("2025-08-10").unwrap(), ymd(2025, 8, 10));
        assert_eq!(normalize_date(" 2025-08-10 ").unwrap(), ymd(2025, 8, 10));
    }

    #[test]
    fn test_timestamps_use_utc_date() {
        assert_eq!(normalize_date("2025-08-10T12:30:00Z").unwrap(), ymd(2025, 8, 10));
        assert_eq!(
            normalize_date("2025-08-10T23:30:00.000Z").unwrap(),
            ymd(2025, 8, 10)
        );
        // JSTの早朝はUTCでは前日
        assert_eq!(
            normalize_date("2025-08-11T05:00:00+09:00").unwrap(),
            ymd(2025, 8, 10)
        );
        assert_eq!(
            normalize_date("2025-08-10 18:45:00").unwrap(),
            ymd(2025, 8, 10)
        );
    }

    #[test]
    fn test_rfc2822_fallback() {
        assert_eq!(
            normalize_date("Sun, 10 Aug 2025 12:30:00 +0000").unwrap(),
            ymd(2025, 8, 10)
        );
    }

    #[test]
    fn test_invalid_formats() {
        assert!(normalize_date("").is_err());
        assert!(normalize_date("invalid-date").is_err());
        assert!(normalize_date("2025-13-40").is_err());
    }
}
