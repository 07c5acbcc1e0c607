/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date as `YYYY-MM-DD` (local time)
pub fn today_string() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Today's date as the compact `YYYYMMDD` stamp used in delivery-note ids
pub fn today_stamp() -> String {
    chrono::Local::now().date_naive().format("%Y%m%d").to_string()
}

/// Fresh opaque record id (UUID v4)
pub fn fresh_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_are_unique() {
        let a = fresh_record_id();
        let b = fresh_record_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_today_stamp_is_compact_date() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 8);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
