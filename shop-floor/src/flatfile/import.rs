//! Delimited import
//!
//! Fixed column order: date, client, product, process, quantity, unit,
//! price, sample flag, note. Rows before the detected header row are
//! skipped, rows with fewer than 4 columns are discarded, and every
//! surviving row becomes a fresh `Inbound` record. Import never
//! deduplicates; repeated imports produce duplicate records.

use shared::models::order::{OrderRecord, OrderStatus, Unit};
use thiserror::Error;

use crate::utils::money::{MAX_PRICE, MAX_QUANTITY};
use crate::utils::time::normalize_date;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unreadable delimited file: {0}")]
    Csv(#[from] csv::Error),
}

/// Truthy tokens for the sample-flag column
const TRUTHY: [&str; 3] = ["true", "是", "有"];

/// Header tokens recognized in the first column
const HEADER_TOKENS: [&str; 4] = ["date", "日期", "受入日", "收货日期"];

/// Parse a delimited payload into fresh inbound records
///
/// `today` backfills rows whose date cell is blank or unparsable.
pub fn parse_delimited(input: &str, today: &str) -> Result<Vec<OrderRecord>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for row in reader.records() {
        rows.push(row?);
    }

    // Rows before the detected header are preamble (title lines etc.).
    let data_start = rows
        .iter()
        .position(|row| {
            row.get(0)
                .map(|cell| HEADER_TOKENS.contains(&cell.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .map(|idx| idx + 1)
        .unwrap_or(0);

    let mut records = Vec::new();
    for row in &rows[data_start..] {
        if row.len() < 4 {
            continue;
        }
        if let Some(record) = map_row(row, today) {
            records.push(record);
        }
    }
    tracing::info!(imported = records.len(), "Delimited import parsed");
    Ok(records)
}

fn cell(row: &csv::StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

fn map_row(row: &csv::StringRecord, today: &str) -> Option<OrderRecord> {
    let quantity: f64 = cell(row, 4).parse().ok()?;
    if !(quantity > 0.0 && quantity <= MAX_QUANTITY) {
        tracing::warn!(row = ?row, "Import row discarded: bad quantity");
        return None;
    }

    let unit_price = cell(row, 6)
        .parse::<f64>()
        .ok()
        .filter(|p| (0.0..=MAX_PRICE).contains(p))
        .unwrap_or(0.0);
    let sample_token = cell(row, 7).to_ascii_lowercase();

    Some(OrderRecord {
        id: shared::util::fresh_record_id(),
        received_on: normalize_date(cell(row, 0)).unwrap_or_else(|| today.to_string()),
        client: cell(row, 1).to_string(),
        product: cell(row, 2).to_string(),
        process: cell(row, 3).to_string(),
        quantity,
        unit: cell(row, 5).parse().unwrap_or(Unit::Pcs),
        unit_price,
        is_sample: TRUTHY.contains(&sample_token.as_str()),
        status: OrderStatus::Inbound,
        note: cell(row, 8).to_string(),
        vendor: None,
        delivery_note_id: None,
        delivered_on: None,
        paid: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_skips_preamble_and_header() {
        let input = "\
某某机械厂 工单清单,,,
,,,
日期,客户,品名,加工内容,数量,单位,单价,样品,备注
2026/8/3,客户A,法兰,车削,100,pcs,2.5,否,加急
2026-08-04,客户B,轴套,磨削,20,kg,15,是,
";
        let records = parse_delimited(input, "2026-08-06").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].received_on, "2026-08-03");
        assert_eq!(records[0].client, "客户A");
        assert_eq!(records[0].quantity, 100.0);
        assert_eq!(records[0].unit_price, 2.5);
        assert!(!records[0].is_sample);
        assert_eq!(records[0].note, "加急");
        assert_eq!(records[1].unit, Unit::Kg);
        assert!(records[1].is_sample);
    }

    #[test]
    fn test_every_import_row_is_inbound_with_fresh_id() {
        let input = "日期,客户,品名,加工内容,数量,单位,单价,样品\n2026-08-01,客户A,法兰,车削,5,pcs,1,true\n";
        let records = parse_delimited(input, "2026-08-06").unwrap();
        assert_eq!(records[0].status, OrderStatus::Inbound);
        assert!(!records[0].id.is_empty());
        assert!(records[0].is_sample); // "true" is truthy too
    }

    #[test]
    fn test_short_rows_are_discarded() {
        let input = "日期,客户,品名,加工内容,数量\n2026-08-01,客户A,法兰\n2026-08-01,客户A,法兰,车削,5\n";
        let records = parse_delimited(input, "2026-08-06").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_no_header_treats_everything_as_data() {
        let input = "2026-08-01,客户A,法兰,车削,5,pcs,1,否\n";
        let records = parse_delimited(input, "2026-08-06").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_blank_date_falls_back_to_today() {
        let input = "日期,客户,品名,加工内容,数量\n,客户A,法兰,车削,5\n";
        let records = parse_delimited(input, "2026-08-06").unwrap();
        assert_eq!(records[0].received_on, "2026-08-06");
    }

    #[test]
    fn test_bad_quantity_discards_row() {
        let input = "日期,客户,品名,加工内容,数量\n2026-08-01,客户A,法兰,车削,abc\n2026-08-01,客户A,法兰,车削,0\n";
        let records = parse_delimited(input, "2026-08-06").unwrap();
        assert!(records.is_empty());
    }
}
