//! Delimited export
//!
//! One row per record over a superset of the import columns, including the
//! workflow fields. Quantities and prices are plain numbers; booleans use
//! the localized yes/no tokens.

use shared::models::order::OrderRecord;

use super::{NO, YES};

const HEADER: [&str; 14] = [
    "日期",
    "客户",
    "品名",
    "加工内容",
    "数量",
    "单位",
    "单价",
    "样品",
    "状态",
    "外协厂",
    "送货单号",
    "交付日期",
    "已收款",
    "备注",
];

fn yes_no(value: bool) -> &'static str {
    if value { YES } else { NO }
}

/// Render the snapshot as a delimited payload
pub fn export_delimited(records: &[OrderRecord]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record([
            record.received_on.as_str(),
            record.client.as_str(),
            record.product.as_str(),
            record.process.as_str(),
            &record.quantity.to_string(),
            record.unit.token(),
            &record.unit_price.to_string(),
            yes_no(record.is_sample),
            record.status.token(),
            record.vendor.as_deref().unwrap_or(""),
            record.delivery_note_id.as_deref().unwrap_or(""),
            record.delivered_on.as_deref().unwrap_or(""),
            yes_no(record.paid),
            record.note.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // The writer only ever receives valid UTF-8
    Ok(String::from_utf8(bytes).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::order::{OrderStatus, Unit};

    fn record() -> OrderRecord {
        OrderRecord {
            id: "r1".to_string(),
            received_on: "2026-08-01".to_string(),
            client: "客户A".to_string(),
            product: "法兰".to_string(),
            process: "车削".to_string(),
            quantity: 500.0,
            unit: Unit::Pcs,
            unit_price: 2.5,
            is_sample: false,
            status: OrderStatus::Delivered,
            note: "加急".to_string(),
            vendor: None,
            delivery_note_id: Some("DN:20260806001".to_string()),
            delivered_on: Some("2026-08-06".to_string()),
            paid: true,
        }
    }

    #[test]
    fn test_export_renders_workflow_columns() {
        let out = export_delimited(&[record()]).unwrap();
        let mut lines = out.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("日期,客户"));
        let row = lines.next().unwrap();
        assert!(row.contains("500"));
        assert!(!row.contains("500.0")); // plain number rendering
        assert!(row.contains("DELIVERED"));
        assert!(row.contains("DN:20260806001"));
        assert!(row.contains(YES));
    }

    #[test]
    fn test_export_roundtrips_through_import() {
        let out = export_delimited(&[record()]).unwrap();
        let imported = crate::flatfile::import::parse_delimited(&out, "2026-08-06").unwrap();
        // Import maps the shared leading columns; workflow fields reset.
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].client, "客户A");
        assert_eq!(imported[0].quantity, 500.0);
        assert_eq!(imported[0].status, OrderStatus::Inbound);
        assert!(imported[0].delivery_note_id.is_none());
    }
}
