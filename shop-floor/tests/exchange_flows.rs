//! Import, export and backup-restore flows through the public API

use shop_floor::backup::{export_backup, restore_append, restore_replace};
use shop_floor::flatfile::{export_delimited, parse_delimited};
use shop_floor::orders::OrderBook;
use shop_floor::orders::actions::{ActionContext, AppendRecordsAction, RegisterOrderAction};
use shared::models::order::{OrderDraft, OrderStatus};

fn ctx() -> ActionContext {
    ActionContext::on("2026-08-06")
}

fn seeded_book(n: usize) -> OrderBook {
    let book = OrderBook::new(vec![]);
    for i in 0..n {
        book.apply_with(
            &RegisterOrderAction {
                draft: OrderDraft {
                    client: "客户A".to_string(),
                    product: format!("零件{i}"),
                    quantity: 1.0 + i as f64,
                    unit_price: 2.0,
                    ..OrderDraft::default()
                },
            },
            &ctx(),
        )
        .unwrap();
    }
    book
}

#[test]
fn delimited_import_flows_into_the_book_without_dedup() {
    let book = seeded_book(1);
    let input = "\
日期,客户,品名,加工内容,数量,单位,单价,样品,备注
2026-08-01,客户B,轴套,磨削,20,kg,15,否,
2026-08-01,客户B,轴套,磨削,20,kg,15,否,
";
    let imported = parse_delimited(input, "2026-08-06").unwrap();
    assert_eq!(imported.len(), 2);

    let outcome = book
        .apply_with(
            &AppendRecordsAction {
                records: imported,
                dedup_by_id: false,
            },
            &ctx(),
        )
        .unwrap();
    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.dropped, 0);

    // Identical rows stay duplicated: a documented limitation of plain
    // file import, not something the engine fixes silently.
    let snapshot = book.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.iter().all(|r| r.quantity > 0.0));
    assert_eq!(
        snapshot
            .iter()
            .filter(|r| r.status == OrderStatus::Inbound)
            .count(),
        3
    );
}

#[test]
fn backup_append_obeys_the_dedup_law() {
    // store of size S=4; backup of size B=3 sharing D=2 ids
    let book = seeded_book(4);
    let snapshot = book.snapshot();

    let mut backup_records: Vec<_> = snapshot[..2].to_vec();
    backup_records.extend(seeded_book(1).snapshot().iter().cloned());
    let backup = export_backup(&backup_records);

    let before = book.snapshot();
    let outcome = restore_append(&book, &backup).unwrap();
    assert_eq!(outcome.dropped, 2);
    assert_eq!(book.snapshot().len(), 4 + (3 - 2));

    // No existing record was altered by the merge.
    for record in before.iter() {
        assert_eq!(
            book.snapshot().iter().find(|r| r.id == record.id),
            Some(record)
        );
    }
}

#[test]
fn backup_replace_discards_the_current_set() {
    let book = seeded_book(3);
    let other = seeded_book(1);
    let backup = export_backup(&other.snapshot());

    let count = restore_replace(&book, &backup).unwrap();
    assert_eq!(count, 1);
    assert_eq!(book.snapshot().len(), 1);
}

#[test]
fn malformed_backup_applies_zero_records() {
    let book = seeded_book(2);
    for raw in ["{}", "\"records\"", "[{\"id\": 1}]", "not json"] {
        assert!(restore_append(&book, raw).is_err(), "payload {raw:?}");
        assert_eq!(book.snapshot().len(), 2);
    }
}

#[test]
fn export_then_reimport_preserves_descriptive_fields() {
    let book = seeded_book(2);
    let exported = export_delimited(&book.snapshot()).unwrap();
    let reimported = parse_delimited(&exported, "2026-08-06").unwrap();

    assert_eq!(reimported.len(), 2);
    let snapshot = book.snapshot();
    for (original, imported) in snapshot.iter().zip(&reimported) {
        assert_eq!(original.client, imported.client);
        assert_eq!(original.product, imported.product);
        assert_eq!(original.quantity, imported.quantity);
        // workflow state resets on plain import
        assert_eq!(imported.status, OrderStatus::Inbound);
        assert_ne!(original.id, imported.id);
    }
}
