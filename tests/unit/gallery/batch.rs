use super::*;
use crate::PhotoItem;
use chrono::NaiveDate;

fn catalog() -> Catalog {
    let date = |s: &str| -> NaiveDate { s.parse().unwrap() };
    Catalog::from_collections(vec![
        PhotoCollection {
            name: "Oslo".to_string(),
            start_date: date("2022-06-01"),
            end_date: date("2022-06-04"),
            photos: vec![
                PhotoItem::new("A", 1.0),
                PhotoItem::new("B", 1.0),
                PhotoItem::new("C", 1.0),
                PhotoItem::new("D", 1.0),
            ],
        },
        PhotoCollection {
            name: "Bergen".to_string(),
            start_date: date("2022-06-05"),
            end_date: date("2022-06-06"),
            photos: vec![
                PhotoItem::new("x", 0.5),
                PhotoItem::new("y", 3.0),
                PhotoItem::new("z", 0.5),
            ],
        },
    ])
    .unwrap()
}

#[test]
fn layouts_are_ordered_by_collection_then_request() {
    let out = layout_catalog_serial(&catalog(), &[2, 1]);
    let keys: Vec<(&str, usize)> = out
        .layouts
        .iter()
        .map(|l| (l.collection.as_str(), l.columns.get()))
        .collect();
    assert_eq!(
        keys,
        [("Bergen", 2), ("Bergen", 1), ("Oslo", 2), ("Oslo", 1)]
    );
}

#[test]
fn layout_records_column_runs() {
    let out = layout_catalog_serial(&catalog(), &[2]);
    let bergen = out.get("Bergen", ColumnCount::clamped(2)).unwrap();
    assert_eq!(bergen.order, ["x", "z", "y"]);
    assert_eq!(bergen.column_lengths, [2, 1]);
    assert_eq!(bergen.column_totals, [1.0, 3.0]);
}

#[test]
fn degenerate_requests_are_clamped() {
    let out = layout_catalog_serial(&catalog(), &[0]);
    assert!(out.get("Oslo", ColumnCount::ONE).is_some());
}

#[test]
fn parallel_matches_serial() {
    let cat = catalog();
    let serial = layout_catalog_serial(&cat, &[1, 2, 3, 4]);
    let parallel = layout_catalog(
        &cat,
        &[1, 2, 3, 4],
        &LayoutThreading { threads: Some(3) },
    )
    .unwrap();
    assert_eq!(parallel, serial);
}

#[test]
fn zero_threads_is_rejected() {
    let err = layout_catalog(&catalog(), &[2], &LayoutThreading { threads: Some(0) }).unwrap_err();
    assert!(matches!(err, FolioError::Validation(_)));
}
