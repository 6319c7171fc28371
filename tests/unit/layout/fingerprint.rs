use super::*;
use crate::{PhotoItem, foundation::core::ColumnCount, layout::packer::pack_buckets};

fn photos() -> Vec<PhotoItem> {
    vec![
        PhotoItem::new("a.jpg", 0.8),
        PhotoItem::new("b.jpg", 1.5),
        PhotoItem::new("c.jpg", 1.0),
    ]
}

#[test]
fn same_layout_same_fingerprint() {
    let a = fingerprint_buckets(&pack_buckets(&photos(), ColumnCount::clamped(2)));
    let b = fingerprint_buckets(&pack_buckets(&photos(), ColumnCount::clamped(2)));
    assert_eq!(a, b);
    assert_eq!(a.to_string().len(), 32);
}

#[test]
fn column_count_changes_fingerprint() {
    let two = fingerprint_buckets(&pack_buckets(&photos(), ColumnCount::clamped(2)));
    let three = fingerprint_buckets(&pack_buckets(&photos(), ColumnCount::clamped(3)));
    assert_ne!(two, three);
}

#[test]
fn trailing_empty_column_changes_fingerprint() {
    let one = vec![PhotoItem::new("a.jpg", 1.0)];
    let k1 = fingerprint_buckets(&pack_buckets(&one, ColumnCount::clamped(1)));
    let k2 = fingerprint_buckets(&pack_buckets(&one, ColumnCount::clamped(2)));
    assert_ne!(k1, k2);
}

#[test]
fn source_boundaries_are_hashed() {
    let split_a = vec![ColumnBucket {
        photos: vec![PhotoItem::new("ab", 1.0), PhotoItem::new("c", 1.0)],
        total_aspect_ratio: 2.0,
    }];
    let split_b = vec![ColumnBucket {
        photos: vec![PhotoItem::new("a", 1.0), PhotoItem::new("bc", 1.0)],
        total_aspect_ratio: 2.0,
    }];
    assert_ne!(fingerprint_buckets(&split_a), fingerprint_buckets(&split_b));
}

#[test]
fn swapping_photos_within_a_column_changes_fingerprint() {
    let bucket = |first: &str, second: &str| {
        vec![ColumnBucket {
            photos: vec![PhotoItem::new(first, 1.0), PhotoItem::new(second, 1.0)],
            total_aspect_ratio: 2.0,
        }]
    };
    let ab = fingerprint_buckets(&bucket("a.jpg", "b.jpg"));
    let ba = fingerprint_buckets(&bucket("b.jpg", "a.jpg"));
    assert_ne!(ab, ba);
}

#[test]
fn moving_a_photo_across_columns_changes_fingerprint() {
    let col = |srcs: &[&str]| ColumnBucket {
        photos: srcs.iter().map(|s| PhotoItem::new(*s, 1.0)).collect(),
        total_aspect_ratio: srcs.len() as f64,
    };
    let left_heavy = vec![col(&["a.jpg", "b.jpg"]), col(&["c.jpg"])];
    let right_heavy = vec![col(&["a.jpg"]), col(&["b.jpg", "c.jpg"])];
    assert_ne!(
        fingerprint_buckets(&left_heavy),
        fingerprint_buckets(&right_heavy)
    );
}
