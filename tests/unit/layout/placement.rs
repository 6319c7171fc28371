use super::*;
use crate::{PhotoItem, foundation::core::ColumnCount, layout::packer::pack_buckets};

#[test]
fn columns_share_width_minus_gaps() {
    let photos = vec![
        PhotoItem::new("A", 1.0),
        PhotoItem::new("B", 1.0),
        PhotoItem::new("C", 1.0),
        PhotoItem::new("D", 1.0),
    ];
    let buckets = pack_buckets(&photos, ColumnCount::clamped(2));
    let layout = place_columns(&buckets, 210.0, 10.0);

    assert_eq!(layout.column_width, 100.0);
    assert_eq!(layout.column_heights, vec![210.0, 210.0]);
    assert_eq!(layout.size(), Size::new(210.0, 210.0));

    let rects: Vec<(&str, Rect)> = layout
        .photos
        .iter()
        .map(|p| (p.src.as_str(), p.rect))
        .collect();
    assert_eq!(
        rects,
        vec![
            ("A", Rect::new(0.0, 0.0, 100.0, 100.0)),
            ("B", Rect::new(0.0, 110.0, 100.0, 210.0)),
            ("C", Rect::new(110.0, 0.0, 210.0, 100.0)),
            ("D", Rect::new(110.0, 110.0, 210.0, 210.0)),
        ]
    );
}

#[test]
fn heights_follow_aspect_ratio() {
    let photos = vec![PhotoItem::new("wide", 2.0), PhotoItem::new("tall", 0.5)];
    let buckets = pack_buckets(&photos, ColumnCount::ONE);
    let layout = place_columns(&buckets, 100.0, 0.0);

    assert_eq!(layout.photos[0].src, "tall");
    assert_eq!(layout.photos[0].rect.height(), 200.0);
    assert_eq!(layout.photos[1].rect.height(), 50.0);
    assert_eq!(layout.photos[1].rect.y0, 200.0);
    assert_eq!(layout.column_heights, vec![250.0]);
}

#[test]
fn bad_ratios_and_widths_collapse_to_zero() {
    let photos = vec![PhotoItem::new("nan", f64::NAN), PhotoItem::new("neg", -1.0)];
    let buckets = pack_buckets(&photos, ColumnCount::ONE);
    let layout = place_columns(&buckets, f64::NAN, -5.0);
    assert_eq!(layout.column_width, 0.0);
    assert!(layout.photos.iter().all(|p| p.rect.height() == 0.0));
}

#[test]
fn no_buckets_is_an_empty_layout() {
    let layout = place_columns(&[], 300.0, 8.0);
    assert!(layout.photos.is_empty());
    assert_eq!(layout.size(), Size::new(300.0, 0.0));
}
