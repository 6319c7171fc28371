use crate::{
    foundation::core::{Point, Rect, Size},
    layout::packer::ColumnBucket,
};

/// A photo positioned inside the gallery container.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedPhoto {
    /// Photo source, as in the catalog.
    pub src: String,
    /// Column index the photo sits in.
    pub column: usize,
    /// Position and size in container pixels (origin top-left).
    pub rect: Rect,
}

/// Masonry geometry for one packed layout.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct MasonryLayout {
    /// Container width the layout was computed for.
    pub container_width: f64,
    /// Width of every column.
    pub column_width: f64,
    /// Rendered height of each column, gaps included.
    pub column_heights: Vec<f64>,
    /// Photos in bucket order.
    pub photos: Vec<PlacedPhoto>,
}

impl MasonryLayout {
    /// Bounding size of the whole gallery.
    pub fn size(&self) -> Size {
        let height = self.column_heights.iter().copied().fold(0.0, f64::max);
        Size::new(self.container_width, height)
    }
}

/// Lay packed buckets out as side-by-side columns.
///
/// Each column is `(container_width - gap * (columns - 1)) / columns` wide; photos
/// stack top to bottom at that width with `gap` between them. A photo whose
/// aspect ratio is not finite and positive gets a zero-height rect.
pub fn place_columns(buckets: &[ColumnBucket], container_width: f64, gap: f64) -> MasonryLayout {
    let columns = buckets.len();
    let gap = sanitize(gap);
    let container_width = sanitize(container_width);
    if columns == 0 {
        return MasonryLayout {
            container_width,
            ..MasonryLayout::default()
        };
    }

    let column_width = ((container_width - gap * (columns - 1) as f64) / columns as f64).max(0.0);

    let mut photos = Vec::with_capacity(buckets.iter().map(|b| b.photos.len()).sum());
    let mut column_heights = Vec::with_capacity(columns);
    for (column, bucket) in buckets.iter().enumerate() {
        let x = column as f64 * (column_width + gap);
        let mut y = 0.0;
        for (i, photo) in bucket.photos.iter().enumerate() {
            if i > 0 {
                y += gap;
            }
            let height = if photo.aspect_ratio.is_finite() && photo.aspect_ratio > 0.0 {
                column_width / photo.aspect_ratio
            } else {
                0.0
            };
            photos.push(PlacedPhoto {
                src: photo.src.clone(),
                column,
                rect: Rect::from_origin_size(Point::new(x, y), Size::new(column_width, height)),
            });
            y += height;
        }
        column_heights.push(y);
    }

    MasonryLayout {
        container_width,
        column_width,
        column_heights,
        photos,
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
