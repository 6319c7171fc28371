use crate::{
    catalog::model::PhotoItem,
    foundation::core::ColumnCount,
    layout::{
        breakpoints::Breakpoints,
        fingerprint::{LayoutFingerprint, fingerprint_buckets},
        packer::{ColumnBucket, pack_buckets},
        placement::{MasonryLayout, place_columns},
    },
};

/// Pull-based host accessor for one gallery on a page.
///
/// The host measures its container, reports the width with
/// [`GalleryView::observe_width`], and re-renders from [`GalleryView::packed`]
/// whenever that call returns `true`. Nothing is cached: every accessor
/// re-packs from the borrowed photos.
#[derive(Clone, Debug)]
pub struct GalleryView<'a> {
    photos: &'a [PhotoItem],
    breakpoints: Breakpoints,
    width_px: Option<f64>,
}

impl<'a> GalleryView<'a> {
    /// View over `photos` that has not been measured yet.
    pub fn new(photos: &'a [PhotoItem], breakpoints: Breakpoints) -> Self {
        Self {
            photos,
            breakpoints,
            width_px: None,
        }
    }

    /// Record a container width; returns `true` when the column count changed.
    pub fn observe_width(&mut self, width_px: f64) -> bool {
        let before = self.columns();
        self.width_px = Some(width_px);
        let after = self.columns();
        if before != after {
            tracing::debug!(width_px, from = %before, to = %after, "gallery column count changed");
        }
        before != after
    }

    /// Last observed container width.
    pub fn width_px(&self) -> Option<f64> {
        self.width_px
    }

    /// Column count for the last observed width (the fallback before any).
    pub fn columns(&self) -> ColumnCount {
        match self.width_px {
            Some(w) => self.breakpoints.columns_for_width(w),
            None => self.breakpoints.fallback,
        }
    }

    /// Photos being laid out.
    pub fn photos(&self) -> &'a [PhotoItem] {
        self.photos
    }

    /// Packed columns for the current column count.
    pub fn buckets(&self) -> Vec<ColumnBucket> {
        pack_buckets(self.photos, self.columns())
    }

    /// Flat render order for a CSS multi-column container.
    pub fn packed(&self) -> Vec<PhotoItem> {
        self.buckets().into_iter().flat_map(|b| b.photos).collect()
    }

    /// Fingerprint of the current packed layout.
    pub fn fingerprint(&self) -> LayoutFingerprint {
        fingerprint_buckets(&self.buckets())
    }

    /// Absolute masonry geometry at the observed width.
    ///
    /// Before any width is observed the container is treated as zero wide.
    pub fn masonry(&self, gap_px: f64) -> MasonryLayout {
        place_columns(&self.buckets(), self.width_px.unwrap_or(0.0), gap_px)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/view.rs"]
mod tests;
