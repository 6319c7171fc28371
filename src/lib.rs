//! Folio lays out a static photo catalog as a balanced masonry gallery.
//!
//! The catalog is a fixed, author-curated set of dated collections, each a list of
//! photos with a pre-baked aspect ratio. The gallery shows a collection in `N`
//! columns, and `N` follows the container width.
//!
//! # Pieces
//!
//! 1. **Catalog**: [`Catalog`] loads the JSON catalog; [`Catalog::validate`] rejects bad
//!    dates, duplicate sources and non-positive aspect ratios at the boundary.
//! 2. **Pack**: [`pack`] / [`pack_buckets`] distribute photos over columns so that each
//!    column's summed aspect ratio is close to the average. Pure and total: any input,
//!    any column count, no panics.
//! 3. **View**: [`GalleryView`] maps a measured width to a column count through
//!    [`Breakpoints`] and re-packs on demand; [`place_columns`] turns columns into rects.
//! 4. **Batch**: [`layout_catalog`] packs every collection for a set of column counts on
//!    a rayon pool, for static output.
//!
//! ```
//! use folio::{PhotoItem, pack};
//!
//! let photos = vec![
//!     PhotoItem::new("a.jpg", 0.5),
//!     PhotoItem::new("b.jpg", 0.5),
//!     PhotoItem::new("c.jpg", 3.0),
//! ];
//! let order: Vec<_> = pack(&photos, 2).into_iter().map(|p| p.src).collect();
//! assert_eq!(order, ["a.jpg", "b.jpg", "c.jpg"]);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod config;
mod foundation;
mod gallery;
mod layout;

pub use catalog::model::{Catalog, MIN_ASPECT_RATIO, PhotoCollection, PhotoItem};
pub use catalog::probe::{normalize_rel_path, probe_dir, probe_photo};
pub use config::GalleryConfig;
pub use foundation::core::{ColumnCount, MAX_COLUMNS, Point, Rect, Size};
pub use foundation::error::{FolioError, FolioResult};
pub use gallery::batch::{
    CatalogLayout, CollectionLayout, LayoutThreading, layout_catalog, layout_catalog_serial,
};
pub use gallery::view::GalleryView;
pub use layout::breakpoints::{Breakpoint, Breakpoints};
pub use layout::fingerprint::{LayoutFingerprint, fingerprint_buckets};
pub use layout::packer::{BalanceReport, ColumnBucket, pack, pack_buckets};
pub use layout::placement::{MasonryLayout, PlacedPhoto, place_columns};
