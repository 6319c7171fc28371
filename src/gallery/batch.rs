use rayon::prelude::*;

use crate::{
    catalog::model::{Catalog, PhotoCollection},
    foundation::{
        core::ColumnCount,
        error::{FolioError, FolioResult},
    },
    layout::{
        fingerprint::{LayoutFingerprint, fingerprint_buckets},
        packer::pack_buckets,
    },
};

/// Thread-pool options for [`layout_catalog`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutThreading {
    /// Worker count; `None` lets rayon decide. `Some(0)` is rejected.
    pub threads: Option<usize>,
}

/// One collection packed at one column count.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionLayout {
    /// Collection name.
    pub collection: String,
    /// Effective (clamped) column count.
    pub columns: ColumnCount,
    /// Photo sources in render order.
    pub order: Vec<String>,
    /// Number of photos in each column; consecutive runs of `order`.
    pub column_lengths: Vec<usize>,
    /// Summed aspect ratio of each column.
    pub column_totals: Vec<f64>,
    /// Fingerprint of this layout.
    pub fingerprint: LayoutFingerprint,
}

/// Packed layouts for a whole catalog, ordered by collection name, then by requested column count.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CatalogLayout {
    /// Every computed layout.
    pub layouts: Vec<CollectionLayout>,
}

impl CatalogLayout {
    /// Find the layout of `collection` at `columns`.
    pub fn get(&self, collection: &str, columns: ColumnCount) -> Option<&CollectionLayout> {
        self.layouts
            .iter()
            .find(|l| l.collection == collection && l.columns == columns)
    }
}

/// Pack every collection for every requested column count on a rayon pool.
///
/// Output equals [`layout_catalog_serial`] for the same input.
#[tracing::instrument(skip(catalog))]
pub fn layout_catalog(
    catalog: &Catalog,
    column_counts: &[i64],
    threading: &LayoutThreading,
) -> FolioResult<CatalogLayout> {
    let pool = build_thread_pool(threading.threads)?;
    let jobs = jobs(catalog, column_counts);

    let layouts = pool.install(|| {
        jobs.par_iter()
            .map(|(collection, columns)| layout_one(collection, *columns))
            .collect::<Vec<_>>()
    });
    tracing::debug!(layouts = layouts.len(), "catalog layout finished");
    Ok(CatalogLayout { layouts })
}

/// Same as [`layout_catalog`] on the calling thread.
pub fn layout_catalog_serial(catalog: &Catalog, column_counts: &[i64]) -> CatalogLayout {
    let layouts = jobs(catalog, column_counts)
        .into_iter()
        .map(|(collection, columns)| layout_one(collection, columns))
        .collect();
    CatalogLayout { layouts }
}

fn jobs<'a>(
    catalog: &'a Catalog,
    column_counts: &[i64],
) -> Vec<(&'a PhotoCollection, ColumnCount)> {
    let mut out = Vec::with_capacity(catalog.collections().len() * column_counts.len());
    for collection in catalog.collections() {
        for &raw in column_counts {
            out.push((collection, ColumnCount::clamped(raw)));
        }
    }
    out
}

fn layout_one(collection: &PhotoCollection, columns: ColumnCount) -> CollectionLayout {
    let buckets = pack_buckets(&collection.photos, columns);
    CollectionLayout {
        collection: collection.name.clone(),
        columns,
        order: buckets
            .iter()
            .flat_map(|b| b.photos.iter().map(|p| p.src.clone()))
            .collect(),
        column_lengths: buckets.iter().map(|b| b.photos.len()).collect(),
        column_totals: buckets.iter().map(|b| b.total_aspect_ratio).collect(),
        fingerprint: fingerprint_buckets(&buckets),
    }
}

fn build_thread_pool(threads: Option<usize>) -> FolioResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FolioError::validation(
            "layout threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FolioError::layout(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/batch.rs"]
mod tests;
