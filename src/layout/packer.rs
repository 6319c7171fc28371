use crate::{catalog::model::PhotoItem, foundation::core::ColumnCount};

/// One column of a packed gallery: photos in rendering order plus their summed aspect ratio.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnBucket {
    /// Photos from top to bottom.
    pub photos: Vec<PhotoItem>,
    /// Sum of `aspect_ratio` over `photos`.
    pub total_aspect_ratio: f64,
}

impl ColumnBucket {
    fn push(&mut self, photo: PhotoItem) {
        self.total_aspect_ratio += photo.aspect_ratio;
        self.photos.push(photo);
    }

    /// Largest single aspect ratio in this bucket, `0.0` when empty.
    pub fn max_aspect_ratio(&self) -> f64 {
        self.photos
            .iter()
            .map(|p| p.aspect_ratio)
            .fold(0.0, f64::max)
    }
}

/// Reorder `photos` so that consecutive runs, one per column, have balanced aspect-ratio sums.
///
/// The result is a permutation of the input: bucket 0 in full, then bucket 1, and so
/// on. `num_columns < 1` is treated as a single column. See [`pack_buckets`].
pub fn pack(photos: &[PhotoItem], num_columns: i64) -> Vec<PhotoItem> {
    pack_buckets(photos, ColumnCount::clamped(num_columns))
        .into_iter()
        .flat_map(|b| b.photos)
        .collect()
}

/// Greedily distribute `photos` over `columns` buckets.
///
/// Photos are visited in ascending aspect-ratio order (stable, so equal ratios keep
/// their input order). Each one goes to the bucket whose new total lands closest to
/// `sum / columns`, considering only buckets still below that target while any
/// remain; ties go to the lowest index. A bucket therefore never ends more than one
/// photo's worth above the target.
///
/// Non-finite or non-positive ratios are not rejected; they skew the balance but
/// every photo is still placed exactly once.
pub fn pack_buckets(photos: &[PhotoItem], columns: ColumnCount) -> Vec<ColumnBucket> {
    let k = columns.get();
    let mut buckets = vec![ColumnBucket::default(); k];
    if photos.is_empty() {
        return buckets;
    }

    let target = photos.iter().map(|p| p.aspect_ratio).sum::<f64>() / k as f64;

    let mut order: Vec<&PhotoItem> = photos.iter().collect();
    order.sort_by(|a, b| a.aspect_ratio.total_cmp(&b.aspect_ratio));

    for photo in order {
        let idx = pick_bucket(&buckets, photo.aspect_ratio, target);
        buckets[idx].push(photo.clone());
    }

    tracing::trace!(
        columns = k,
        photos = photos.len(),
        target_per_column = target,
        "packed columns"
    );
    buckets
}

fn pick_bucket(buckets: &[ColumnBucket], aspect_ratio: f64, target: f64) -> usize {
    let has_room = buckets.iter().any(|b| b.total_aspect_ratio < target);

    let mut best: Option<(usize, f64)> = None;
    for (idx, bucket) in buckets.iter().enumerate() {
        if has_room && bucket.total_aspect_ratio >= target {
            continue;
        }
        let mut distance = (target - (bucket.total_aspect_ratio + aspect_ratio)).abs();
        if distance.is_nan() {
            distance = f64::INFINITY;
        }
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((idx, distance)),
        }
    }
    best.map_or(0, |(idx, _)| idx)
}

/// Summary of how evenly a set of buckets is balanced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    /// Ideal per-column total (`sum / columns`).
    pub target: f64,
    /// Each bucket's total, in bucket order.
    pub totals: Vec<f64>,
    /// Largest `total - target` over buckets (0 if none is above target).
    pub max_overshoot: f64,
    /// Largest `target - total` over buckets (0 if none is below target).
    pub max_undershoot: f64,
}

impl BalanceReport {
    /// Measure a packed bucket set.
    pub fn of(buckets: &[ColumnBucket]) -> Self {
        let totals: Vec<f64> = buckets.iter().map(|b| b.total_aspect_ratio).collect();
        let target = if totals.is_empty() {
            0.0
        } else {
            totals.iter().sum::<f64>() / totals.len() as f64
        };
        let max_overshoot = totals.iter().map(|t| t - target).fold(0.0, f64::max);
        let max_undershoot = totals.iter().map(|t| target - t).fold(0.0, f64::max);
        Self {
            target,
            totals,
            max_overshoot,
            max_undershoot,
        }
    }

    /// Spread between the tallest and shortest column.
    pub fn spread(&self) -> f64 {
        self.max_overshoot + self.max_undershoot
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/packer.rs"]
mod tests;
