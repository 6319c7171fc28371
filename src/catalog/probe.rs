use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;

use crate::{
    catalog::model::{PhotoCollection, PhotoItem},
    foundation::error::{FolioError, FolioResult},
};

/// Decimal places kept when baking an aspect ratio into the catalog.
const ASPECT_RATIO_DECIMALS: i32 = 4;

/// Normalize a relative photo path to forward slashes without `.` segments.
pub fn normalize_rel_path(source: &str) -> FolioResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FolioError::validation("photo paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FolioError::validation("photo paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(FolioError::validation("photo path must contain a file name"));
    }
    Ok(out.join("/"))
}

/// Read an image header under `root` and bake its aspect ratio.
///
/// The resulting `src` is `rel` appended to `url_prefix` (e.g. `/photos/lisbon`).
pub fn probe_photo(root: &Path, rel: &str, url_prefix: &str) -> FolioResult<PhotoItem> {
    let rel = normalize_rel_path(rel)?;
    let path = root.join(&rel);
    let (width, height) = image::image_dimensions(&path)
        .with_context(|| format!("read image dimensions '{}'", path.display()))?;
    if width == 0 || height == 0 {
        return Err(FolioError::catalog(format!(
            "image '{}' has zero size ({width}x{height})",
            path.display()
        )));
    }

    let scale = 10f64.powi(ASPECT_RATIO_DECIMALS);
    let aspect_ratio = (f64::from(width) / f64::from(height) * scale).round() / scale;
    Ok(PhotoItem::new(join_src(url_prefix, &rel), aspect_ratio))
}

/// Probe every image file directly inside `dir` into a collection.
///
/// Files are taken in file-name order; anything the `image` crate does not
/// recognize by extension is skipped.
#[tracing::instrument(skip(url_prefix))]
pub fn probe_dir(
    dir: &Path,
    name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    url_prefix: &str,
) -> FolioResult<PhotoCollection> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| FolioError::catalog(format!("read dir '{}': {e}", dir.display())))?;

    let mut files = Vec::<String>::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| FolioError::catalog(format!("read dir '{}': {e}", dir.display())))?;
        let path = entry.path();
        if !path.is_file() || image::ImageFormat::from_path(&path).is_err() {
            continue;
        }
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(file_name.to_string());
        } else {
            tracing::warn!(path = %path.display(), "skipping non-UTF-8 file name");
        }
    }
    files.sort();

    let mut photos = Vec::with_capacity(files.len());
    for file in &files {
        photos.push(probe_photo(dir, file, url_prefix)?);
    }
    tracing::debug!(photos = photos.len(), "probed collection");

    let collection = PhotoCollection {
        name: name.to_string(),
        start_date,
        end_date,
        photos,
    };
    collection.validate()?;
    Ok(collection)
}

fn join_src(url_prefix: &str, rel: &str) -> String {
    let prefix = url_prefix.trim_end_matches('/');
    if prefix.is_empty() {
        rel.to_string()
    } else {
        format!("{prefix}/{rel}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/probe.rs"]
mod tests;
