use std::{
    collections::{BTreeMap, HashSet},
    fs::File,
    io::BufReader,
    path::Path,
};

use chrono::NaiveDate;

use crate::foundation::error::{FolioError, FolioResult};

/// Smallest aspect ratio (width / height) a catalog may declare.
pub const MIN_ASPECT_RATIO: f64 = 0.01;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// One photo in a collection.
///
/// The aspect ratio is pre-baked by the author (see [`crate::probe_photo`]) so
/// layout never has to decode the image.
pub struct PhotoItem {
    /// Image path or URL, unique within its collection.
    pub src: String,
    /// Width divided by height.
    pub aspect_ratio: f64,
}

impl PhotoItem {
    /// Build a photo record.
    pub fn new(src: impl Into<String>, aspect_ratio: f64) -> Self {
        Self {
            src: src.into(),
            aspect_ratio,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A named, dated group of photos (for example a trip).
pub struct PhotoCollection {
    /// Display label, also the catalog key.
    pub name: String,
    /// First day covered by the collection.
    pub start_date: NaiveDate,
    /// Last day covered by the collection (inclusive).
    pub end_date: NaiveDate,
    /// Photos in authoring order.
    pub photos: Vec<PhotoItem>,
}

impl PhotoCollection {
    /// Validate the date range and every photo record.
    pub fn validate(&self) -> FolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::validation("collection name must be non-empty"));
        }
        if self.start_date > self.end_date {
            return Err(FolioError::validation(format!(
                "collection '{}' has startDate {} after endDate {}",
                self.name, self.start_date, self.end_date
            )));
        }

        let mut seen = HashSet::<&str>::with_capacity(self.photos.len());
        for photo in &self.photos {
            if photo.src.trim().is_empty() {
                return Err(FolioError::validation(format!(
                    "collection '{}' has a photo with an empty src",
                    self.name
                )));
            }
            if !seen.insert(photo.src.as_str()) {
                return Err(FolioError::validation(format!(
                    "collection '{}' lists photo '{}' more than once",
                    self.name, photo.src
                )));
            }
            if !photo.aspect_ratio.is_finite() || photo.aspect_ratio < MIN_ASPECT_RATIO {
                return Err(FolioError::validation(format!(
                    "collection '{}' photo '{}' aspectRatio must be finite and >= {MIN_ASPECT_RATIO}",
                    self.name, photo.src
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CollectionEntry {
    start_date: NaiveDate,
    end_date: NaiveDate,
    photos: Vec<PhotoItem>,
}

type CatalogMap = BTreeMap<String, CollectionEntry>;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(into = "CatalogMap")]
/// The static, author-curated photo catalog.
///
/// On disk the catalog is a JSON object keyed by collection name:
///
/// ```json
/// { "Lisbon": { "startDate": "2023-04-02", "endDate": "2023-04-09",
///               "photos": [ { "src": "/photos/lisbon/1.jpg", "aspectRatio": 1.5 } ] } }
/// ```
///
/// A name that appears twice in the object is rejected rather than overwritten.
pub struct Catalog {
    collections: Vec<PhotoCollection>, // sorted by name
}

impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> serde::de::Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an object mapping collection names to collections")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut collections = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, e)) = map.next_entry::<String, CollectionEntry>()? {
                    collections.push(PhotoCollection {
                        name,
                        start_date: e.start_date,
                        end_date: e.end_date,
                        photos: e.photos,
                    });
                }
                Catalog::from_collections(collections).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

impl From<Catalog> for CatalogMap {
    fn from(catalog: Catalog) -> Self {
        catalog
            .collections
            .into_iter()
            .map(|c| {
                (
                    c.name,
                    CollectionEntry {
                        start_date: c.start_date,
                        end_date: c.end_date,
                        photos: c.photos,
                    },
                )
            })
            .collect()
    }
}

impl Catalog {
    /// Build a catalog from collections; names must be unique.
    pub fn from_collections(collections: Vec<PhotoCollection>) -> FolioResult<Self> {
        let mut collections = collections;
        collections.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(w) = collections.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(FolioError::validation(format!(
                "duplicate collection name '{}'",
                w[0].name
            )));
        }
        Ok(Self { collections })
    }

    /// Parse a catalog from JSON text. Call [`Catalog::validate`] before use.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a catalog from a JSON reader.
    pub fn from_reader(r: impl std::io::Read) -> FolioResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Open and parse a catalog JSON file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let f = File::open(path).map_err(|e| {
            FolioError::catalog(format!("open catalog '{}': {e}", path.display()))
        })?;
        let catalog = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(
            collections = catalog.collections.len(),
            photos = catalog.photo_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Serialize to pretty-printed JSON in the on-disk format.
    pub fn to_json_pretty(&self) -> FolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every collection.
    pub fn validate(&self) -> FolioResult<()> {
        for collection in &self.collections {
            collection.validate()?;
        }
        Ok(())
    }

    /// Collections ordered by name.
    pub fn collections(&self) -> &[PhotoCollection] {
        &self.collections
    }

    /// Collections newest first (by end date, then start date), ties by name.
    pub fn chronological(&self) -> Vec<&PhotoCollection> {
        let mut out: Vec<&PhotoCollection> = self.collections.iter().collect();
        out.sort_by(|a, b| {
            b.end_date
                .cmp(&a.end_date)
                .then(b.start_date.cmp(&a.start_date))
                .then(a.name.cmp(&b.name))
        });
        out
    }

    /// Look up a collection by name.
    pub fn get(&self, name: &str) -> Option<&PhotoCollection> {
        self.collections
            .binary_search_by(|c| c.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.collections[idx])
    }

    /// Total number of photos across collections.
    pub fn photo_count(&self) -> usize {
        self.collections.iter().map(|c| c.photos.len()).sum()
    }

    /// `true` if the catalog has no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
