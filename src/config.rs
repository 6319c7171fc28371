use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{FolioError, FolioResult},
    gallery::batch::LayoutThreading,
    layout::breakpoints::Breakpoints,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Gallery presentation settings shared by the view, the batch layout and the CLI.
///
/// Every field is optional in JSON; missing fields take the [`Default`] values.
pub struct GalleryConfig {
    /// Width to column-count mapping.
    #[serde(default)]
    pub breakpoints: Breakpoints,
    /// Gap between columns and between stacked photos, in pixels.
    #[serde(default = "default_gap_px")]
    pub gap_px: f64,
    /// Worker threads for batch layout (`None` = rayon default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

fn default_gap_px() -> f64 {
    8.0
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            gap_px: default_gap_px(),
            threads: None,
        }
    }
}

impl GalleryConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Open and parse a config JSON file.
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let f = File::open(path)
            .map_err(|e| FolioError::catalog(format!("open config '{}': {e}", path.display())))?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }

    /// Validate value ranges.
    pub fn validate(&self) -> FolioResult<()> {
        self.breakpoints.validate()?;
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(FolioError::validation("gapPx must be finite and >= 0"));
        }
        if self.threads == Some(0) {
            return Err(FolioError::validation("threads must be >= 1 when set"));
        }
        Ok(())
    }

    /// Threading options for [`crate::layout_catalog`].
    pub fn threading(&self) -> LayoutThreading {
        LayoutThreading {
            threads: self.threads,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
