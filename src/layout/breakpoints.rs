use crate::foundation::{
    core::ColumnCount,
    error::{FolioError, FolioResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// From `min_width_px` upward, use `columns` columns.
pub struct Breakpoint {
    /// Smallest container width (CSS pixels) this step applies to.
    pub min_width_px: f64,
    /// Column count at and above `min_width_px`.
    pub columns: ColumnCount,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Responsive mapping from container width to column count.
///
/// Widths below the first step, and widths that have not been measured yet
/// (negative or non-finite), use `fallback`.
pub struct Breakpoints {
    /// Column count below the first step.
    #[serde(default)]
    pub fallback: ColumnCount,
    /// Steps in strictly increasing `min_width_px` order.
    pub steps: Vec<Breakpoint>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            fallback: ColumnCount::ONE,
            steps: vec![
                Breakpoint {
                    min_width_px: 640.0,
                    columns: ColumnCount::clamped(2),
                },
                Breakpoint {
                    min_width_px: 1024.0,
                    columns: ColumnCount::clamped(3),
                },
                Breakpoint {
                    min_width_px: 1536.0,
                    columns: ColumnCount::clamped(4),
                },
            ],
        }
    }
}

impl Breakpoints {
    /// A single fixed column count regardless of width.
    pub fn fixed(columns: ColumnCount) -> Self {
        Self {
            fallback: columns,
            steps: Vec::new(),
        }
    }

    /// Validate step ordering and widths.
    pub fn validate(&self) -> FolioResult<()> {
        let mut prev: Option<f64> = None;
        for step in &self.steps {
            if !step.min_width_px.is_finite() || step.min_width_px < 0.0 {
                return Err(FolioError::validation(
                    "breakpoint minWidthPx must be finite and >= 0",
                ));
            }
            if let Some(p) = prev
                && step.min_width_px <= p
            {
                return Err(FolioError::validation(
                    "breakpoint minWidthPx values must be strictly increasing",
                ));
            }
            prev = Some(step.min_width_px);
        }
        Ok(())
    }

    /// Column count for a measured container width.
    pub fn columns_for_width(&self, width_px: f64) -> ColumnCount {
        if !width_px.is_finite() || width_px < 0.0 {
            return self.fallback;
        }
        self.steps
            .iter()
            .rev()
            .find(|s| s.min_width_px <= width_px)
            .map_or(self.fallback, |s| s.columns)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/breakpoints.rs"]
mod tests;
