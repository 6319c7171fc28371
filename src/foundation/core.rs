pub use kurbo::{Point, Rect, Size};

/// Upper bound on the number of columns a layout will allocate.
pub const MAX_COLUMNS: usize = 1024;

/// Effective column count of a gallery layout, always in `1..=MAX_COLUMNS`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "i64", into = "u32")]
pub struct ColumnCount(u32);

impl ColumnCount {
    /// A single column.
    pub const ONE: Self = Self(1);

    /// Clamp a raw, possibly unmeasured column count into the valid range.
    ///
    /// Values below one (including negatives reported by a layout that has not
    /// settled yet) become a single column.
    pub fn clamped(raw: i64) -> Self {
        let max = MAX_COLUMNS as i64;
        Self(raw.clamp(1, max) as u32)
    }

    /// Column count as an index-friendly `usize`.
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for ColumnCount {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<ColumnCount> for u32 {
    fn from(value: ColumnCount) -> Self {
        value.0
    }
}

impl std::fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
