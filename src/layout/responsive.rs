#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<(u32, u32)>", into = "Vec<(u32, u32)>")]
/// Viewport-width thresholds that pick the grid's column count.
///
/// Each entry is `(min_width_px, columns)`. The entry with the largest
/// threshold not above the viewport width wins; narrower viewports get the
/// first entry's column count.
pub struct ColumnBreakpoints {
    entries: Vec<(u32, u32)>,
}

impl Default for ColumnBreakpoints {
    fn default() -> Self {
        Self::new(vec![(0, 2), (640, 4), (1024, 6), (1440, 8), (1920, 10)])
    }
}

impl ColumnBreakpoints {
    /// Build breakpoints from `(min_width_px, columns)` pairs.
    ///
    /// Entries are sorted by threshold, zero-column entries are dropped, and
    /// for a repeated threshold the last entry wins. An empty table falls
    /// back to a single one-column entry.
    pub fn new(mut entries: Vec<(u32, u32)>) -> Self {
        entries.retain(|&(_, columns)| columns > 0);
        entries.reverse();
        entries.sort_by_key(|&(min_width, _)| min_width);
        entries.dedup_by_key(|&mut (min_width, _)| min_width);
        if entries.is_empty() {
            entries.push((0, 1));
        }
        Self { entries }
    }

    /// Column count for a viewport `width_px` wide.
    pub fn columns_for_width(&self, width_px: u32) -> u32 {
        self.entries
            .iter()
            .rev()
            .find(|&&(min_width, _)| min_width <= width_px)
            .or_else(|| self.entries.first())
            .map_or(1, |&(_, columns)| columns)
    }

    /// Sanitized `(min_width_px, columns)` entries in ascending order.
    pub fn entries(&self) -> &[(u32, u32)] {
        &self.entries
    }
}

impl From<Vec<(u32, u32)>> for ColumnBreakpoints {
    fn from(value: Vec<(u32, u32)>) -> Self {
        Self::new(value)
    }
}

impl From<ColumnBreakpoints> for Vec<(u32, u32)> {
    fn from(value: ColumnBreakpoints) -> Self {
        value.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/responsive.rs"]
mod tests;
