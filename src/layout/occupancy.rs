use std::collections::BTreeMap;

use crate::foundation::core::ScaledRect;

/// Which scaled cells are taken during one placement pass.
///
/// Rows are stored sparsely and grow on demand in both directions, so the
/// grid never needs a height up front. Lives only for the duration of one
/// layout call.
#[derive(Clone, Debug, Default)]
pub(crate) struct OccupancyGrid {
    rows: BTreeMap<u32, Vec<bool>>,
}

impl OccupancyGrid {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether any scaled cell under `rect` is already occupied.
    pub(crate) fn is_occupied(&self, rect: ScaledRect) -> bool {
        let (x0, x1) = (rect.x as usize, rect.right() as usize);
        self.rows.range(rect.y..rect.bottom()).any(|(_, row)| {
            row.get(x0..x1.min(row.len()))
                .is_some_and(|cells| cells.iter().any(|&taken| taken))
        })
    }

    /// Mark every scaled cell under `rect` as occupied.
    pub(crate) fn occupy(&mut self, rect: ScaledRect) {
        let (x0, x1) = (rect.x as usize, rect.right() as usize);
        if x0 >= x1 {
            return;
        }
        for y in rect.y..rect.bottom() {
            let row = self.rows.entry(y).or_default();
            if row.len() < x1 {
                row.resize(x1, false);
            }
            row[x0..x1].fill(true);
        }
    }

    /// One past the last row holding an occupied cell.
    pub(crate) fn height(&self) -> u32 {
        self.rows
            .last_key_value()
            .map_or(0, |(y, _)| y.saturating_add(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/occupancy.rs"]
mod tests;
