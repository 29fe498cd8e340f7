use crate::foundation::error::{GridError, GridResult};

/// Placement granularity: how many scan steps make up one grid cell.
///
/// The dashboard places widgets on half-cell boundaries, so the default is
/// two steps per cell. All occupancy bookkeeping happens in integer
/// "scaled cells" (one step each); values are converted to and from cell
/// units only at the engine boundary.
///
/// Serializes as the bare `steps_per_cell` number; deserializing goes through
/// [`GridResolution::new`], so a zero resolution is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridResolution {
    steps_per_cell: u32, // must be > 0
}

impl Default for GridResolution {
    fn default() -> Self {
        Self::HALF_CELL
    }
}

impl GridResolution {
    /// Half-cell granularity (step = 0.5 cell).
    pub const HALF_CELL: Self = Self { steps_per_cell: 2 };

    /// Whole-cell granularity (step = 1 cell).
    pub const WHOLE_CELL: Self = Self { steps_per_cell: 1 };

    /// Upper bound, in scaled cells, for any position, size, or grid width.
    ///
    /// Stored positions beyond it are treated as absent and sizes beyond it
    /// are clamped to it, so rectangle edges never overflow and one widget
    /// cannot make the occupancy grid arbitrarily tall.
    pub const MAX_SCALED_EXTENT: u32 = 1 << 14;

    /// Build a resolution with `steps_per_cell` scan steps per grid cell.
    pub fn new(steps_per_cell: u32) -> GridResult<Self> {
        if steps_per_cell == 0 {
            return Err(GridError::validation(
                "grid resolution steps_per_cell must be > 0",
            ));
        }
        Ok(Self { steps_per_cell })
    }

    /// Number of scan steps per grid cell.
    pub fn steps_per_cell(self) -> u32 {
        self.steps_per_cell
    }

    /// Convert a cell-unit value to scaled cells.
    ///
    /// Returns `None` for non-finite values, for values that round below
    /// zero, and for values above [`GridResolution::MAX_SCALED_EXTENT`].
    pub fn to_scaled(self, value: f64) -> Option<u32> {
        if !value.is_finite() {
            return None;
        }
        let scaled = (value * f64::from(self.steps_per_cell)).round();
        if scaled < 0.0 || scaled > f64::from(Self::MAX_SCALED_EXTENT) {
            return None;
        }
        Some(scaled as u32)
    }

    /// Convert scaled cells back to cell units.
    pub fn to_cells(self, scaled: u32) -> f64 {
        f64::from(scaled) / f64::from(self.steps_per_cell)
    }

    /// Width of a `columns`-wide grid in scaled cells, capped at
    /// [`GridResolution::MAX_SCALED_EXTENT`].
    pub fn scaled_columns(self, columns: u32) -> u32 {
        columns
            .saturating_mul(self.steps_per_cell)
            .min(Self::MAX_SCALED_EXTENT)
    }
}

impl TryFrom<u32> for GridResolution {
    type Error = GridError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GridResolution> for u32 {
    fn from(value: GridResolution) -> Self {
        value.steps_per_cell
    }
}

/// Axis-aligned rectangle in scaled-cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScaledRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width, at least one step for anything the engine places.
    pub w: u32,
    /// Height, at least one step for anything the engine places.
    pub h: u32,
}

impl ScaledRect {
    /// Build a rectangle from its origin and size.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle whose right and bottom edges are representable.
    pub fn checked(x: u32, y: u32, w: u32, h: u32) -> Option<Self> {
        x.checked_add(w)?;
        y.checked_add(h)?;
        Some(Self { x, y, w, h })
    }

    /// Exclusive right edge.
    pub fn right(self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
