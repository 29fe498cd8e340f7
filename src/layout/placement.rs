use crate::{
    foundation::core::{GridResolution, ScaledRect},
    layout::occupancy::OccupancyGrid,
    model::widget::{GridLayoutItem, WidgetConfig},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Constraints for one placement pass.
pub struct LayoutOpts {
    /// Grid width in cells. Zero is raised to one.
    pub columns: u32,
    /// Placement granularity.
    #[serde(default)]
    pub resolution: GridResolution,
}

impl LayoutOpts {
    /// Half-cell placement on a `columns`-wide grid.
    pub fn new(columns: u32) -> Self {
        Self {
            columns,
            resolution: GridResolution::default(),
        }
    }

    /// Replace the placement granularity.
    pub fn with_resolution(mut self, resolution: GridResolution) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Lay out `items` on a `columns`-wide grid at half-cell granularity.
///
/// See [`generate_layout_with`].
pub fn generate_layout(items: &[WidgetConfig], columns: u32) -> Vec<GridLayoutItem> {
    generate_layout_with(items, &LayoutOpts::new(columns))
}

#[tracing::instrument(skip(items), fields(count = items.len()))]
/// Lay out `items` without overlap, keeping valid stored positions.
///
/// Widgets whose stored position fits the current column count are placed
/// first, in input order. A stored position that collides with an earlier one
/// is dropped and the widget is packed like an unpositioned one. Everything
/// else is packed first-fit: scanning rows top to bottom and each row left to
/// right, one resolution step at a time.
///
/// The result holds one item per input widget, ordered as placed: kept
/// positions first, then packed widgets (originally unpositioned ones before
/// demoted ones, each in input order). Never fails; the same input always
/// yields the same layout.
pub fn generate_layout_with(items: &[WidgetConfig], opts: &LayoutOpts) -> Vec<GridLayoutItem> {
    let res = opts.resolution;
    let columns = if opts.columns == 0 {
        tracing::warn!("layout requested with zero columns; using 1");
        1
    } else {
        opts.columns
    };
    let grid_w = res.scaled_columns(columns);

    let mut positioned = Vec::<(&WidgetConfig, ScaledRect)>::new();
    let mut unpositioned = Vec::<&WidgetConfig>::new();
    for item in items {
        match stored_rect(item, res) {
            Some(rect) if rect.right() <= grid_w => positioned.push((item, rect)),
            _ => unpositioned.push(item),
        }
    }

    let mut grid = OccupancyGrid::new();
    let mut layout = Vec::with_capacity(items.len());
    let mut demoted = Vec::<&WidgetConfig>::new();

    for (item, rect) in positioned {
        if grid.is_occupied(rect) {
            tracing::debug!(
                id = %item.id,
                x = rect.x,
                y = rect.y,
                "stored position taken; repacking"
            );
            demoted.push(item);
            continue;
        }
        grid.occupy(rect);
        layout.push(to_layout_item(item, rect, res));
    }

    for item in unpositioned.into_iter().chain(demoted) {
        let (w, h) = packed_size(item, res, grid_w);
        let rect = first_fit(&grid, w, h, grid_w);
        grid.occupy(rect);
        layout.push(to_layout_item(item, rect, res));
    }

    tracing::debug!(placed = layout.len(), rows = grid.height(), "layout complete");
    layout
}

// `width()`/`height()` are finite and non-negative, so a failed conversion
// means the size is past the extent cap.
fn scaled_size(item: &WidgetConfig, res: GridResolution) -> (u32, u32) {
    let clamp = |cells: f64, axis: &'static str| match res.to_scaled(cells) {
        Some(scaled) => scaled.max(1),
        None => {
            tracing::warn!(
                id = %item.id,
                axis,
                size = cells,
                max = res.to_cells(GridResolution::MAX_SCALED_EXTENT),
                "widget size exceeds grid extent; clamping"
            );
            GridResolution::MAX_SCALED_EXTENT
        }
    };
    (clamp(item.width(), "width"), clamp(item.height(), "height"))
}

// Positions past the extent cap count as absent, so the widget is repacked.
fn stored_rect(item: &WidgetConfig, res: GridResolution) -> Option<ScaledRect> {
    let (x, y) = item.position()?;
    let (w, h) = scaled_size(item, res);
    ScaledRect::checked(res.to_scaled(x)?, res.to_scaled(y)?, w, h)
}

// Widgets wider than the grid would never fit; they are narrowed to the
// full grid width instead.
fn packed_size(item: &WidgetConfig, res: GridResolution, grid_w: u32) -> (u32, u32) {
    let (w, h) = scaled_size(item, res);
    if w > grid_w {
        tracing::warn!(
            id = %item.id,
            width = res.to_cells(w),
            columns = res.to_cells(grid_w),
            "widget wider than grid; clamping width"
        );
        return (grid_w, h);
    }
    (w, h)
}

// Terminates: every row at or below `grid.height()` is empty and
// `1 <= w <= grid_w`.
fn first_fit(grid: &OccupancyGrid, w: u32, h: u32, grid_w: u32) -> ScaledRect {
    let mut y = 0u32;
    loop {
        let mut x = 0u32;
        while x + w <= grid_w {
            let rect = ScaledRect::new(x, y, w, h);
            if !grid.is_occupied(rect) {
                return rect;
            }
            x += 1;
        }
        y += 1;
    }
}

fn to_layout_item(item: &WidgetConfig, rect: ScaledRect, res: GridResolution) -> GridLayoutItem {
    GridLayoutItem::new(
        item.clone(),
        res.to_cells(rect.x),
        res.to_cells(rect.y),
        res.to_cells(rect.w),
        res.to_cells(rect.h),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
