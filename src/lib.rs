//! dashgrid lays out dashboard widgets on a column grid and reorders
//! capacity-bounded card trays.
//!
//! # Engines
//!
//! 1. **Placement**: `[WidgetConfig] + columns -> [GridLayoutItem]`
//!    ([`generate_layout`]). Stored positions that still fit are kept, colliding
//!    ones are repacked, and everything else is packed first-fit at half-cell
//!    granularity.
//! 2. **Tray reorder**: `[T] + (from, to, capacity) -> [T]` ([`reorder_bounded`]).
//!    A single drag-and-drop move over a list truncated to its capacity.
//!
//! Both engines are pure: they borrow their input, never fail, and always return
//! freshly allocated results. Anomalous input (missing sizes, stale positions,
//! out-of-range indices) is absorbed into a deterministic best-effort result.
//!
//! The [`Dashboard`] document wraps both engines for callers holding the whole
//! store snapshot as JSON; it is also what the `dashgrid` binary operates on.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod dashboard;
mod foundation;
mod layout;
mod model;
mod tray;

pub use dashboard::doc::{Dashboard, TRAY_WIDGET_KIND};
pub use foundation::core::{GridResolution, ScaledRect};
pub use foundation::error::{GridError, GridResult};
pub use layout::placement::{LayoutOpts, generate_layout, generate_layout_with};
pub use layout::responsive::ColumnBreakpoints;
pub use model::nav::{NavGroup, NavItem};
pub use model::widget::{GridLayoutItem, WidgetConfig};
pub use tray::reorder::{clamp_index, reorder_bounded, reorder_tray_cards};
