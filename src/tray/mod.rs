//! Drag reordering for capacity-bounded card trays.

pub(crate) mod reorder;
