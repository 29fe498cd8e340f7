//! Grid placement: occupancy bookkeeping, first-fit packing, and responsive
//! column selection.

pub(crate) mod occupancy;
pub(crate) mod placement;
pub(crate) mod responsive;
