//! Serde data model for the dashboard state handed over by the store.

pub(crate) mod nav;
pub(crate) mod widget;
