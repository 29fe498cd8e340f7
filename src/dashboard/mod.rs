//! Dashboard JSON document: the store snapshot the engines run over.

pub(crate) mod doc;
