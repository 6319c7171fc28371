//! Static photo catalog: records, JSON loading, boundary validation and probing.

pub(crate) mod model;
pub(crate) mod probe;
