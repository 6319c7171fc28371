//! Column packing and the geometry built on top of it.

pub(crate) mod breakpoints;
pub(crate) mod fingerprint;
pub(crate) mod packer;
pub(crate) mod placement;
