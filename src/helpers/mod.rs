//! Container-level helpers shared by the format readers
pub(crate) mod xml;
pub(crate) mod zip;
