//! Small browser-facing helpers.

pub mod color_scheme;
pub mod datetime;
pub mod storage;
