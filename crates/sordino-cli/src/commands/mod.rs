//! CLI command implementations.

pub mod design;
pub mod params;
pub mod process;
