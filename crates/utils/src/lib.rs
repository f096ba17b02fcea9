//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! Mostly formatting helpers used when summarising parsed solver data, such as
//! consistent scientific notation for real and complex values.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod mesh_ext;
mod value_ext;

// Flatten
pub use mesh_ext::MeshExt;
pub use value_ext::{ComplexExt, ValueExt};
