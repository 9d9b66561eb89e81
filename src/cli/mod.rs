//! Command-line surface: argument definitions and type-safe wrappers.

pub mod args;
pub mod types;

pub use args::{CbbNil, Commands, CommonFilters, IngestCmd};
