//! Core compute primitives.
//!
//! The [`Matrix`] type is the foundation for the rest of the crate.

mod matrix;

pub use matrix::Matrix;
