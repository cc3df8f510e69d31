//! Matriz: a dense 2-D matrix primitive in pure Rust.
//!
//! Matriz provides a single owning, value-semantic [`Matrix`] type with
//! flat row-major storage, elementwise arithmetic, matrix multiplication,
//! transpose, scalar operations, and a plain-text serialization format.
//! It is a small building block for numeric code (simple neural-network or
//! linear-algebra experiments), not a general tensor library.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 3, vec![
//!     1.0, 2.0, 3.0,
//!     4.0, 5.0, 6.0,
//! ]).unwrap();
//!
//! // Matrix multiplication and transpose
//! let product = a.dot(&a.transpose()).unwrap();
//! assert_eq!(product.shape(), (2, 2));
//!
//! // Elementwise arithmetic through operators
//! let doubled = &a + &a;
//! assert_eq!(doubled, &a * 2.0);
//!
//! // Text round trip
//! let text = a.to_string();
//! let back: Matrix = text.parse().unwrap();
//! assert_eq!(back, a);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core [`Matrix`] type
//! - [`error`]: crate error type and `Result` alias
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{Error, Result};
pub use primitives::Matrix;
