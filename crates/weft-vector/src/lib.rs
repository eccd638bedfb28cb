//! Fixed-length typed vectors with coercion-aware arithmetic.
//!
//! A [`Vector`] is a one-dimensional typed view over a storage block:
//! its length and element tag are fixed at construction, element access
//! is bounds-checked, and only item replacement is permitted — never
//! insertion, deletion, or resizing.
//!
//! Binary operations follow the coercion lattice from `weft-core`:
//! mixing a complex operand into anything yields a complex result, and
//! the dot product of complex vectors is the unconjugated bilinear form
//! (the `zdotu` convention), not the Hermitian inner product.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod vector;

// Public re-exports for the primary API surface.
pub use error::VectorError;
pub use vector::Vector;
