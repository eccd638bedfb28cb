//! Core types for the weft numerical workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! scalar type tags and their coercion lattice, the dynamic [`Scalar`]
//! value carried across the block and vector APIs, and the precision
//! [`Mode`] selector consumed by the special-function layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mode;
pub mod scalar;
pub mod tag;

// Public re-exports for the primary API surface.
pub use mode::Mode;
pub use num_complex::Complex64;
pub use scalar::Scalar;
pub use tag::TypeTag;
