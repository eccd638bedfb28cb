//! weft: typed numerical storage, vectors, and special functions.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! // Vectors infer their element type from the values they are built
//! // from: all-real input stays real64.
//! let v = Vector::from_reals(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.tag(), TypeTag::Real64);
//! assert!((v.norm() - 14.0_f64.sqrt()).abs() < 1e-12);
//!
//! // Element-wise arithmetic and the bilinear dot product.
//! let w = Vector::from_reals(&[3.0, 2.0, 1.0]).unwrap();
//! assert_eq!(v.dot(&w).unwrap(), Scalar::Real(10.0));
//! let sum = &v + &w;
//! assert_eq!(sum.get(0).unwrap(), Scalar::Real(4.0));
//!
//! // Special functions come in natural and checked variants.
//! let bare = weft::sf::bessel::j0(5.0).unwrap();
//! let bounded = weft::sf::bessel::j0_e(5.0).unwrap();
//! assert_eq!(bare, bounded.val);
//! assert!(bounded.err > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weft-core` | Type tags, scalars, precision modes |
//! | [`block`] | `weft-block` | Blocks, the block store, handles |
//! | [`vector`] | `weft-vector` | The vector type and its operations |
//! | [`sf`] | `weft-sf` | Bessel and Airy functions, result/error types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: tags, scalars, and precision modes (`weft-core`).
pub use weft_core as types;

/// Typed block storage and the block store (`weft-block`).
pub use weft_block as block;

/// The vector type and its operations (`weft-vector`).
pub use weft_vector as vector;

/// Special functions with dual calling variants (`weft-sf`).
pub use weft_sf as sf;

/// Common imports for typical weft usage.
///
/// ```rust
/// use weft::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use weft_core::{Complex64, Mode, Scalar, TypeTag};

    // Block storage
    pub use weft_block::{Block, BlockHandle, BlockStore, SharedBlock, StoreConfig, ZeroInit};

    // Vectors
    pub use weft_vector::Vector;

    // Special-function results
    pub use weft_sf::{SfError, SfResult};

    // Errors
    pub use weft_block::BlockError;
    pub use weft_vector::VectorError;
}
