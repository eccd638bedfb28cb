//! Benchmark input builders for the weft workspace.
//!
//! Deterministic, seeded input generation shared by the criterion
//! benches, so runs are comparable across machines and revisions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use num_complex::Complex64;
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use weft_vector::Vector;

/// Deterministic real inputs in `[-1000, 1000)`.
pub fn real_inputs(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1000.0..1000.0)).collect()
}

/// Deterministic complex inputs with components in `[-1000, 1000)`.
pub fn complex_inputs(n: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Complex64::new(
                rng.random_range(-1000.0..1000.0),
                rng.random_range(-1000.0..1000.0),
            )
        })
        .collect()
}

/// A deterministic real vector of length `n`.
pub fn real_vector(n: usize, seed: u64) -> Vector {
    Vector::from_reals(&real_inputs(n, seed)).expect("bench allocation")
}

/// A deterministic complex vector of length `n`.
pub fn complex_vector(n: usize, seed: u64) -> Vector {
    Vector::from_complexes(&complex_inputs(n, seed)).expect("bench allocation")
}
