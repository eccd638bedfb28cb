//! End-to-end vector scenarios across construction, arithmetic, and
//! storage sharing.

use num_complex::Complex64;
use weft_block::{BlockStore, ZeroInit};
use weft_core::{Scalar, TypeTag};
use weft_test_utils::assert_rel_close;
use weft_vector::{Vector, VectorError};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn real_construction_and_norm() {
    let v = Vector::from_reals(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(v.tag(), TypeTag::Real64);
    assert_eq!(v.len(), 3);
    assert_rel_close(v.norm(), 14.0_f64.sqrt(), 1e-15);
}

#[test]
fn mixed_values_coerce_to_complex() {
    let v = Vector::from_values([Scalar::Complex(c(1.0, 0.0)), Scalar::Real(2.0)]).unwrap();
    assert_eq!(v.tag(), TypeTag::Complex128);
    assert_eq!(v.len(), 2);
    assert_eq!(v.get(0).unwrap(), Scalar::Complex(c(1.0, 0.0)));
    assert_eq!(v.get(1).unwrap(), Scalar::Complex(c(2.0, 0.0)));
}

#[test]
fn addition_keeps_real_tag() {
    let sum = &Vector::from_reals(&[1.0, 2.0]).unwrap() + &Vector::from_reals(&[3.0, 4.0]).unwrap();
    assert_eq!(sum, Vector::from_reals(&[4.0, 6.0]).unwrap());
    assert_eq!(sum.tag(), TypeTag::Real64);
}

#[test]
fn dot_product_of_small_reals() {
    let a = Vector::from_reals(&[1.0, 2.0]).unwrap();
    let b = Vector::from_reals(&[3.0, 4.0]).unwrap();
    assert_eq!(a.dot(&b).unwrap(), Scalar::Real(11.0));
}

#[test]
fn norm_agrees_with_self_dot_for_reals() {
    let v = Vector::from_reals(&[3.0, 0.0, -1.0]).unwrap();
    let dot = match v.dot(&v).unwrap() {
        Scalar::Real(x) => x,
        Scalar::Complex(_) => unreachable!("real dot is real"),
    };
    assert_rel_close(v.norm(), dot.sqrt(), 1e-14);
}

#[test]
fn complex_norm_uses_moduli() {
    // |0-1i|^2 + |-1+0i|^2 + |0+0i|^2 = 2.
    let x = Vector::from_complexes(&[c(0.0, -1.0), c(-1.0, 0.0), c(0.0, 0.0)]).unwrap();
    assert_rel_close(x.norm(), 2.0_f64.sqrt(), 1e-15);
    // The bilinear self-product of x is 0+0i, so the norm cannot be
    // derived from it — conjugation matters.
    assert_eq!(x.dot(&x).unwrap(), Scalar::Complex(c(0.0, 0.0)));
}

#[test]
fn full_lifecycle_over_a_store_block() {
    let mut store = BlockStore::new();
    let h = store.alloc(3, TypeTag::Complex128, ZeroInit::Zeroed).unwrap();
    {
        let block = store.get_mut(h).unwrap();
        block.set(0, c(2.0, 1.0)).unwrap();
        block.set(1, c(-2.0, 1.0)).unwrap();
        block.set(2, c(1.0, -2.0)).unwrap();
    }

    let w = Vector::over(store.share(h).unwrap());
    assert_eq!(w.tag(), TypeTag::Complex128);
    assert_rel_close(w.norm(), 15.0_f64.sqrt(), 1e-15);

    // Shared views never write.
    let mut w2 = Vector::over(store.share(h).unwrap());
    assert_eq!(w2.set(0, 0.0).unwrap_err(), VectorError::NotWritable);

    // An owned clone computes independently of the store's lifetime.
    let owned = w.clone();
    store.release(h).unwrap();
    assert_eq!(owned.dot(&owned).unwrap(), Scalar::Complex(c(3.0, -4.0)));
}

#[test]
fn error_paths_do_not_disturb_state() {
    let mut a = Vector::from_reals(&[1.0, 2.0]).unwrap();
    let b = Vector::from_reals(&[1.0, 2.0, 3.0]).unwrap();

    assert!(matches!(
        a.checked_add(&b),
        Err(VectorError::LengthMismatch { left: 2, right: 3 })
    ));
    assert!(matches!(
        a.checked_add_assign(&b),
        Err(VectorError::LengthMismatch { left: 2, right: 3 })
    ));
    assert!(matches!(a.dot(&b), Err(VectorError::LengthMismatch { .. })));
    assert!(matches!(a.get(7), Err(VectorError::OutOfBounds { .. })));

    assert_eq!(a, Vector::from_reals(&[1.0, 2.0]).unwrap());
    assert_eq!(b, Vector::from_reals(&[1.0, 2.0, 3.0]).unwrap());
}
