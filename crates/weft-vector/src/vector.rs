//! The fixed-length typed vector and its operations.

use std::ops::{Add, AddAssign};

use num_complex::Complex64;
use weft_block::{Block, SharedBlock, ZeroInit};
use weft_core::{Scalar, TypeTag};

use crate::error::VectorError;

/// A fixed-length, randomly-indexable sequence of scalars.
///
/// A vector either exclusively owns its block (constructed from a length
/// or from values; released exactly once when the vector drops) or holds
/// a shared view of a caller-managed block (see [`Vector::over`]), in
/// which case the allocating caller keeps lifetime responsibility and
/// the vector is read-only.
///
/// Length and element tag never change after construction. The only
/// permitted mutation is item replacement via [`Vector::set`].
#[derive(Debug)]
pub struct Vector {
    storage: Storage,
}

#[derive(Debug)]
enum Storage {
    /// Exclusively owned; released when the vector drops.
    Owned(Block),
    /// Shared view of a store-managed block; never released here.
    Shared(SharedBlock),
}

impl Vector {
    /// A zero-initialized real vector of the given length.
    pub fn zeros(len: usize) -> Result<Self, VectorError> {
        Self::zeros_with_tag(len, TypeTag::Real64)
    }

    /// A zero-initialized vector of the given length and element tag.
    pub fn zeros_with_tag(len: usize, tag: TypeTag) -> Result<Self, VectorError> {
        let block = Block::try_new(len, tag, ZeroInit::Zeroed)?;
        Ok(Self::owned(block))
    }

    /// Build a vector from values, inferring the element tag.
    ///
    /// Every value is inspected: if any is complex the vector is
    /// `Complex128` and all values widen; otherwise it is `Real64`.
    /// Elements are stored in iteration order, index 0 first.
    pub fn from_values<I>(values: I) -> Result<Self, VectorError>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        let tag = values
            .iter()
            .fold(TypeTag::Real64, |acc, v| acc.join(v.tag()));
        Self::populate(values, tag)
    }

    /// Build a vector from values with an explicit element tag.
    ///
    /// Fails with [`VectorError::TypeCapacity`] if any value does not
    /// coerce losslessly to `tag`.
    pub fn from_values_with_tag<I>(values: I, tag: TypeTag) -> Result<Self, VectorError>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        for v in &values {
            if v.coerce(tag).is_none() {
                return Err(VectorError::TypeCapacity {
                    tag,
                    value_tag: v.tag(),
                });
            }
        }
        Self::populate(values, tag)
    }

    /// Build a real vector from a slice of `f64`.
    pub fn from_reals(values: &[f64]) -> Result<Self, VectorError> {
        Self::from_values(values.iter().copied())
    }

    /// Build a complex vector from a slice of `Complex64`.
    pub fn from_complexes(values: &[Complex64]) -> Result<Self, VectorError> {
        Self::from_values(values.iter().copied())
    }

    /// A vector over a pre-existing, caller-managed block.
    ///
    /// Ownership is not implied: the store that allocated the block (and
    /// its caller) remain responsible for releasing it. The view keeps
    /// the storage alive, and the resulting vector is read-only — item
    /// assignment fails with [`VectorError::NotWritable`]. Clone it to
    /// get an owned, writable vector.
    pub fn over(block: SharedBlock) -> Self {
        Self {
            storage: Storage::Shared(block),
        }
    }

    fn owned(block: Block) -> Self {
        Self {
            storage: Storage::Owned(block),
        }
    }

    fn populate(values: Vec<Scalar>, tag: TypeTag) -> Result<Self, VectorError> {
        let mut block = Block::try_new(values.len(), tag, ZeroInit::Unspecified)?;
        for (i, v) in values.into_iter().enumerate() {
            block.set(i, v)?;
        }
        Ok(Self::owned(block))
    }

    fn block(&self) -> &Block {
        match &self.storage {
            Storage::Owned(b) => b,
            Storage::Shared(b) => b.as_ref(),
        }
    }

    fn block_mut(&mut self) -> Result<&mut Block, VectorError> {
        match &mut self.storage {
            Storage::Owned(b) => Ok(b),
            Storage::Shared(_) => Err(VectorError::NotWritable),
        }
    }

    /// Number of elements. Fixed for the lifetime of the vector.
    pub fn len(&self) -> usize {
        self.block().len()
    }

    /// Whether this is a zero-length vector.
    pub fn is_empty(&self) -> bool {
        self.block().is_empty()
    }

    /// The element type tag. Fixed for the lifetime of the vector.
    pub fn tag(&self) -> TypeTag {
        self.block().tag()
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<Scalar, VectorError> {
        Ok(self.block().get(index)?)
    }

    /// Replace the element at `index`.
    ///
    /// Neither the length nor the tag changes: a value that does not
    /// coerce losslessly to the vector's tag is rejected with
    /// [`VectorError::TypeCapacity`], and a failed write leaves the
    /// vector unmodified.
    pub fn set(&mut self, index: usize, value: impl Into<Scalar>) -> Result<(), VectorError> {
        let len = self.len();
        if index >= len {
            return Err(VectorError::OutOfBounds { index, len });
        }
        Ok(self.block_mut()?.set(index, value)?)
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        let block = self.block();
        (0..block.len()).map(move |i| block.get(i).expect("index within length"))
    }

    /// Element-wise sum, producing a new owned vector.
    ///
    /// Operand lengths must match. The result tag is the lattice join of
    /// the operand tags; mixed operands are summed in complex arithmetic.
    pub fn checked_add(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_len(other)?;
        let len = self.len();
        let tag = self.tag().join(other.tag());
        let mut block = Block::try_new(len, tag, ZeroInit::Unspecified)?;
        match tag {
            TypeTag::Real64 => {
                let a = self.block().as_real().expect("join is real64, so both operands are");
                let b = other.block().as_real().expect("join is real64, so both operands are");
                let out = block.as_real_mut().expect("block allocated as real64");
                for i in 0..len {
                    out[i] = a[i] + b[i];
                }
            }
            TypeTag::Complex128 => {
                let out = block.as_complex_mut().expect("block allocated as complex128");
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = self.complex_at(i) + other.complex_at(i);
                }
            }
        }
        Ok(Self::owned(block))
    }

    /// Element-wise sum in place.
    ///
    /// In addition to the length check, the receiver's tag must already
    /// hold the result: adding a complex vector into a real receiver
    /// fails with [`VectorError::TypeCapacity`] — the in-place form
    /// never changes its own storage type. No element is written until
    /// every check has passed.
    pub fn checked_add_assign(&mut self, other: &Self) -> Result<(), VectorError> {
        self.check_len(other)?;
        let joined = self.tag().join(other.tag());
        if joined != self.tag() {
            return Err(VectorError::TypeCapacity {
                tag: self.tag(),
                value_tag: other.tag(),
            });
        }
        let len = self.len();
        let rhs: Vec<Complex64> = (0..len).map(|i| other.complex_at(i)).collect();
        let block = self.block_mut()?;
        match block.as_real_mut() {
            Some(out) => {
                // Receiver is real, so the join check proved rhs is too.
                for i in 0..len {
                    out[i] += rhs[i].re;
                }
            }
            None => {
                let out = block.as_complex_mut().expect("vector is complex128");
                for i in 0..len {
                    out[i] += rhs[i];
                }
            }
        }
        Ok(())
    }

    /// Scalar (dot) product of two vectors.
    ///
    /// Sum of element-wise products. For complex operands this is the
    /// unconjugated bilinear product — `dot(v, v)` of a complex vector
    /// is in general complex and is not the squared norm. Real operands
    /// produce a real result.
    pub fn dot(&self, other: &Self) -> Result<Scalar, VectorError> {
        self.check_len(other)?;
        match (self.block().as_real(), other.block().as_real()) {
            (Some(a), Some(b)) => {
                let sum = a.iter().zip(b).map(|(x, y)| x * y).sum();
                Ok(Scalar::Real(sum))
            }
            _ => {
                let mut sum = Complex64::new(0.0, 0.0);
                for i in 0..self.len() {
                    sum += self.complex_at(i) * other.complex_at(i);
                }
                Ok(Scalar::Complex(sum))
            }
        }
    }

    /// Euclidean (L2) norm: a non-negative real number.
    ///
    /// For real vectors this equals `sqrt(dot(v, v))` up to floating-point
    /// error. Accumulation is scale-corrected in the BLAS `nrm2` manner,
    /// so intermediate squares neither overflow nor underflow.
    pub fn norm(&self) -> f64 {
        match self.block().as_real() {
            Some(xs) => scaled_norm(xs.iter().copied()),
            None => {
                let zs = self.block().as_complex().expect("vector is complex128");
                scaled_norm(zs.iter().flat_map(|z| [z.re, z.im]))
            }
        }
    }

    fn complex_at(&self, index: usize) -> Complex64 {
        match self.block().as_real() {
            Some(xs) => Complex64::new(xs[index], 0.0),
            None => self.block().as_complex().expect("vector is complex128")[index],
        }
    }

    fn check_len(&self, other: &Self) -> Result<(), VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl Clone for Vector {
    /// Shallow copy: a new owned block of the same length and tag with
    /// the element values copied. Mutating the copy never affects the
    /// original; cloning a shared view yields an owned, writable vector.
    fn clone(&self) -> Self {
        Self::owned(self.block().clone())
    }
}

impl PartialEq for Vector {
    /// Equal when tag, length, and every element match.
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag()
            && self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Add for &Vector {
    type Output = Vector;

    /// Operator sugar over [`Vector::checked_add`].
    ///
    /// # Panics
    ///
    /// Panics on length mismatch or allocation failure; use
    /// [`Vector::checked_add`] for the fallible form.
    fn add(self, rhs: &Vector) -> Vector {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl AddAssign<&Vector> for Vector {
    /// Operator sugar over [`Vector::checked_add_assign`].
    ///
    /// # Panics
    ///
    /// Panics on length mismatch, or when the receiver's tag cannot hold
    /// the result; use [`Vector::checked_add_assign`] for the fallible
    /// form.
    fn add_assign(&mut self, rhs: &Vector) {
        self.checked_add_assign(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Scale-corrected sum of squares, as in BLAS `nrm2`.
fn scaled_norm(components: impl Iterator<Item = f64>) -> f64 {
    let mut scale = 0.0_f64;
    let mut ssq = 1.0_f64;
    for x in components {
        if x != 0.0 {
            let ax = x.abs();
            if scale < ax {
                let r = scale / ax;
                ssq = 1.0 + ssq * r * r;
                scale = ax;
            } else {
                let r = ax / scale;
                ssq += r * r;
            }
        }
    }
    scale * ssq.sqrt()
}
