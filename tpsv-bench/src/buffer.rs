// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::debug;
use num_traits::{Float as _, One as _};
use rand::Rng;

use crate::{scalar::Real as _, Error, Res, Scalar};

/// The matrix and vector buffers, sized once for the largest problem in a
/// sweep and reused for every smaller one.
#[derive(Debug)]
pub struct Workspace<T: Scalar> {
    matrix: Vec<T::Real>,
    vector: Vec<T::Real>,
    stride: usize,
}

fn alloc<R: Clone + num_traits::Zero>(len: Option<usize>) -> Res<Vec<R>> {
    let len = len.ok_or(Error::OutOfMemory { elements: None })?;
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory {
            elements: Some(len),
        })?;
    v.resize(len, R::zero());
    Ok(v)
}

impl<T: Scalar> Workspace<T> {
    /// Allocate room for problems up to `max_n`, with vector elements
    /// `inc_x` apart.  Only the magnitude of `inc_x` matters here.
    ///
    /// # Errors
    ///
    /// `Error::OutOfMemory` when either buffer cannot be allocated, including
    /// when its size overflows `usize`.
    pub fn allocate(max_n: usize, inc_x: isize) -> Res<Self> {
        let stride = inc_x.unsigned_abs();
        let matrix = alloc(
            max_n
                .checked_mul(max_n)
                .and_then(|v| v.checked_mul(T::COMPONENTS)),
        )?;
        let vector = alloc(
            max_n
                .checked_mul(stride)
                .and_then(|v| v.checked_mul(T::COMPONENTS)),
        )?;
        debug!(
            "[{}] allocated {} matrix and {} vector components",
            T::ROUTINE,
            matrix.len(),
            vector.len()
        );
        Ok(Self {
            matrix,
            vector,
            stride,
        })
    }

    #[must_use]
    pub fn matrix_capacity(&self) -> usize {
        self.matrix.len()
    }

    #[must_use]
    pub fn vector_capacity(&self) -> usize {
        self.vector.len()
    }

    const fn matrix_len(n: usize) -> usize {
        n * n * T::COMPONENTS
    }

    const fn vector_len(&self, n: usize) -> usize {
        n * self.stride * T::COMPONENTS
    }

    /// Overwrite the leading parts used by a problem of size `n` with values
    /// drawn uniformly from `[-0.5, 0.5)`.  The matrix is filled first.
    ///
    /// # Panics
    ///
    /// When `n` is larger than the size the workspace was allocated for.
    pub fn fill<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        let half = (T::Real::one() + T::Real::one()).recip();
        let vector_len = self.vector_len(n);
        for v in self.matrix[..Self::matrix_len(n)]
            .iter_mut()
            .chain(self.vector[..vector_len].iter_mut())
        {
            *v = T::Real::sample(rng) - half;
        }
    }

    /// The matrix and vector prefixes for a problem of size `n`.
    ///
    /// # Panics
    ///
    /// When `n` is larger than the size the workspace was allocated for.
    pub fn operands(&mut self, n: usize) -> (&[T::Real], &mut [T::Real]) {
        let vector_len = self.vector_len(n);
        (
            &self.matrix[..Self::matrix_len(n)],
            &mut self.vector[..vector_len],
        )
    }
}
