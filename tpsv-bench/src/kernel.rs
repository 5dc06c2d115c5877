// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The routine under test.

use crate::scalar::Scalar;

/// A triangular packed solve: `op(A) · x = b`, overwriting `x` with the
/// solution.
///
/// `ap` holds the `n × n` triangle of `A` in column-major packed order, and
/// the logical elements of `x` are `inc_x` elements apart.  A negative
/// `inc_x` walks the vector back to front.
pub trait Tpsv<T: Scalar> {
    #[expect(clippy::too_many_arguments, reason = "This is the BLAS signature.")]
    fn tpsv(
        &mut self,
        uplo: char,
        trans: char,
        diag: char,
        n: usize,
        ap: &[T::Real],
        x: &mut [T::Real],
        inc_x: isize,
    );
}

impl<T: Scalar, S: Tpsv<T> + ?Sized> Tpsv<T> for &mut S {
    fn tpsv(
        &mut self,
        uplo: char,
        trans: char,
        diag: char,
        n: usize,
        ap: &[T::Real],
        x: &mut [T::Real],
        inc_x: isize,
    ) {
        <S as Tpsv<T>>::tpsv(&mut **self, uplo, trans, diag, n, ap, x, inc_x);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    NoTrans,
    Trans,
    ConjTrans,
}

/// A plain, unblocked implementation in the manner of reference BLAS.
///
/// # Panics
///
/// Like `xerbla`, this panics when an argument is illegal: an unknown mode
/// character, `inc_x == 0`, or a buffer too short for `n`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reference;

fn illegal<T: Scalar>(parameter: usize) -> ! {
    panic!(
        "** On entry to {} parameter number {parameter} had an illegal value",
        T::ROUTINE
    );
}

/// Number of elements in a packed `n × n` triangle.
#[must_use]
pub const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

struct Solve<'a, T: Scalar> {
    ap: &'a [T::Real],
    x: &'a mut [T::Real],
    n: usize,
    upper: bool,
    unit: bool,
    op: Op,
    inc_x: isize,
}

impl<T: Scalar> Solve<'_, T> {
    /// `A(i, j)`, conjugated when solving with `Aᴴ`.
    fn a(&self, i: usize, j: usize) -> T {
        let at = if self.upper {
            i + j * (j + 1) / 2
        } else {
            (i - j) + j * (2 * self.n + 1 - j) / 2
        };
        let v = T::load(self.ap, at * T::COMPONENTS);
        if self.op == Op::ConjTrans {
            v.conj()
        } else {
            v
        }
    }

    fn at(&self, k: usize) -> usize {
        let step = self.inc_x.unsigned_abs();
        let pos = if self.inc_x > 0 {
            k * step
        } else {
            (self.n - 1 - k) * step
        };
        pos * T::COMPONENTS
    }

    fn get(&self, k: usize) -> T {
        T::load(self.x, self.at(k))
    }

    fn set(&mut self, k: usize, v: T) {
        let at = self.at(k);
        v.store(self.x, at);
    }

    /// Column-oriented substitution for `A · x = b`.
    fn forward(&mut self, j: usize, rows: impl Iterator<Item = usize>) {
        let mut xj = self.get(j);
        if xj.is_zero() {
            return;
        }
        if !self.unit {
            xj = xj / self.a(j, j);
            self.set(j, xj);
        }
        for i in rows {
            let xi = self.get(i) - xj * self.a(i, j);
            self.set(i, xi);
        }
    }

    /// Dot-product substitution for `Aᵀ · x = b` and `Aᴴ · x = b`.
    fn dot(&mut self, j: usize, rows: impl Iterator<Item = usize>) {
        let mut t = self.get(j);
        for i in rows {
            t = t - self.a(i, j) * self.get(i);
        }
        if !self.unit {
            t = t / self.a(j, j);
        }
        self.set(j, t);
    }

    fn run(&mut self) {
        let n = self.n;
        match (self.op, self.upper) {
            (Op::NoTrans, true) => {
                for j in (0..n).rev() {
                    self.forward(j, (0..j).rev());
                }
            }
            (Op::NoTrans, false) => {
                for j in 0..n {
                    self.forward(j, j + 1..n);
                }
            }
            (Op::Trans | Op::ConjTrans, true) => {
                for j in 0..n {
                    self.dot(j, 0..j);
                }
            }
            (Op::Trans | Op::ConjTrans, false) => {
                for j in (0..n).rev() {
                    self.dot(j, j + 1..n);
                }
            }
        }
    }
}

impl<T: Scalar> Tpsv<T> for Reference {
    fn tpsv(
        &mut self,
        uplo: char,
        trans: char,
        diag: char,
        n: usize,
        ap: &[T::Real],
        x: &mut [T::Real],
        inc_x: isize,
    ) {
        let upper = match uplo.to_ascii_uppercase() {
            'U' => true,
            'L' => false,
            _ => illegal::<T>(1),
        };
        let op = match trans.to_ascii_uppercase() {
            'N' => Op::NoTrans,
            'T' => Op::Trans,
            'C' => Op::ConjTrans,
            _ => illegal::<T>(2),
        };
        let unit = match diag.to_ascii_uppercase() {
            'U' => true,
            'N' => false,
            _ => illegal::<T>(3),
        };
        if inc_x == 0 {
            illegal::<T>(7);
        }
        if n == 0 {
            return;
        }
        if ap.len() < packed_len(n) * T::COMPONENTS {
            illegal::<T>(5);
        }
        if x.len() < (1 + (n - 1) * inc_x.unsigned_abs()) * T::COMPONENTS {
            illegal::<T>(6);
        }

        Solve::<T> {
            ap,
            x,
            n,
            upper,
            unit,
            op,
            inc_x,
        }
        .run();
    }
}
