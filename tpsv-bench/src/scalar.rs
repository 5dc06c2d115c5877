// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element types the benchmark can be built for.
//!
//! Buffers always hold real components; a complex element occupies two
//! adjacent slots (real part first).  [`Scalar::COMPONENTS`] is that
//! component factor.

use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Sub},
};

use num_traits::Float;
use rand::Rng;

/// A real component type: `f32` or `f64`.
pub trait Real: Float + Debug + Display + Default + 'static {
    /// Draw a value uniformly from `[0, 1)`.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Real for f32 {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

impl Real for f64 {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

/// An element of the matrix and vector, as seen by the solver.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    type Real: Real;

    /// Number of real components per element.
    const COMPONENTS: usize;
    /// The BLAS name of the routine for this type.
    const ROUTINE: &'static str;

    /// Read the element that starts at component offset `at`.
    fn load(buf: &[Self::Real], at: usize) -> Self;
    /// Write the element that starts at component offset `at`.
    fn store(self, buf: &mut [Self::Real], at: usize);
    #[must_use]
    fn conj(self) -> Self;
    fn is_zero(self) -> bool;
}

impl Scalar for f32 {
    type Real = Self;
    const COMPONENTS: usize = 1;
    const ROUTINE: &'static str = "STPSV";

    fn load(buf: &[Self], at: usize) -> Self {
        buf[at]
    }

    fn store(self, buf: &mut [Self], at: usize) {
        buf[at] = self;
    }

    fn conj(self) -> Self {
        self
    }

    fn is_zero(self) -> bool {
        self == 0.0
    }
}

impl Scalar for f64 {
    type Real = Self;
    const COMPONENTS: usize = 1;
    const ROUTINE: &'static str = "DTPSV";

    fn load(buf: &[Self], at: usize) -> Self {
        buf[at]
    }

    fn store(self, buf: &mut [Self], at: usize) {
        buf[at] = self;
    }

    fn conj(self) -> Self {
        self
    }

    fn is_zero(self) -> bool {
        self == 0.0
    }
}

/// A complex number stored as an interleaved `(re, im)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<R> {
    pub re: R,
    pub im: R,
}

impl<R> Complex<R> {
    pub const fn new(re: R, im: R) -> Self {
        Self { re, im }
    }
}

impl<R: Real> Add for Complex<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<R: Real> Sub for Complex<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<R: Real> Mul for Complex<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<R: Real> Div for Complex<R> {
    type Output = Self;

    /// Smith's algorithm, which avoids overflow in `|rhs|²`.
    fn div(self, rhs: Self) -> Self {
        if rhs.re.abs() >= rhs.im.abs() {
            let ratio = rhs.im / rhs.re;
            let den = rhs.re + rhs.im * ratio;
            Self::new(
                (self.re + self.im * ratio) / den,
                (self.im - self.re * ratio) / den,
            )
        } else {
            let ratio = rhs.re / rhs.im;
            let den = rhs.im + rhs.re * ratio;
            Self::new(
                (self.re * ratio + self.im) / den,
                (self.im * ratio - self.re) / den,
            )
        }
    }
}

macro_rules! complex_scalar {
    ($real:ty, $routine:literal) => {
        impl Scalar for Complex<$real> {
            type Real = $real;
            const COMPONENTS: usize = 2;
            const ROUTINE: &'static str = $routine;

            fn load(buf: &[$real], at: usize) -> Self {
                Self::new(buf[at], buf[at + 1])
            }

            fn store(self, buf: &mut [$real], at: usize) {
                buf[at] = self.re;
                buf[at + 1] = self.im;
            }

            fn conj(self) -> Self {
                Self::new(self.re, -self.im)
            }

            fn is_zero(self) -> bool {
                self.re == 0.0 && self.im == 0.0
            }
        }
    };
}

complex_scalar!(f32, "CTPSV");
complex_scalar!(f64, "ZTPSV");
