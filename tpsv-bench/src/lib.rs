// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Throughput benchmark for the packed triangular solve (TPSV) routine.
//!
//! The driver sweeps over problem sizes, fills a packed triangular matrix and
//! a strided vector with random values, and times repeated calls into a
//! [`Tpsv`] implementation.

use std::{
    fmt::{self, Display},
    io,
};

pub mod buffer;
pub mod cli;
pub mod config;
pub mod kernel;
pub mod log;
pub mod report;
pub mod scalar;
pub mod sweep;
pub mod timer;

pub use self::{
    buffer::Workspace,
    config::{Args, Config},
    kernel::{Reference, Tpsv},
    scalar::{Complex, Real, Scalar},
    sweep::{throughput, Bench, Measurement, Sizes},
    timer::{Stopwatch, WallClock},
};

#[derive(Debug)]
pub enum Error {
    /// A buffer of `elements` real components could not be allocated.  The
    /// count is `None` when it does not fit in a `usize`.
    OutOfMemory { elements: Option<usize> },
    IoError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::OutOfMemory { .. } => None,
        }
    }
}

pub type Res<T> = Result<T, Error>;
