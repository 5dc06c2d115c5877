// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The benchmark loop.

use std::{io::Write, num::NonZeroUsize, time::Duration};

use log::{info, trace};
use rand::Rng;

use crate::{report, Config, Res, Scalar, Stopwatch, Tpsv, Workspace};

/// The arithmetic sequence `from, from + step, ...` up to and including `to`.
#[derive(Clone, Debug)]
pub struct Sizes {
    next: Option<usize>,
    to: usize,
    step: usize,
}

impl Sizes {
    #[must_use]
    pub const fn new(from: usize, to: usize, step: NonZeroUsize) -> Self {
        Self {
            next: Some(from),
            to,
            step: step.get(),
        }
    }
}

impl Iterator for Sizes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let n = self.next.filter(|&n| n <= self.to)?;
        self.next = n.checked_add(self.step);
        Some(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self
            .next
            .filter(|&n| n <= self.to)
            .map_or(0, |n| (self.to - n) / self.step + 1);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Sizes {}

/// Millions of operations per second, counting `components² × n²`
/// operations per call.
///
/// This is a rough model of the cost of a triangular solve.  It is kept as
/// is so that numbers stay comparable with earlier runs.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "Problem sizes are far below 2^52."
)]
pub fn throughput(components: usize, n: usize, mean: Duration) -> f64 {
    let c = components as f64;
    let n = n as f64;
    c * c * n * n / mean.as_secs_f64() / 1.0e6
}

/// The outcome for one problem size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub n: usize,
    /// Mean wall-clock time of one call.
    pub mean: Duration,
    pub mflops: f64,
}

impl Measurement {
    #[must_use]
    pub fn new(components: usize, n: usize, mean: Duration) -> Self {
        Self {
            n,
            mean,
            mflops: throughput(components, n, mean),
        }
    }
}

/// A configured benchmark: the routine under test, the clock that times it,
/// and the generator that feeds it.
#[derive(Debug)]
pub struct Bench<S, W, R> {
    config: Config,
    solver: S,
    stopwatch: W,
    rng: R,
}

impl<S, W: Stopwatch, R: Rng> Bench<S, W, R> {
    pub const fn new(config: Config, solver: S, stopwatch: W, rng: R) -> Self {
        Self {
            config,
            solver,
            stopwatch,
            rng,
        }
    }

    #[must_use]
    pub fn into_solver(self) -> S {
        self.solver
    }

    /// Run the whole sweep, writing the report to `out` as it goes.
    ///
    /// # Errors
    ///
    /// `Error::OutOfMemory` when the buffers cannot be allocated, or
    /// `Error::IoError` when `out` cannot be written.
    pub fn run<T, O>(&mut self, out: &mut O) -> Res<Vec<Measurement>>
    where
        T: Scalar,
        S: Tpsv<T>,
        O: Write + ?Sized,
    {
        let Config {
            to,
            uplo,
            trans,
            diag,
            loops,
            inc_x,
            ..
        } = self.config;

        report::summary(out, &self.config)?;
        let mut workspace = Workspace::<T>::allocate(to, inc_x)?;
        report::header(out)?;
        info!(
            "[{}] sweeping sizes {}..={} by {}",
            T::ROUTINE,
            self.config.from,
            to,
            self.config.step
        );

        let sizes = self.config.sizes();
        let mut results = Vec::with_capacity(sizes.len());
        for n in sizes {
            report::size(out, n)?;
            workspace.fill(n, &mut self.rng);

            let mut total = Duration::ZERO;
            for _ in 0..loops {
                let (ap, x) = workspace.operands(n);
                let solver = &mut self.solver;
                total += self.stopwatch.time(|| {
                    Tpsv::<T>::tpsv(solver, uplo, trans, diag, n, ap, x, inc_x);
                });
            }
            let m = Measurement::new(T::COMPONENTS, n, total / loops);
            report::result(out, &m)?;
            trace!("[{}] n={n} total={total:?} over {loops} calls", T::ROUTINE);
            results.push(m);
        }
        Ok(results)
    }
}
