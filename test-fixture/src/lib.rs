// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stand-ins for the routine, the clock and the environment, so that a
//! sweep can be checked line by line.

#![expect(clippy::unwrap_used, reason = "This is test code.")]

use std::{collections::VecDeque, time::Duration};

use rand::{rngs::StdRng, SeedableRng as _};
use tpsv_bench::{Scalar, Stopwatch, Tpsv};

#[cfg(feature = "bench")]
pub mod bench;

/// The seed used by [`seeded_rng`].
pub const SEED: u64 = 0x5eed;

/// A generator that produces the same inputs on every run.
#[must_use]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// An environment holding exactly `pairs`, for `Config::resolve`.
pub fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

/// What one call to the routine looked like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub uplo: char,
    pub trans: char,
    pub diag: char,
    pub n: usize,
    pub ap_len: usize,
    pub x_len: usize,
    pub inc_x: isize,
}

/// A routine that records its arguments and leaves `x` alone.
#[derive(Debug, Default)]
pub struct StubSolver {
    pub calls: Vec<Call>,
}

impl StubSolver {
    /// The problem sizes seen, one entry per call.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.calls.iter().map(|c| c.n).collect()
    }
}

impl<T: Scalar> Tpsv<T> for StubSolver {
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
        self.calls.push(Call {
            uplo,
            trans,
            diag,
            n,
            ap_len: ap.len(),
            x_len: x.len(),
            inc_x,
        });
    }
}

/// Runs the call and claims it took exactly `self.0`.
#[derive(Clone, Copy, Debug)]
pub struct FixedStopwatch(pub Duration);

impl Stopwatch for FixedStopwatch {
    fn time<F: FnOnce()>(&mut self, f: F) -> Duration {
        f();
        self.0
    }
}

/// Hands out the given durations in order, one per call.
///
/// # Panics
///
/// When asked to time more calls than it has durations for.
#[derive(Clone, Debug)]
pub struct ScriptedStopwatch(VecDeque<Duration>);

impl ScriptedStopwatch {
    #[must_use]
    pub fn new(durations: impl IntoIterator<Item = Duration>) -> Self {
        Self(durations.into_iter().collect())
    }

    /// Durations not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl Stopwatch for ScriptedStopwatch {
    fn time<F: FnOnce()>(&mut self, f: F) -> Duration {
        f();
        self.0.pop_front().unwrap()
    }
}

/// Split captured report output into lines.
#[must_use]
pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}
