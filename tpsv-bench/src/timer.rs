// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::time::{Duration, Instant};

/// Measures how long a single call takes.
pub trait Stopwatch {
    fn time<F: FnOnce()>(&mut self, f: F) -> Duration;
}

impl<S: Stopwatch + ?Sized> Stopwatch for &mut S {
    fn time<F: FnOnce()>(&mut self, f: F) -> Duration {
        (**self).time(f)
    }
}

/// Samples the monotonic clock immediately before and after the call.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl Stopwatch for WallClock {
    fn time<F: FnOnce()>(&mut self, f: F) -> Duration {
        let start = Instant::now();
        f();
        start.elapsed()
    }
}
