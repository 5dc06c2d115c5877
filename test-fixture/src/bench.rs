// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Common configuration for Criterion benchmarks.

use std::time::Duration;

use criterion::Criterion;

/// Set to 1% to detect small but meaningful changes in the kernel.
pub const NOISE_THRESHOLD: f64 = 0.01;

/// Sample size for small problems.
const SAMPLE_SIZE_SMALL: usize = 1000;

/// Sample size for problems large enough to fall out of cache.
const SAMPLE_SIZE_LARGE: usize = 100;

fn base_config(sample_size: usize, measurement_time: Option<Duration>) -> Criterion {
    let mut c = Criterion::default()
        .sample_size(sample_size)
        .noise_threshold(NOISE_THRESHOLD)
        .significance_level(0.01)
        .confidence_level(0.99);
    if let Some(dur) = measurement_time {
        c = c.measurement_time(dur);
    }
    c
}

/// Configuration for problems that fit in cache.
#[must_use]
pub fn config_small() -> Criterion {
    base_config(SAMPLE_SIZE_SMALL, None)
}

/// Configuration for large problems, where each call takes milliseconds.
#[must_use]
pub fn config_large() -> Criterion {
    base_config(SAMPLE_SIZE_LARGE, Some(Duration::from_secs(20)))
}
