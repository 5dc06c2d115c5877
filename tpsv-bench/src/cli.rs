// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Entry point shared by the `?tpsv` binaries.

use std::{env, io, process::ExitCode};

use clap::Parser as _;
use log::error;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{Args, Bench, Config, Error, Reference, Scalar, WallClock};

/// Parse the command line and environment, run the sweep with the
/// [`Reference`] routine, and report on stderr.
///
/// Exits with status 1 when the buffers cannot be allocated.
#[must_use]
pub fn main<T: Scalar>() -> ExitCode {
    let args = Args::parse();
    crate::log::init();

    let config = Config::resolve(&args, |key| env::var(key).ok());
    let rng = StdRng::seed_from_u64(config.seed);
    let mut bench = Bench::new(config, Reference, WallClock, rng);

    let result = bench.run::<T, _>(&mut io::stderr().lock());
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::OutOfMemory { elements }) => {
            error!("[{}] allocation of {elements:?} components failed", T::ROUTINE);
            eprintln!("Out of Memory!!");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
