// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lines written to the diagnostic stream.  Scripts parse these, so the
//! column widths are fixed.

use std::io::{self, Write};

use crate::{sweep::Measurement, Config};

pub const HEADER: &str = "   SIZE       Flops";

/// The resolved configuration, one line.
///
/// # Errors
///
/// When writing to `out` fails.
pub fn summary<W: Write + ?Sized>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(out, "{config}")
}

/// # Errors
///
/// When writing to `out` fails.
pub fn header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")
}

/// The start of a result line.  This goes out before the routine runs, so
/// a crash leaves the failing size on screen.
///
/// # Errors
///
/// When writing to `out` fails.
pub fn size<W: Write + ?Sized>(out: &mut W, n: usize) -> io::Result<()> {
    write!(out, " {n:6} : ")?;
    out.flush()
}

/// The rest of a result line: throughput and mean time per call.
///
/// # Errors
///
/// When writing to `out` fails.
pub fn result<W: Write + ?Sized>(out: &mut W, m: &Measurement) -> io::Result<()> {
    writeln!(
        out,
        " {:10.2} MFlops {:12.9} sec",
        m.mflops,
        m.mean.as_secs_f64()
    )
}
