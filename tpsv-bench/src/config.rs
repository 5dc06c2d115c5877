// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Run configuration: positional arguments plus `OPENBLAS_*` environment
//! overrides, resolved once at startup.

use std::{
    fmt::{self, Display},
    num::NonZeroUsize,
    str::FromStr,
};

use clap::Parser;
use log::{debug, warn};

use crate::sweep::Sizes;

/// Selects the stored triangle: `U`pper or `L`ower.
pub const UPLO: &str = "OPENBLAS_UPLO";
/// Selects the operation: `N`o transpose, `T`ranspose or `C`onjugate transpose.
pub const TRANS: &str = "OPENBLAS_TRANS";
/// Selects `U`nit or `N`on-unit diagonal.
pub const DIAG: &str = "OPENBLAS_DIAG";
/// Number of timed calls per problem size.
pub const LOOPS: &str = "OPENBLAS_LOOPS";
/// Distance between vector elements; negative walks the vector backwards.
pub const INCX: &str = "OPENBLAS_INCX";
/// Seed for the input generator.  Defaults to the process id.
pub const SEED: &str = "OPENBLAS_SEED";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Smallest problem size.
    #[arg(default_value_t = 1)]
    from: usize,

    /// Largest problem size.  Raised to `from` when smaller.
    #[arg(default_value_t = 200)]
    to: usize,

    /// Increment between problem sizes.
    #[arg(default_value = "1")]
    step: NonZeroUsize,
}

/// Everything a sweep needs, fixed for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub from: usize,
    /// Never less than `from`.
    pub to: usize,
    pub step: NonZeroUsize,
    pub uplo: char,
    pub trans: char,
    pub diag: char,
    /// Never zero.
    pub loops: u32,
    pub inc_x: isize,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            from: 1,
            to: 200,
            step: NonZeroUsize::MIN,
            uplo: 'U',
            trans: 'N',
            diag: 'U',
            loops: 1,
            inc_x: 1,
            seed: 0,
        }
    }
}

fn mode<E: Fn(&str) -> Option<String>>(env: &E, key: &str, default: char) -> char {
    env(key).and_then(|v| v.chars().next()).unwrap_or(default)
}

fn number<E, N>(env: &E, key: &str, default: N) -> N
where
    E: Fn(&str) -> Option<String>,
    N: FromStr + Display,
    N::Err: Display,
{
    let Some(value) = env(key) else {
        return default;
    };
    value.trim().parse().unwrap_or_else(|e| {
        warn!("Ignoring {key}={value:?}: {e}; using {default}");
        default
    })
}

impl Config {
    /// Combine the parsed arguments with overrides looked up through `env`,
    /// which is normally `|k| std::env::var(k).ok()`.
    pub fn resolve<E: Fn(&str) -> Option<String>>(args: &Args, env: E) -> Self {
        let mut loops = number(&env, LOOPS, 1_u32);
        if loops == 0 {
            warn!("{LOOPS} must be at least 1");
            loops = 1;
        }
        let config = Self {
            from: args.from,
            to: args.to.max(args.from),
            step: args.step,
            uplo: mode(&env, UPLO, 'U'),
            trans: mode(&env, TRANS, 'N'),
            diag: mode(&env, DIAG, 'U'),
            loops,
            inc_x: number(&env, INCX, 1),
            seed: number(&env, SEED, u64::from(std::process::id())),
        };
        debug!("Resolved {config:?}");
        config
    }

    /// The problem sizes visited by the sweep, in increasing order.
    #[must_use]
    pub const fn sizes(&self) -> Sizes {
        Sizes::new(self.from, self.to, self.step)
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "From : {:3}  To : {:3} Step = {:3} Uplo = {} Trans = {}  Diag = {} Loops={} Inc_x={}",
            self.from,
            self.to,
            self.step,
            self.uplo,
            self.trans,
            self.diag,
            self.loops,
            self.inc_x
        )
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use clap::Parser as _;

    use super::{Args, Config};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tpsv").chain(argv.iter().copied())).unwrap()
    }

    // `test_fixture::env` would pull in a second copy of this crate.
    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults() {
        let config = Config::resolve(&args(&[]), env(&[(super::SEED, "0")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn positional() {
        let config = Config::resolve(&args(&["10", "50", "5"]), env(&[]));
        assert_eq!(config.from, 10);
        assert_eq!(config.to, 50);
        assert_eq!(config.step.get(), 5);
    }

    #[test]
    fn end_clamped_to_start() {
        let config = Config::resolve(&args(&["30", "4"]), env(&[]));
        assert_eq!(config.from, 30);
        assert_eq!(config.to, 30);
    }

    #[test]
    fn zero_step_rejected() {
        assert!(Args::try_parse_from(["tpsv", "1", "10", "0"]).is_err());
    }

    #[test]
    fn malformed_size_rejected() {
        assert!(Args::try_parse_from(["tpsv", "ten"]).is_err());
    }

    #[test]
    fn environment_overrides() {
        let config = Config::resolve(
            &args(&[]),
            env(&[
                (super::UPLO, "Lower"),
                (super::TRANS, "T"),
                (super::DIAG, "n"),
                (super::LOOPS, "4"),
                (super::INCX, "-3"),
                (super::SEED, "77"),
            ]),
        );
        assert_eq!(config.uplo, 'L');
        assert_eq!(config.trans, 'T');
        assert_eq!(config.diag, 'n');
        assert_eq!(config.loops, 4);
        assert_eq!(config.inc_x, -3);
        assert_eq!(config.seed, 77);
    }

    #[test]
    fn empty_mode_keeps_default() {
        let config = Config::resolve(&args(&[]), env(&[(super::UPLO, "")]));
        assert_eq!(config.uplo, 'U');
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let config = Config::resolve(
            &args(&[]),
            env(&[(super::LOOPS, "many"), (super::INCX, "")]),
        );
        assert_eq!(config.loops, 1);
        assert_eq!(config.inc_x, 1);
    }

    #[test]
    fn zero_loops_clamped() {
        let config = Config::resolve(&args(&[]), env(&[(super::LOOPS, "0")]));
        assert_eq!(config.loops, 1);
    }

    #[test]
    fn seed_defaults_to_process_id() {
        let config = Config::resolve(&args(&[]), env(&[]));
        assert_eq!(config.seed, u64::from(std::process::id()));
    }

    #[test]
    fn summary() {
        let config = Config {
            from: 1,
            to: 200,
            step: NonZeroUsize::MIN,
            inc_x: -2,
            loops: 3,
            ..Config::default()
        };
        assert_eq!(
            config.to_string(),
            "From :   1  To : 200 Step =   1 Uplo = U Trans = N  Diag = U Loops=3 Inc_x=-2"
        );
    }
}
