//! Configuration of the integer sentinel used for marking "no direct edge" in
//! integer matrices at the library boundary.

use std::{env, fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

/// The environment variable used for overriding the default sentinel.
pub const SENTINEL_ENV_VAR: &str = "FLOYD_WARSHALL_INF";

/// The default sentinel value.
pub const DEFAULT_SENTINEL: i64 = 9999;

/// The integer value that represents an infinite distance in integer
/// matrices.
///
/// Note that the sentinel is only used when converting from and to integer
/// rows; it is never part of any arithmetic during relaxation. Callers must
/// convert both ways with the same sentinel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Sentinel(i64);

impl Sentinel {
    /// Creates a new sentinel with the specified value.
    ///
    /// Returns `None` for `i64::MAX` since that value is reserved for the
    /// internal representation of infinite distances and a caller using it
    /// would not be able to tell it apart from a finite `i64::MAX` weight.
    pub fn new(value: i64) -> Option<Self> {
        if value == i64::MAX {
            None
        } else {
            Some(Sentinel(value))
        }
    }

    /// Reads the sentinel from the `FLOYD_WARSHALL_INF` environment variable,
    /// falling back to the default when it is unset or invalid.
    pub fn from_env() -> Self {
        match env::var(SENTINEL_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                log::warn!(
                    "ignoring {}={:?}: {}, using default sentinel {}",
                    SENTINEL_ENV_VAR,
                    value,
                    err,
                    DEFAULT_SENTINEL,
                );
                Sentinel::default()
            }),
            Err(_) => Sentinel::default(),
        }
    }

    /// Returns the integer value of the sentinel.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl Default for Sentinel {
    fn default() -> Self {
        Sentinel(DEFAULT_SENTINEL)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Sentinel {
    type Err = InvalidSentinel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse().map_err(InvalidSentinel::Parse)?;
        Sentinel::new(value).ok_or(InvalidSentinel::Reserved)
    }
}

/// An error parsing a sentinel value.
#[derive(Debug, Error)]
pub enum InvalidSentinel {
    #[error("sentinel is not an integer: {0}")]
    Parse(#[from] ParseIntError),
    #[error("sentinel value {} is reserved", i64::MAX)]
    Reserved,
}
