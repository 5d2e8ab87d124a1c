//! Environment overrides for property-test suites.
//!
//! `PROGTEST_CASES` sets the number of cases per property and
//! `GRAPHKIT_PBT_FORK` runs each case in a forked subprocess. Malformed values
//! are logged and ignored.

use std::env;

/// Environment variable holding the per-property case count.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const FORK_ENV_KEY: &str = "GRAPHKIT_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the process environment.
    ///
    /// # Examples
    /// ```
    /// use graphkit_test_support::profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Reads the profile through `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            cases: override_or(CASES_ENV_KEY, &lookup, default_cases, parse_cases),
            fork: override_or(FORK_ENV_KEY, &lookup, default_fork, parse_switch),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
    parse: fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|| {
        tracing::warn!(env = key, raw = %raw, "ignoring malformed property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|&cases| cases > 0)
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
