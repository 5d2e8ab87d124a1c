//! Shared test utilities for `graphkit-core`.

use graphkit_test_support::profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds the proptest configuration for a property suite, honouring the
/// `PROGTEST_CASES` and `GRAPHKIT_PBT_FORK` overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
