//! Shared test utilities for `spreadsim-core`.

use proptest::test_runner::Config as ProptestConfig;
use spreadsim_test_support::proptest::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared run profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES`
/// interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}
