// Integration tests for finder::env — the environment-variable override.
//
// Each test owns a distinct variable name; the test binary shares one
// process environment.

use std::env;
use std::num::NonZeroUsize;

use corecount::finder::{CpuCoreFinder, EnvFinder};

#[test]
fn positive_value_overrides() {
    env::set_var("CORECOUNT_IT_SET", "12");
    let finder = EnvFinder::with_var("CORECOUNT_IT_SET");
    assert_eq!(finder.find(), NonZeroUsize::new(12));
}

#[test]
fn unset_variable_is_unknown() {
    let finder = EnvFinder::with_var("CORECOUNT_IT_NEVER_SET");
    assert_eq!(finder.find(), None);
}

#[test]
fn whitespace_around_value_is_accepted() {
    env::set_var("CORECOUNT_IT_PADDED", " 5 ");
    let finder = EnvFinder::with_var("CORECOUNT_IT_PADDED");
    assert_eq!(finder.find(), NonZeroUsize::new(5));
}

#[test]
fn zero_and_negative_are_unknown() {
    env::set_var("CORECOUNT_IT_ZERO", "0");
    assert_eq!(EnvFinder::with_var("CORECOUNT_IT_ZERO").find(), None);

    env::set_var("CORECOUNT_IT_NEG", "-2");
    assert_eq!(EnvFinder::with_var("CORECOUNT_IT_NEG").find(), None);
}

#[test]
fn non_numeric_value_is_unknown() {
    env::set_var("CORECOUNT_IT_WORDS", "all of them");
    assert_eq!(EnvFinder::with_var("CORECOUNT_IT_WORDS").find(), None);
}

#[test]
fn default_finder_reads_the_documented_variable() {
    // The default constructor must watch CORECOUNT_NCPU specifically.
    env::set_var("CORECOUNT_NCPU", "9");
    assert_eq!(EnvFinder::new().find(), NonZeroUsize::new(9));
    env::remove_var("CORECOUNT_NCPU");
}
