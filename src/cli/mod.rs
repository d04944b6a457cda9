//! Command-line front end for the `corecount` binary.

pub mod args;
pub mod constants;
pub mod help;
