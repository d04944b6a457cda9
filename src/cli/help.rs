// cli/help.rs — usage and version text.

use crate::cli::constants::PROGRAM_NAME;
use crate::config::ENV_NCPU;

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    eprintln!("Usage : ");
    eprintln!("      {} [arg] ", program);
    eprintln!();
    eprintln!("With no argument, prints the detected CPU core count. ");
    eprintln!("Arguments : ");
    eprintln!(" -a/--all : report every detection strategy individually ");
    eprintln!(" -v       : verbose mode; trace each strategy on stderr ");
    eprintln!(" -q       : suppress warnings ");
    eprintln!(" -V       : display version number and exit ");
    eprintln!(" -h       : display this help and exit ");
    eprintln!();
    eprintln!(
        "Setting {} to a positive integer overrides all probing. ",
        ENV_NCPU
    );
    eprintln!("When no strategy succeeds, 1 is printed. ");
}

/// Print the version banner to stdout.
pub fn print_version() {
    println!("*** {} v{} ***", PROGRAM_NAME, crate::version_string());
}
