//! Binary entry point for the `corecount` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 2. [`run`] executes the detection chain and returns an exit code.
//!
//! Detection itself is best-effort: the process exits 0 whenever the
//! arguments were valid, printing the fallback of 1 if every strategy
//! failed. Only bad usage exits non-zero.

use corecount::cli::args::{parse_args, ParsedArgs};
use corecount::cli::constants::PROGRAM_NAME;
use corecount::counter::CpuCoreCounter;
use corecount::CpuCoreFinder;
use corecount::{displaylevel, displayout};

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, non-zero = error).
fn run(args: ParsedArgs) -> i32 {
    displaylevel!(
        3,
        "*** {} v{} ***\n",
        PROGRAM_NAME,
        corecount::version_string()
    );

    let counter = CpuCoreCounter::default();

    if args.report_all {
        // One line per strategy, then the effective count.
        for finder in counter.finders() {
            match finder.find() {
                Some(n) => displayout!("{:<24} {}\n", finder.label(), n),
                None => displayout!("{:<24} none\n", finder.label()),
            }
        }
        displayout!("{:<24} {}\n", "count", counter.count());
        return 0;
    }

    let count = counter.count();
    displaylevel!(3, "detected {} core(s)\n", count);
    displayout!("{}\n", count);
    0
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", PROGRAM_NAME, e);
            std::process::exit(1);
        }
    };

    // Help / version flags set exit_early; the caller should exit 0.
    if args.exit_early {
        std::process::exit(0);
    }

    std::process::exit(run(args));
}
