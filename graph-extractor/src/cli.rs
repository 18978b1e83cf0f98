/*!
The CLI surface of spec §6 - an external collaborator per spec §1, specified
here only for interoperability with the rest of this binary. Mirrors
`sat_core`'s sibling CLI layout: a `clap` command built in its own module,
parsed by the binary's `main`.
*/

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

use crate::config::Config;

pub fn cli() -> Command {
    Command::new("graph-extractor")
        .about("Enumerates requires/excludes feature relationships in a CNF variability model via SAT backbone extraction.")
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The DIMACS CNF file to analyze."),
        )
        .arg(
            Arg::new("workers")
                .short('t')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("Worker thread count."),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Output directory (default: alongside the input file)."),
        )
        .arg(
            Arg::new("keep_intermediate")
                .short('k')
                .action(ArgAction::SetTrue)
                .help("Keep intermediate CNF when the input is not already CNF (no-op: this core only reads CNF)."),
        )
        .arg(
            Arg::new("plain")
                .long("plain-backbone")
                .action(ArgAction::SetTrue)
                .help("Use the plain one-by-one backbone algorithm (spec §4.2.b) instead of the attention-based default."),
        )
}

/// Builds the driver [Config] from parsed CLI arguments, and returns the
/// input path separately (it isn't part of `Config`).
pub fn config_from_args(matches: &clap::ArgMatches) -> (PathBuf, Config) {
    let input = matches.get_one::<PathBuf>("input").expect("required").clone();

    let mut config = Config {
        workers: *matches.get_one::<usize>("workers").unwrap_or(&1),
        output_dir: matches.get_one::<PathBuf>("output_dir").cloned(),
        keep_intermediate: matches.get_flag("keep_intermediate"),
        ..Config::default()
    };

    if matches.get_flag("plain") {
        config.algorithm = crate::config::Algorithm::Plain;
    }

    (input, config)
}
