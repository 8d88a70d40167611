use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("ibex_sat")
        .about("Determines whether a formula in conjunctive normal form is satisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(false)
            .trailing_var_arg(true)
            .num_args(0..)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to parse (as a single formula). Reads stdin when absent."))

        .arg(Arg::new("heuristic")
            .short('d')
            .long("heuristic")
            .required(false)
            .num_args(1)
            .help("The decision heuristic to use: simple (aka. lexicographic), dlis, or manual.
With manual, each decision is read interactively: enter an atom name to assign true, or !name to assign false."))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .required(false)
            .action(ArgAction::SetTrue)
            .help("Display counters from the solve (decisions, propagations, conflicts, backtracks)."))

        .arg(Arg::new("dot")
            .long("dot")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("Write the final implication graph to the given path, in DOT format.
On a satisfiable formula this is the graph of the witnessing trail, on an unsatisfiable formula the graph is empty."))
}
