use std::path::PathBuf;
use std::str::FromStr;

use ibex_sat::{
    config::{Config, Heuristic},
    context::Context,
    reports::Report,
};

mod cli;
mod console;
mod dot;
mod load;

use console::ConsoleSource;

fn main() {
    env_logger::init();

    let matches = cli::cli().get_matches();

    let heuristic = match matches.get_one::<String>("heuristic") {
        None => Heuristic::default(),
        Some(name) => match Heuristic::from_str(name) {
            Ok(heuristic) => heuristic,
            Err(issue) => {
                eprintln!("c {issue}");
                std::process::exit(1);
            }
        },
    };

    let paths: Vec<PathBuf> = match matches.get_many::<PathBuf>("paths") {
        Some(paths) => paths.cloned().collect(),
        None => Vec::new(),
    };

    let formula = match load::load_dimacs(paths) {
        Ok(formula) => formula,
        Err(issue) => {
            eprintln!("c Error loading DIMACS: {issue}");
            std::process::exit(1);
        }
    };

    let mut context = Context::from_config(Config { heuristic });
    if heuristic == Heuristic::Manual {
        context.set_decision_source(Box::new(ConsoleSource {}));
    }

    let report = match context.solve(&formula) {
        Ok(report) => report,
        Err(issue) => {
            eprintln!("c Context error: {issue}");
            std::process::exit(1);
        }
    };

    match report {
        Report::Satisfiable => {
            println!("s SATISFIABLE");
            if let Some(witness) = context.assignment() {
                let values: Vec<String> = witness
                    .iter()
                    .map(|(name, value)| match value {
                        true => name.clone(),
                        false => format!("-{name}"),
                    })
                    .collect();
                println!("v {}", values.join(" "));
            }
        }
        Report::Unsatisfiable => println!("s UNSATISFIABLE"),
        Report::Unknown => println!("s UNKNOWN"),
    }

    if matches.get_flag("stats") {
        let counters = &context.counters;
        println!("c decisions:    {}", counters.total_decisions);
        println!("c propagations: {}", counters.total_propagations);
        println!("c conflicts:    {}", counters.total_conflicts);
        println!("c backtracks:   {}", counters.total_backtracks);
    }

    if let Some(path) = matches.get_one::<PathBuf>("dot") {
        let rendered = dot::render(&context.graph, &formula);
        if std::fs::write(path, rendered).is_err() {
            eprintln!("c COULD NOT WRITE {}", path.display());
            std::process::exit(1);
        }
    }

    match report {
        Report::Satisfiable => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
        Report::Unknown => std::process::exit(0),
    }
}
