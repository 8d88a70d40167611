use std::io::Write;

use ibex_sat::{procedures::decision::DecisionSource, structures::atom::Atom};

/// Interactive decisions from the console.
///
/// At each decision point the unassigned atoms are listed and a line is read:
/// an atom name assigns true, a name prefixed with `!` assigns false.
/// A blank line is re-prompted, anything else is passed through for the
/// solver to validate.
pub struct ConsoleSource {}

impl DecisionSource for ConsoleSource {
    fn decide(&mut self, unassigned: &[(Atom, &str)]) -> (String, bool) {
        let names: Vec<&str> = unassigned.iter().map(|(_, name)| *name).collect();
        println!("c Unassigned: {}", names.join(" "));

        loop {
            print!("c Decide (name for true, !name for false): ");
            let _flushed = std::io::stdout().flush();

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line).is_err() {
                eprintln!("c COULD NOT READ A DECISION");
                std::process::exit(1);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.strip_prefix('!') {
                Some(name) => return (name.trim().to_owned(), false),
                None => return (trimmed.to_owned(), true),
            }
        }
    }
}
