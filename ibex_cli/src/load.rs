use std::{
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};

use ibex_sat::{structures::formula::Formula, types::err::ErrorKind};
use xz2::read::XzDecoder;

/// Reads DIMACS from the given paths, concatenated as a single formula, or
/// from stdin when no path is given.
pub fn load_dimacs(paths: Vec<PathBuf>) -> Result<Formula, ErrorKind> {
    if paths.is_empty() {
        return Formula::read_dimacs(BufReader::new(std::io::stdin()));
    }

    let mut source = String::new();
    for path in paths {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(_) => {
                eprintln!("c COULD NOT LOAD {}", path.display());
                std::process::exit(1);
            }
        };

        let read = match path.extension() {
            Some(extension) if extension == "xz" => {
                XzDecoder::new(&file).read_to_string(&mut source)
            }
            _ => BufReader::new(&file).read_to_string(&mut source),
        };
        if read.is_err() {
            eprintln!("c COULD NOT READ {}", path.display());
            std::process::exit(1);
        }
        source.push('\n');
    }

    let formula = Formula::from_dimacs(&source)?;
    log::info!(
        "Loaded {} clauses over {} atoms",
        formula.clause_count(),
        formula.atom_count()
    );
    Ok(formula)
}
