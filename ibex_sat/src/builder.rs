/*!
Methods to build a formula from DIMACS CNF input.

# Overview

The parser follows the conventional DIMACS format:

- Lines beginning `c` are comments, and are skipped.
- An optional line `p cnf <atoms> <clauses>` announces the expected counts.
  The counts are advisory, a mismatch is logged and otherwise ignored, though
  a problem line after the first clause is an error.
- Every other token is a non-zero integer literal, with negation written as a
  leading minus, or the clause terminator `0`.
- Clauses may span lines, and a final unterminated clause is accepted.

Atoms take the absolute value of their integer as their external name, so a
formula read from DIMACS and a formula built by hand with the same names
behave identically.

# Example

```rust
# use ibex_sat::structures::formula::Formula;
let formula = Formula::from_dimacs(
    "c a pigeonhole, of sorts
p cnf 2 3
 1  2 0
-1  2 0
 1 -2 0
",
)
.unwrap();

assert_eq!(formula.atom_count(), 2);
assert_eq!(formula.clause_count(), 3);
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets,
    structures::{formula::Formula, literal::Literal},
    types::err::{self, ErrorKind},
};

impl Formula {
    /// Builds a formula from a DIMACS CNF source.
    pub fn read_dimacs(reader: impl BufRead) -> Result<Formula, ErrorKind> {
        let mut formula = Formula::new();
        let mut literals: Vec<Literal> = Vec::new();

        let mut expected_atoms: Option<usize> = None;
        let mut expected_clauses: Option<usize> = None;

        for (offset, line) in reader.lines().enumerate() {
            let number = offset + 1;
            let line = match line {
                Ok(line) => line,
                Err(_) => return Err(err::ParseError::Line(number).into()),
            };
            let content = line.trim();

            if content.is_empty() || content.starts_with('c') {
                continue;
            }

            if content.starts_with('p') {
                if formula.clause_count() > 0 || !literals.is_empty() {
                    return Err(err::ParseError::MisplacedProblem(number).into());
                }
                let mut parts = content.split_whitespace();
                let counts = match (parts.next(), parts.next(), parts.next(), parts.next()) {
                    (Some("p"), Some("cnf"), Some(atoms), Some(clauses)) => {
                        match (atoms.parse(), clauses.parse()) {
                            (Ok(atoms), Ok(clauses)) => (atoms, clauses),
                            _ => return Err(err::ParseError::ProblemSpecification(number).into()),
                        }
                    }
                    _ => return Err(err::ParseError::ProblemSpecification(number).into()),
                };
                expected_atoms = Some(counts.0);
                expected_clauses = Some(counts.1);
                continue;
            }

            for token in content.split_whitespace() {
                let value: i64 = match token.parse() {
                    Ok(value) => value,
                    Err(_) => {
                        return Err(err::ParseError::Token(number, token.to_owned()).into())
                    }
                };

                if value == 0 {
                    formula.add_clause(std::mem::take(&mut literals))?;
                } else {
                    let name = value.unsigned_abs().to_string();
                    literals.push(formula.literal(&name, value > 0));
                }
            }
        }

        if !literals.is_empty() {
            formula.add_clause(std::mem::take(&mut literals))?;
        }

        if let Some(expected) = expected_atoms {
            if expected != formula.atom_count() {
                log::warn!(target: targets::PARSE, "Expected {expected} atoms, read {}", formula.atom_count());
            }
        }
        if let Some(expected) = expected_clauses {
            if expected != formula.clause_count() {
                log::warn!(target: targets::PARSE, "Expected {expected} clauses, read {}", formula.clause_count());
            }
        }

        Ok(formula)
    }

    /// As [read_dimacs](Formula::read_dimacs), over an in-memory string.
    pub fn from_dimacs(source: &str) -> Result<Formula, ErrorKind> {
        Formula::read_dimacs(source.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let formula = Formula::from_dimacs("c nothing\n\nc more nothing\n1 0\n").unwrap();
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn clauses_may_span_lines() {
        let formula = Formula::from_dimacs("1 2\n3 0\n").unwrap();
        assert_eq!(formula.clause_count(), 1);
        assert_eq!(formula.clause(0).unwrap().size(), 3);
    }

    #[test]
    fn a_late_problem_line_is_rejected() {
        let result = Formula::from_dimacs("1 0\np cnf 1 1\n");
        assert!(matches!(
            result,
            Err(ErrorKind::Parse(err::ParseError::MisplacedProblem(2)))
        ));
    }

    #[test]
    fn an_unreadable_token_is_located() {
        let result = Formula::from_dimacs("1 two 0\n");
        assert!(matches!(
            result,
            Err(ErrorKind::Parse(err::ParseError::Token(1, _)))
        ));
    }

    #[test]
    fn an_empty_clause_is_rejected_at_construction() {
        let result = Formula::from_dimacs("0\n");
        assert!(matches!(
            result,
            Err(ErrorKind::Formula(err::FormulaError::EmptyClause))
        ));
    }
}
