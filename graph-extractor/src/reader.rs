/*!
The DIMACS Reader of spec §2/§6: parses a CNF file into a [CnfFormula] plus a
[VariableTable], following `sat_core`'s own `read_dimacs` parser in shape
(preamble loop, then a formula loop, one token at a time) but additionally
recording the `c <var> <name…>` naming convention spec §6 describes.
*/

use std::io::BufRead;
use std::path::Path;

use log::debug;
use sat_core::structures::literal::CLiteral;
use sat_core::Atom;

use crate::model::{CnfFormula, VariableTable};
use crate::types::err::LoadError;

/// Parses a DIMACS CNF file at `path` into a formula and its name/aux table.
///
/// Does not check satisfiability - that is the caller's job (typically: load
/// into a [sat_core::Context] and run one solve), since spec §7 treats an
/// unsatisfiable base formula as a load error surfaced only once the global
/// backbone is attempted.
pub fn read_dimacs_file(path: &Path) -> Result<(CnfFormula, VariableTable), LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_dimacs(std::io::BufReader::new(file))
}

/// Parses DIMACS CNF text from any buffered reader - the file-path wrapper
/// above is a convenience for the common case, tests exercise this directly
/// against in-memory byte strings.
pub fn read_dimacs(mut reader: impl BufRead) -> Result<(CnfFormula, VariableTable), LoadError> {
    let mut max_atom: Option<Atom> = None;
    let mut clause_count_hint = 0usize;
    let mut names = VariableTable::default();
    let mut clauses: Vec<Vec<CLiteral>> = Vec::new();
    let mut current: Vec<CLiteral> = Vec::new();

    let mut buffer = String::with_capacity(256);
    let mut line_no = 0usize;

    loop {
        buffer.clear();
        let read = reader.read_line(&mut buffer).map_err(|source| LoadError::Io {
            path: std::path::PathBuf::new(),
            source,
        })?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buffer.trim_end();

        match line.chars().next() {
            None => continue,
            Some('c') => {
                if let Some((var, tail)) = parse_name_comment(line) {
                    names.name(var, tail);
                }
            }
            Some('p') => {
                if max_atom.is_some() {
                    return Err(LoadError::DuplicateHeader { line: line_no });
                }
                let mut fields = line.split_whitespace();
                fields.next(); // "p"
                let cnf_tag = fields.next();
                let declared_atoms = fields.next();
                let declared_clauses = fields.next();
                match (cnf_tag, declared_atoms, declared_clauses) {
                    (Some("cnf"), Some(v), Some(c)) => {
                        let v: Atom = v
                            .parse()
                            .map_err(|_| LoadError::MalformedHeader { line: line_no })?;
                        let c: usize = c
                            .parse()
                            .map_err(|_| LoadError::MalformedHeader { line: line_no })?;
                        names.grow_to(v);
                        max_atom = Some(v);
                        clause_count_hint = c;
                    }
                    _ => return Err(LoadError::MalformedHeader { line: line_no }),
                }
            }
            _ => {
                if max_atom.is_none() {
                    return Err(LoadError::MissingHeader);
                }
                for token in line.split_whitespace() {
                    let value: isize = token
                        .parse()
                        .map_err(|_| LoadError::MalformedClause {
                            line: line_no,
                            token: token.to_string(),
                        })?;
                    if value == 0 {
                        clauses.push(std::mem::take(&mut current));
                    } else {
                        let literal = CLiteral::from_dimacs(value);
                        if literal.atom() > max_atom.unwrap_or(0) {
                            names.grow_to(literal.atom());
                            max_atom = Some(literal.atom());
                        }
                        current.push(literal);
                    }
                }
            }
        }
    }

    let max_atom = max_atom.ok_or(LoadError::MissingHeader)?;
    if !current.is_empty() {
        return Err(LoadError::ClauseAfterTerminator { line: line_no });
    }

    debug!(
        target: "reader",
        "parsed {} clauses over {} declared atoms ({} expected)",
        clauses.len(),
        max_atom,
        clause_count_hint
    );

    Ok((CnfFormula { max_atom, clauses }, names))
}

/// Matches `c <var> <name tokens…>` and returns `(var, tail)`. Any other
/// comment (including a bare `c`) is ignored.
fn parse_name_comment(line: &str) -> Option<(Atom, &str)> {
    let rest = line.strip_prefix('c')?;
    let rest = rest.strip_prefix(' ')?;
    let rest = rest.trim_start();
    let space = rest.find(char::is_whitespace)?;
    let (var_token, tail) = rest.split_at(space);
    let var: Atom = var_token.parse().ok()?;
    Some((var, tail.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_clauses() {
        let input = b"c a tiny formula\np cnf 3 2\n1 -2 0\n2 3 0\n";
        let (formula, names) = read_dimacs(&input[..]).unwrap();
        assert_eq!(formula.max_atom, 3);
        assert_eq!(formula.clauses.len(), 2);
        assert_eq!(formula.clauses[0].len(), 2);
        assert!(!names.is_auxiliary(1));
    }

    #[test]
    fn clauses_may_span_multiple_lines() {
        let input = b"p cnf 2 1\n1\n-2\n0\n";
        let (formula, _) = read_dimacs(&input[..]).unwrap();
        assert_eq!(formula.clauses.len(), 1);
        assert_eq!(formula.clauses[0].len(), 2);
    }

    #[test]
    fn names_and_aux_prefix() {
        let input = b"c 1 a\nc 2 b\nc 3 aux_1\np cnf 3 2\n1 -3 0\n3 -2 0\n";
        let (_, names) = read_dimacs(&input[..]).unwrap();
        assert_eq!(names.display_name(1), "a");
        assert_eq!(names.display_name(2), "b");
        assert!(names.is_auxiliary(3));
        assert!(!names.is_auxiliary(1));
    }

    #[test]
    fn duplicate_name_comments_are_joined() {
        let input = b"c 1 feature\nc 1 alpha\np cnf 1 0\n";
        let (_, names) = read_dimacs(&input[..]).unwrap();
        assert_eq!(names.display_name(1), "feature alpha");
    }

    #[test]
    fn missing_header_is_an_error() {
        let input = b"1 -2 0\n";
        assert!(matches!(read_dimacs(&input[..]), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn malformed_clause_token_is_an_error() {
        let input = b"p cnf 2 1\n1 banana 0\n";
        assert!(matches!(
            read_dimacs(&input[..]),
            Err(LoadError::MalformedClause { .. })
        ));
    }

    #[test]
    fn trailing_unterminated_clause_is_an_error() {
        let input = b"p cnf 2 1\n1 -2\n";
        assert!(matches!(
            read_dimacs(&input[..]),
            Err(LoadError::ClauseAfterTerminator { .. })
        ));
    }
}
