//! Direct library use, no CLI: load a tiny feature model, run the analysis,
//! and print its core/dead lists and requires/excludes edges.

use graph_extractor::reader::read_dimacs;
use graph_extractor::{Analysis, Config};

fn main() {
    let dimacs = "\
c 1 base
c 2 logging
c 3 metrics
c 4 tracing
p cnf 4 3
1 0
-1 2 0
-3 -4 0
";

    let (formula, names) = read_dimacs(dimacs.as_bytes()).expect("well-formed DIMACS");
    let analysis = Analysis::run_on_formula(formula, names, &Config::default()).expect("satisfiable formula");

    println!("core: {:?}", analysis.core());
    println!("dead: {:?}", analysis.dead());
    for edge in &analysis.requires {
        println!("requires: {} -> {}", edge.from, edge.to);
    }
    for edge in &analysis.excludes {
        println!("excludes: {} -- {}", edge.lo, edge.hi);
    }
}
