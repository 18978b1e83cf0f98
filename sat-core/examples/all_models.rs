//! Enumerates every model of a small, clause-free formula by solving under
//! every possible assumption set.
//!
//! `add_clause` is only valid before the first `solve` (spec §4.1: the
//! clause database is immutable after load), so models are not enumerated
//! by learning blocking clauses between solves - that's the job of a
//! different kind of solver loop. Here, each solve call is independent and
//! differs only in its assumption set, which is exactly the pattern the
//! backbone engine (`graph-extractor::backbone`) relies on.

use sat_core::structures::literal::CLiteral;
use sat_core::{Config, Context};

fn main() {
    const ATOMS: u32 = 4;

    let mut context = Context::from_config(Config::default());
    context.ensure_atom(ATOMS);

    let mut count = 0usize;

    for bits in 0..(1u32 << ATOMS) {
        let assumptions: Vec<CLiteral> = (0..ATOMS)
            .map(|i| CLiteral::new(i + 1, (bits >> i) & 1 == 1))
            .collect();

        match context.solve(&assumptions).unwrap() {
            sat_core::context::SolveResult::Satisfiable => {
                count += 1;
                let rendering = assumptions
                    .iter()
                    .map(|l| l.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("model {count}: {rendering}");
            }
            sat_core::context::SolveResult::Unsatisfiable => {
                unreachable!("clause-free formula has no unsatisfiable assignment")
            }
        }
    }

    assert_eq!(count, 2usize.pow(ATOMS));
}
