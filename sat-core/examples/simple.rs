//! Direct use of [sat_core::Context] without any surrounding CLI or file
//! format: build a small formula by hand, solve it, and read the model.

use sat_core::structures::literal::CLiteral;
use sat_core::{Config, Context};

fn lit(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

fn main() {
    // p, q
    let mut context = Context::from_config(Config::default());
    context.ensure_atom(2);

    // -p or q  (p -> q)
    context.add_clause([lit(1, false), lit(2, true)]).unwrap();
    // p or q
    context.add_clause([lit(1, true), lit(2, true)]).unwrap();

    println!("Two clauses have been added: (-p v q) and (p v q).");

    match context.solve(&[]).unwrap() {
        sat_core::context::SolveResult::Satisfiable => {
            println!(
                "Satisfiable. p = {:?}, q = {:?}",
                context.value(1),
                context.value(2)
            );
        }
        sat_core::context::SolveResult::Unsatisfiable => {
            println!("Unsatisfiable");
        }
    }

    // Assuming p forces q, since p -> q is a clause.
    match context.solve(&[lit(1, true)]).unwrap() {
        sat_core::context::SolveResult::Satisfiable => {
            assert_eq!(context.value(2), Some(true));
            println!("Under assumption p: q is forced true, as expected.");
        }
        sat_core::context::SolveResult::Unsatisfiable => {
            println!("Unsatisfiable under assumption p");
        }
    }
}
