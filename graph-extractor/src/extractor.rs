/*!
The Edge Extractor of spec §4.3: for each candidate variable, compute its
conditional backbone and classify every forced literal as a requires or
excludes edge relative to the global backbone.
*/

use sat_core::{Atom, Context, ErrorKind};

use crate::backbone::{self, assume_true};
use crate::config::Algorithm;
use crate::model::{Backbone, ExcludesEdge, RequiresEdge, VariableTable};

/// Edges found for a single candidate `v`, in ascending `w` order (spec
/// §4.4 step 7: "ordering within a worker is by ascending v" relies on
/// callers processing candidates in order and concatenating these in turn).
#[derive(Default, Debug)]
pub struct VariableEdges {
    pub requires: Vec<RequiresEdge>,
    pub excludes: Vec<ExcludesEdge>,
}

/// Computes the backbone of `F ∧ {v}` and distills requires/excludes edges
/// against the global backbone `global`, per spec §4.3.
pub fn edges_for_variable(
    context: &mut Context,
    v: Atom,
    names: &VariableTable,
    global: &Backbone,
    algorithm: Algorithm,
) -> Result<VariableEdges, ErrorKind> {
    let conditional = backbone::compute(context, &assume_true(v), algorithm)?;
    let max_atom = names.max_atom();

    let mut edges = VariableEdges::default();
    if conditional.is_refuted() {
        // F ∧ {v} unsatisfiable: v is itself dead under F, which spec §3's
        // candidate definition rules out by construction. Defensive no-op.
        return Ok(edges);
    }

    for w in 1..=max_atom {
        if w == v || names.is_auxiliary(w) {
            continue;
        }
        let signed = conditional.signed(w);
        if signed == w as i64 && global.signed(w) == 0 {
            edges.requires.push(RequiresEdge { from: v, to: w });
        } else if signed == -(w as i64) && global.signed(w) != -(w as i64) && global.signed(v) != -(v as i64) && w >= v {
            edges.excludes.push(ExcludesEdge::new(v, w));
        }
    }

    edges.requires.sort();
    edges.excludes.sort();
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::candidate_set;
    use sat_core::structures::literal::CLiteral;
    use sat_core::Config;

    fn setup(max_atom: Atom, clauses: &[&[i64]]) -> Context {
        let mut context = Context::from_config(Config::default());
        context.ensure_atom(max_atom);
        for clause in clauses {
            let literals: Vec<CLiteral> = clause.iter().map(|&v| CLiteral::from_dimacs(v as isize)).collect();
            context.add_clause(literals).unwrap();
        }
        context
    }

    #[test]
    fn transitive_requires_chain() {
        // a v -b, b v -c : c -> b -> a, and the transitive c -> a.
        let mut context = setup(3, &[&[1, -2], &[2, -3]]);
        let names = VariableTable::new(3);
        let global = backbone::compute(&mut context, &[], Algorithm::Attention).unwrap();
        let candidates = candidate_set(3, &names, &global);
        assert_eq!(candidates, vec![1, 2, 3]);

        let edges = edges_for_variable(&mut context, 3, &names, &global, Algorithm::Attention).unwrap();
        let targets: Vec<Atom> = edges.requires.iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn excludes_edge_is_symmetric_and_deduplicated() {
        let mut context = setup(2, &[&[-1, -2]]);
        let names = VariableTable::new(2);
        let global = backbone::compute(&mut context, &[], Algorithm::Attention).unwrap();

        let edges_a = edges_for_variable(&mut context, 1, &names, &global, Algorithm::Attention).unwrap();
        assert_eq!(edges_a.excludes.len(), 1);
        assert_eq!(edges_a.excludes[0], ExcludesEdge::new(1, 2));

        // v=2 only ever sees the pair with w >= v satisfied for w=2..2, not
        // re-emitting {1,2} from the other endpoint.
        let edges_b = edges_for_variable(&mut context, 2, &names, &global, Algorithm::Attention).unwrap();
        assert!(edges_b.excludes.is_empty());
    }

    #[test]
    fn auxiliary_targets_are_suppressed() {
        // a v -aux, aux v -b : backbone of F∧b includes aux and a.
        let mut context = setup(3, &[&[1, -3], &[3, -2]]);
        let mut names = VariableTable::new(3);
        names.name(1, "a");
        names.name(2, "b");
        names.name(3, "aux_1");
        let global = backbone::compute(&mut context, &[], Algorithm::Attention).unwrap();

        let edges = edges_for_variable(&mut context, 2, &names, &global, Algorithm::Attention).unwrap();
        let targets: Vec<Atom> = edges.requires.iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![1]);
    }
}
