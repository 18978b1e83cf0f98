//! The Boundary Scenarios of spec §8, run end to end through [Analysis]
//! against small formulas built directly from DIMACS text.

use graph_extractor::model::{ExcludesEdge, RequiresEdge};
use graph_extractor::reader::read_dimacs;
use graph_extractor::{Analysis, Config};

fn analyze(dimacs: &str) -> Analysis {
    let (formula, names) = read_dimacs(dimacs.as_bytes()).expect("parses");
    Analysis::run_on_formula(formula, names, &Config::default()).expect("analyzes")
}

#[test]
fn scenario_a_single_mandatory_dependency() {
    // b -> a, i.e. (a v -b)
    let analysis = analyze("p cnf 2 1\n1 -2 0\n");
    assert!(analysis.core().is_empty());
    assert!(analysis.dead().is_empty());
    assert_eq!(analysis.requires, vec![RequiresEdge { from: 2, to: 1 }]);
    assert!(analysis.excludes.is_empty());
}

#[test]
fn scenario_b_mutual_exclusion() {
    let analysis = analyze("p cnf 2 1\n-1 -2 0\n");
    assert!(analysis.requires.is_empty());
    assert_eq!(analysis.excludes, vec![ExcludesEdge::new(1, 2)]);
    assert!(analysis.core().is_empty());
    assert!(analysis.dead().is_empty());
}

#[test]
fn scenario_c_core_feature() {
    let analysis = analyze("p cnf 1 1\n1 0\n");
    assert_eq!(analysis.core(), vec![1]);
    assert!(analysis.dead().is_empty());
    assert!(analysis.requires.is_empty());
    assert!(analysis.excludes.is_empty());
}

#[test]
fn scenario_d_dead_feature_via_chained_conflict() {
    let analysis = analyze("p cnf 2 2\n1 0\n-1 -2 0\n");
    assert_eq!(analysis.core(), vec![1]);
    assert_eq!(analysis.dead(), vec![2]);
    assert!(analysis.requires.is_empty());
    assert!(analysis.excludes.is_empty());
}

#[test]
fn scenario_e_transitive_requires() {
    // a v -b, b v -c : c -> b -> a and the transitive c -> a.
    let analysis = analyze("p cnf 3 2\n1 -2 0\n2 -3 0\n");
    let mut requires = analysis.requires.clone();
    requires.sort_by_key(|e| (e.from, e.to));
    assert_eq!(
        requires,
        vec![
            RequiresEdge { from: 2, to: 1 },
            RequiresEdge { from: 3, to: 1 },
            RequiresEdge { from: 3, to: 2 },
        ]
    );
    assert!(analysis.excludes.is_empty());
}

#[test]
fn scenario_f_auxiliary_suppression() {
    let dimacs = "c 1 a\nc 2 b\nc 3 aux_1\np cnf 3 2\n1 -3 0\n3 -2 0\n";
    let analysis = analyze(dimacs);
    assert_eq!(analysis.requires, vec![RequiresEdge { from: 2, to: 1 }]);
    assert!(analysis.excludes.is_empty());
}

#[test]
fn core_feature_survives_alongside_unconstrained_variables() {
    // var 1 is a unit/core fact; vars 2,3 are free beyond "at least one of
    // them holds" - the candidate-elimination loop must still decide var 1
    // is backbone-true even after it has made free decisions over 2,3.
    let analysis = analyze("p cnf 3 2\n1 0\n2 3 0\n");
    assert_eq!(analysis.core(), vec![1]);
    assert!(analysis.dead().is_empty());
}

#[test]
fn unsatisfiable_base_formula_is_a_load_error() {
    let (formula, names) = read_dimacs("p cnf 1 2\n1 0\n-1 0\n".as_bytes()).unwrap();
    let result = Analysis::run_on_formula(formula, names, &Config::default());
    assert!(result.is_err());
}
