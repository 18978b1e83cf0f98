//! The round-trip laws of spec §8: worker-count invariance and
//! attention/plain algorithm equivalence, plus a determinism check.

use graph_extractor::model::{ExcludesEdge, RequiresEdge};
use graph_extractor::reader::read_dimacs;
use graph_extractor::{Algorithm, Analysis, Config};

/// A slightly larger formula than the boundary scenarios: a small feature
/// model with a chain of requires, a pair of mutually-exclusive variants,
/// and one core feature, big enough to split across more than one worker.
const FORMULA: &str = "\
c 1 root
c 2 base
c 3 variantA
c 4 variantB
c 5 addon
c 6 aux_choice
p cnf 6 6
1 0
-1 2 0
-2 6 0
-6 3 4 0
-3 -4 0
-5 2 0
";

fn sorted_requires(analysis: &Analysis) -> Vec<RequiresEdge> {
    let mut r = analysis.requires.clone();
    r.sort_by_key(|e| (e.from, e.to));
    r
}

fn sorted_excludes(analysis: &Analysis) -> Vec<ExcludesEdge> {
    let mut e = analysis.excludes.clone();
    e.sort_by_key(|edge| (edge.lo, edge.hi));
    e
}

#[test]
fn worker_count_does_not_change_the_edge_sets() {
    let (formula1, names1) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let single = Analysis::run_on_formula(formula1, names1, &Config { workers: 1, ..Config::default() }).unwrap();

    let (formula4, names4) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let multi = Analysis::run_on_formula(
        formula4,
        names4,
        &Config {
            workers: 4,
            ..Config::default()
        },
    )
    .unwrap();

    assert_eq!(sorted_requires(&single), sorted_requires(&multi));
    assert_eq!(sorted_excludes(&single), sorted_excludes(&multi));
    assert_eq!(single.core(), multi.core());
    assert_eq!(single.dead(), multi.dead());
}

#[test]
fn attention_and_plain_backbones_agree() {
    let (formula_a, names_a) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let attention = Analysis::run_on_formula(
        formula_a,
        names_a,
        &Config {
            algorithm: Algorithm::Attention,
            ..Config::default()
        },
    )
    .unwrap();

    let (formula_p, names_p) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let plain = Analysis::run_on_formula(
        formula_p,
        names_p,
        &Config {
            algorithm: Algorithm::Plain,
            ..Config::default()
        },
    )
    .unwrap();

    assert_eq!(sorted_requires(&attention), sorted_requires(&plain));
    assert_eq!(sorted_excludes(&attention), sorted_excludes(&plain));
}

#[test]
fn repeated_runs_are_deterministic() {
    let (formula_1, names_1) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let run1 = Analysis::run_on_formula(formula_1, names_1, &Config::default()).unwrap();

    let (formula_2, names_2) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let run2 = Analysis::run_on_formula(formula_2, names_2, &Config::default()).unwrap();

    assert_eq!(run1.requires, run2.requires);
    assert_eq!(run1.excludes, run2.excludes);
}

#[test]
fn excludes_pair_appears_exactly_once_with_smaller_endpoint_first() {
    let (formula, names) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let analysis = Analysis::run_on_formula(formula, names, &Config::default()).unwrap();
    let variant_pair = analysis
        .excludes
        .iter()
        .find(|e| (e.lo, e.hi) == (3, 4) || (e.lo, e.hi) == (4, 3))
        .expect("variantA/variantB exclude each other");
    assert_eq!((variant_pair.lo, variant_pair.hi), (3, 4));
    assert_eq!(
        analysis
            .excludes
            .iter()
            .filter(|e| e.lo == 3 && e.hi == 4)
            .count(),
        1
    );
}

#[test]
fn auxiliary_variable_never_appears_in_output() {
    let (formula, names) = read_dimacs(FORMULA.as_bytes()).unwrap();
    let analysis = Analysis::run_on_formula(formula, names, &Config::default()).unwrap();
    assert!(!analysis.requires.iter().any(|e| e.from == 6 || e.to == 6));
    assert!(!analysis.excludes.iter().any(|e| e.lo == 6 || e.hi == 6));
    assert!(!analysis.core().contains(&6));
    assert!(!analysis.dead().contains(&6));
}
