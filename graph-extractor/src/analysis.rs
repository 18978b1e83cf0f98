/*!
[Analysis]: the library entry point tying the Reader, Backbone Engine, Edge
Extractor, Parallel Driver and Output Writer together into the closed
transaction of spec §6 ("every analysis is a closed transaction from input
file to output files").
*/

use std::path::{Path, PathBuf};

use log::info;
use petgraph::graph::{DiGraph, UnGraph};
use sat_core::{Atom, Context};

use crate::backbone;
use crate::config::Config;
use crate::driver::Driver;
use crate::model::{candidate_set, Backbone, CnfFormula, ExcludesEdge, RequiresEdge, VariableTable};
use crate::progress::ProgressCounter;
use crate::reader;
use crate::types::err::{ErrorKind, LoadError};
use crate::writer;

/// The result of a completed analysis: everything needed to either write
/// output files or hand a caller in-process graphs (SPEC_FULL.md §2).
pub struct Analysis {
    pub max_atom: Atom,
    pub names: VariableTable,
    pub global_backbone: Backbone,
    pub requires: Vec<RequiresEdge>,
    pub excludes: Vec<ExcludesEdge>,
}

impl Analysis {
    /// Runs the whole pipeline of spec §2 against a DIMACS file: parse, load,
    /// compute the global backbone, partition and extract, in that order.
    pub fn run(input_path: &Path, config: &Config) -> Result<Self, ErrorKind> {
        let (formula, names) = reader::read_dimacs_file(input_path)?;
        Self::run_on_formula(formula, names, config)
    }

    /// The same pipeline, for callers who already have a parsed formula
    /// (e.g. embedding this crate behind a different front-end than the
    /// CLI - spec §1's external Parser/CLI collaborators).
    pub fn run_on_formula(formula: CnfFormula, names: VariableTable, config: &Config) -> Result<Self, ErrorKind> {
        config.validate()?;

        let max_atom = formula.max_atom;

        // A dedicated context computes the global backbone B* once, serially,
        // before any worker exists (spec §3: "computed exactly once per
        // analysis").
        let mut seed_context = Context::from_config(config.solver.clone());
        formula.load_into(&mut seed_context)?;
        let global_backbone = match backbone::compute(&mut seed_context, &[], config.algorithm)? {
            Backbone::Refuted => return Err(LoadError::Unsatisfiable.into()),
            fixed => fixed,
        };

        let candidates = candidate_set(max_atom, &names, &global_backbone);
        info!(
            target: "driver",
            "{} variables, {} candidates after excluding auxiliary/backbone members",
            max_atom,
            candidates.len()
        );

        let progress = ProgressCounter::new();
        let driver = Driver {
            formula: &formula,
            names: &names,
            global: &global_backbone,
            candidates: &candidates,
            solver_config: &config.solver,
            algorithm: config.algorithm,
            progress: progress.clone(),
        };

        let total = candidates.len();
        let result = std::thread::scope(|scope| {
            let worker = scope.spawn(|| driver.run(config.workers));
            crate::progress::watch(&progress, total, || !worker.is_finished());
            worker.join().unwrap_or_else(|_| {
                Err(sat_core::ErrorKind::Solve(sat_core::SolveError::UnknownAtom).into())
            })
        })?;

        Ok(Analysis {
            max_atom,
            names,
            global_backbone,
            requires: result.requires,
            excludes: result.excludes,
        })
    }

    /// The requires relation as an in-memory `petgraph` digraph
    /// (SPEC_FULL.md §2).
    pub fn requires_graph(&self) -> DiGraph<Atom, ()> {
        writer::build_requires_graph(self.max_atom, &self.requires)
    }

    /// The excludes relation as an in-memory `petgraph` undirected graph.
    pub fn excludes_graph(&self) -> UnGraph<Atom, ()> {
        writer::build_excludes_graph(self.max_atom, &self.excludes)
    }

    /// The core feature list: non-auxiliary variables forced true in every
    /// model (spec §3/§4.5).
    pub fn core(&self) -> Vec<Atom> {
        (1..=self.max_atom)
            .filter(|&v| !self.names.is_auxiliary(v) && self.global_backbone.value(v) == Some(true))
            .collect()
    }

    /// The dead feature list: non-auxiliary variables forced false in every
    /// model.
    pub fn dead(&self) -> Vec<Atom> {
        (1..=self.max_atom)
            .filter(|&v| !self.names.is_auxiliary(v) && self.global_backbone.value(v) == Some(false))
            .collect()
    }

    /// Writes the four Pajek/text files of spec §4.5 into `output_dir`,
    /// named from `basename`.
    pub fn write_to(&self, output_dir: &Path, basename: &str) -> Result<(), ErrorKind> {
        let requires = self.requires_graph();
        let excludes = self.excludes_graph();
        writer::write_outputs(
            output_dir,
            basename,
            self.max_atom,
            &self.names,
            &self.global_backbone,
            &requires,
            &excludes,
        )?;
        Ok(())
    }

    /// Runs the analysis against `input_path` and writes output to the
    /// directory/basename convention of spec §4.5/§6, returning the
    /// resolved output directory for display.
    pub fn run_and_write(input_path: &Path, config: &Config) -> Result<PathBuf, ErrorKind> {
        let analysis = Self::run(input_path, config)?;
        let output_dir = config
            .output_dir
            .clone()
            .unwrap_or_else(|| writer::default_output_dir(input_path));
        let basename = writer::basename_for(input_path);
        analysis.write_to(&output_dir, &basename)?;
        Ok(output_dir)
    }
}
