/*!
The Parallel Driver of spec §4.4/§5: partitions the candidate set across
worker threads, each owning one solver+engine instance, and aggregates their
edges deterministically.

Solvers are constructed and loaded **sequentially on the driver strand**
before any worker spawns (the "Critical initialization contract" of spec
§5) - encoded here by building every [sat_core::Context] inside
[Driver::run] itself, and only handing each worker an already-initialized,
owning `Context` (spec §9's "pre-initialization contract", never a raw
reference workers could race to construct from).
*/

use log::{debug, info};
use sat_core::{Atom, Config as SolverConfig, Context};

use crate::config::Algorithm;
use crate::extractor::{self, VariableEdges};
use crate::model::{Backbone, CnfFormula, ExcludesEdge, RequiresEdge, VariableTable};
use crate::progress::ProgressCounter;
use crate::types::err::{ConfigError, ErrorKind};

/// The aggregated result of one driver run, spec §4.4 step 7: partitions
/// concatenated in order, each partition's own edges in ascending `v`.
#[derive(Default, Debug)]
pub struct DriverResult {
    pub requires: Vec<RequiresEdge>,
    pub excludes: Vec<ExcludesEdge>,
}

/// Runs the edge extractor over `candidates`, spread across up to
/// `requested_workers` OS threads.
///
/// `requested_workers` must already have passed [crate::config::Config::validate];
/// this function re-derives `T_eff = min(requested, |candidates|)` per spec
/// §4.4 step 2 and otherwise trusts the caller.
pub struct Driver<'a> {
    pub formula: &'a CnfFormula,
    pub names: &'a VariableTable,
    pub global: &'a Backbone,
    pub candidates: &'a [Atom],
    pub solver_config: &'a SolverConfig,
    pub algorithm: Algorithm,
    pub progress: ProgressCounter,
}

impl<'a> Driver<'a> {
    /// Spec §4.4: build `T_eff` solvers sequentially, partition `candidates`
    /// into contiguous ranges, spawn one worker per partition, join, and
    /// concatenate in partition order. The first error in partition order
    /// wins (spec §4.4 step 8, §7).
    pub fn run(&self, requested_workers: usize) -> Result<DriverResult, ErrorKind> {
        if requested_workers < 1 {
            return Err(ConfigError::ZeroWorkers.into());
        }
        let effective = requested_workers.min(self.candidates.len().max(1));

        // Step 3: construct and load every solver sequentially, on this
        // (the driver) strand, before any worker is spawned.
        let mut contexts: Vec<Context> = Vec::with_capacity(effective);
        for _ in 0..effective {
            let mut context = Context::from_config(self.solver_config.clone());
            self.formula.load_into(&mut context).map_err(ErrorKind::from)?;
            contexts.push(context);
        }

        let partitions = partition(self.candidates, effective);
        debug!(
            target: "driver",
            "{} candidates split across {} workers: {:?}",
            self.candidates.len(),
            effective,
            partitions.iter().map(|p| p.len()).collect::<Vec<_>>()
        );

        let names = self.names;
        let global = self.global;
        let algorithm = self.algorithm;
        let progress = &self.progress;

        let outcomes: Vec<Result<Vec<(Atom, VariableEdges)>, ErrorKind>> = std::thread::scope(|scope| {
            let handles: Vec<_> = contexts
                .iter_mut()
                .zip(partitions.iter())
                .map(|(context, partition)| {
                    scope.spawn(move || {
                        let mut local = Vec::with_capacity(partition.len());
                        for &v in partition.iter() {
                            let edges = extractor::edges_for_variable(context, v, names, global, algorithm)?;
                            local.push((v, edges));
                            progress.increment();
                        }
                        Ok(local)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|_| Err(ErrorKind::from(sat_core::ErrorKind::Solve(
                    sat_core::SolveError::UnknownAtom,
                )))))
                .collect()
        });

        // Step 8: surface the first error in partition order.
        let mut result = DriverResult::default();
        for outcome in outcomes {
            let worker_edges = outcome?;
            for (_, edges) in worker_edges {
                result.requires.extend(edges.requires);
                result.excludes.extend(edges.excludes);
            }
        }

        info!(
            target: "driver",
            "{} requires edges, {} excludes edges",
            result.requires.len(),
            result.excludes.len()
        );
        Ok(result)
    }
}

/// Spec §4.4 step 4: `T_eff` contiguous ranges of size `|C| / T_eff`,
/// distributing the remainder one extra element to the first `|C| mod T_eff`
/// partitions.
fn partition(candidates: &[Atom], workers: usize) -> Vec<Vec<Atom>> {
    if candidates.is_empty() {
        return vec![Vec::new(); workers];
    }
    let base = candidates.len() / workers;
    let remainder = candidates.len() % workers;

    let mut result = Vec::with_capacity(workers);
    let mut offset = 0;
    for i in 0..workers {
        let size = base + usize::from(i < remainder);
        result.push(candidates[offset..offset + size].to_vec());
        offset += size;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_distribute_remainder_to_first_workers() {
        let candidates: Vec<Atom> = (1..=10).collect();
        let parts = partition(&candidates, 3);
        assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![4, 3, 3]);
        assert_eq!(parts.iter().flatten().copied().collect::<Vec<_>>(), candidates);
    }

    #[test]
    fn single_worker_gets_everything() {
        let candidates: Vec<Atom> = (1..=5).collect();
        let parts = partition(&candidates, 1);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], candidates);
    }

    #[test]
    fn more_workers_than_candidates_is_not_this_fns_job() {
        // Driver::run caps T_eff before calling partition; partition itself
        // tolerates it by handing out empty tails.
        let candidates: Vec<Atom> = (1..=2).collect();
        let parts = partition(&candidates, 2);
        assert_eq!(parts, vec![vec![1], vec![2]]);
    }
}
