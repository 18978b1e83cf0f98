/*!
The Output Writer of spec §4.5: Pajek `.net` requires/excludes graphs plus
plain-text core/dead lists.

Builds typed `petgraph` graphs first (SPEC_FULL.md §2's "Graph
representations") and walks those to serialize, rather than writing straight
from the edge lists the driver produced - this also backs
[Analysis::requires_graph](crate::analysis::Analysis::requires_graph) /
[excludes_graph](crate::analysis::Analysis::excludes_graph) for in-process
consumers who want a graph, not files.
*/

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use sat_core::Atom;

use crate::model::{Backbone, ExcludesEdge, RequiresEdge, VariableTable};
use crate::types::err::OutputError;

/// Builds the requires digraph over every variable `1..=max_atom`
/// (auxiliary variables are never edge endpoints, per spec §4.3, but still
/// occupy a node index so `petgraph::graph::NodeIndex(v - 1)` lines up with
/// 1-based atom numbers).
pub fn build_requires_graph(max_atom: Atom, edges: &[RequiresEdge]) -> DiGraph<Atom, ()> {
    let mut graph = DiGraph::with_capacity(max_atom as usize, edges.len());
    for atom in 1..=max_atom {
        graph.add_node(atom);
    }
    for edge in edges {
        graph.add_edge(node_index(edge.from), node_index(edge.to), ());
    }
    graph
}

/// Builds the excludes undirected graph, same node-indexing convention.
pub fn build_excludes_graph(max_atom: Atom, edges: &[ExcludesEdge]) -> UnGraph<Atom, ()> {
    let mut graph = UnGraph::with_capacity(max_atom as usize, edges.len());
    for atom in 1..=max_atom {
        graph.add_node(atom);
    }
    for edge in edges {
        graph.add_edge(node_index(edge.lo), node_index(edge.hi), ());
    }
    graph
}

/// `petgraph` node indices are 0-based; atoms are 1-based (spec §4.5).
fn node_index(atom: Atom) -> NodeIndex {
    NodeIndex::new(atom as usize - 1)
}

/// Writes the four output files of spec §4.5 to `output_dir`, named from
/// `basename`. No partial output: callers are expected to have already
/// aggregated every edge (spec §7: "No partial output files are written").
pub fn write_outputs(
    output_dir: &Path,
    basename: &str,
    max_atom: Atom,
    names: &VariableTable,
    global: &Backbone,
    requires: &DiGraph<Atom, ()>,
    excludes: &UnGraph<Atom, ()>,
) -> Result<(), OutputError> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    write_pajek_arcs(&output_dir.join(format!("{basename}__requires.net")), max_atom, names, requires)?;
    write_pajek_edges(&output_dir.join(format!("{basename}__excludes.net")), max_atom, names, excludes)?;
    write_variable_list(
        &output_dir.join(format!("{basename}__core.txt")),
        max_atom,
        names,
        global,
        true,
    )?;
    write_variable_list(
        &output_dir.join(format!("{basename}__dead.txt")),
        max_atom,
        names,
        global,
        false,
    )?;

    info!(target: "writer", "wrote 4 output files to {}", output_dir.display());
    Ok(())
}

fn open(path: &Path) -> Result<fs::File, OutputError> {
    fs::File::create(path).map_err(|source| OutputError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_vertices(file: &mut fs::File, path: &Path, max_atom: Atom, names: &VariableTable) -> Result<(), OutputError> {
    let err = |source| OutputError::WriteFile { path: path.to_path_buf(), source };
    writeln!(file, "*Vertices {max_atom}").map_err(err)?;
    for atom in 1..=max_atom {
        if names.is_auxiliary(atom) {
            continue;
        }
        writeln!(file, "{} \"{}\"", atom, names.display_name(atom)).map_err(err)?;
    }
    Ok(())
}

fn write_pajek_arcs(path: &Path, max_atom: Atom, names: &VariableTable, graph: &DiGraph<Atom, ()>) -> Result<(), OutputError> {
    let mut file = open(path)?;
    write_vertices(&mut file, path, max_atom, names)?;
    let err = |source| OutputError::WriteFile { path: path.to_path_buf(), source };
    writeln!(file, "*Arcs").map_err(err)?;
    for edge in graph.raw_edges() {
        let from = graph[edge.source()];
        let to = graph[edge.target()];
        writeln!(file, "{from} {to}").map_err(err)?;
    }
    Ok(())
}

fn write_pajek_edges(path: &Path, max_atom: Atom, names: &VariableTable, graph: &UnGraph<Atom, ()>) -> Result<(), OutputError> {
    let mut file = open(path)?;
    write_vertices(&mut file, path, max_atom, names)?;
    let err = |source| OutputError::WriteFile { path: path.to_path_buf(), source };
    writeln!(file, "*Edges").map_err(err)?;
    for edge in graph.raw_edges() {
        let from = graph[edge.source()];
        let to = graph[edge.target()];
        writeln!(file, "{from} {to}").map_err(err)?;
    }
    Ok(())
}

fn write_variable_list(
    path: &Path,
    max_atom: Atom,
    names: &VariableTable,
    global: &Backbone,
    positive: bool,
) -> Result<(), OutputError> {
    let mut file = open(path)?;
    let err = |source| OutputError::WriteFile { path: path.to_path_buf(), source };
    for atom in 1..=max_atom {
        if names.is_auxiliary(atom) {
            continue;
        }
        let matches = match (global.value(atom), positive) {
            (Some(true), true) => true,
            (Some(false), false) => true,
            _ => false,
        };
        if matches {
            writeln!(file, "{} \"{}\"", atom, names.display_name(atom)).map_err(err)?;
        }
    }
    Ok(())
}

/// Where output should land when `-o` was not given: alongside the input
/// file (spec §6).
pub fn default_output_dir(input_path: &Path) -> PathBuf {
    input_path
        .parent()
        .map(|p| p.to_path_buf())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The output basename derived from the input file's stem (spec §4.5).
pub fn basename_for(input_path: &Path) -> String {
    input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "formula".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::candidate_set;

    #[test]
    fn vertices_header_uses_max_atom_not_listed_count() {
        let mut names = VariableTable::new(3);
        names.name(3, "aux_helper");
        let requires = build_requires_graph(3, &[]);
        let excludes = build_excludes_graph(3, &[]);
        let dir = std::env::temp_dir().join(format!("ge-test-{}", std::process::id()));
        let global = Backbone::unconstrained(3);
        write_outputs(&dir, "f", 3, &names, &global, &requires, &excludes).unwrap();

        let contents = std::fs::read_to_string(dir.join("f__requires.net")).unwrap();
        assert!(contents.starts_with("*Vertices 3\n"));
        assert!(!contents.contains("aux_helper"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn core_and_dead_lists_split_by_polarity() {
        let names = VariableTable::new(2);
        let global = Backbone::Fixed(vec![0, 1, -2]);
        let dir = std::env::temp_dir().join(format!("ge-test-cd-{}", std::process::id()));
        let requires = build_requires_graph(2, &[]);
        let excludes = build_excludes_graph(2, &[]);
        write_outputs(&dir, "f", 2, &names, &global, &requires, &excludes).unwrap();

        let core = std::fs::read_to_string(dir.join("f__core.txt")).unwrap();
        let dead = std::fs::read_to_string(dir.join("f__dead.txt")).unwrap();
        assert!(core.contains("1 \"1\""));
        assert!(dead.contains("2 \"2\""));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn requires_and_excludes_round_trip_through_graphs() {
        let names = VariableTable::new(3);
        let global = Backbone::unconstrained(3);
        let _ = candidate_set(3, &names, &global);
        let requires = build_requires_graph(3, &[RequiresEdge { from: 3, to: 1 }]);
        let excludes = build_excludes_graph(3, &[ExcludesEdge::new(1, 2)]);
        assert_eq!(requires.edge_count(), 1);
        assert_eq!(excludes.edge_count(), 1);
    }
}
