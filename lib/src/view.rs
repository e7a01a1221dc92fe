// lib/src/view.rs

//! Text surfaces of the engine: the human-readable dump (and its replay
//! loader), the rank view and the path view. The dump lists every vertex
//! key in canonical order, then one `"<from> <to> <weight>"` line per
//! edge, newline-terminated.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use models::{GraphResult, ValidationError, VertexKey};

use crate::engine::Graph;
use crate::rank::RankScores;

/// Write the dump of a graph to any writer.
pub fn write_graph<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    for key in graph.vertices() {
        writeln!(out, "{key}")?;
    }
    for edge in graph.edges() {
        writeln!(out, "{edge}")?;
    }
    Ok(())
}

/// Write the dump to the given file, or to stdout when no path is given.
/// The file handle is released on every exit path; I/O failures
/// propagate to the caller.
pub fn show(graph: &Graph, path: Option<&Path>) -> GraphResult<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            write_graph(graph, &mut file)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_graph(graph, &mut out)?;
        }
    }
    Ok(())
}

/// Rebuild a graph from dump-format input by replaying `add_vertex` /
/// `add_edge` calls. Blank lines and `#` comments are skipped; anything
/// that is neither a bare key nor a `from to weight` triple is a
/// [`ValidationError::InvalidRecord`].
pub fn read_graph<R: BufRead>(input: R) -> GraphResult<Graph> {
    let mut graph = Graph::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(key), None, _, _) => {
                graph.add_vertex(key);
            }
            (Some(from), Some(to), Some(weight), None) => {
                let weight: u64 = weight
                    .parse()
                    .map_err(|_| ValidationError::InvalidRecord(line.to_string()))?;
                graph.add_edge(from, to, weight);
            }
            _ => return Err(ValidationError::InvalidRecord(line.to_string()).into()),
        }
    }
    Ok(graph)
}

/// Write one `"<key> (<rank to 3 decimals>)"` line per vertex, in the
/// graph's canonical (post-sort) order.
pub fn write_rank<W: Write>(graph: &Graph, scores: &RankScores, out: &mut W) -> io::Result<()> {
    for (key, score) in scores.iter(graph) {
        writeln!(out, "{key} ({score:.3})")?;
    }
    Ok(())
}

/// Write a reconstructed path as `"v1 -> v2 -> ... -> vN"` with a
/// trailing newline.
pub fn write_path<W: Write>(path: &[VertexKey], out: &mut W) -> io::Result<()> {
    let keys: Vec<&str> = path.iter().map(VertexKey::as_ref).collect();
    writeln!(out, "{}", keys.join(" -> "))
}
