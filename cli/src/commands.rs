// cli/src/commands.rs

// This file defines the command-line arguments and subcommands
// for the graph CLI using the `clap` crate.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "graph-cli",
    about = "Directed weighted graph toolkit: dump, rank scores, shortest paths"
)]
pub struct Cli {
    /// Graph file to load: one vertex key or one "from to weight" record
    /// per line (the dump format).
    #[clap(long, short = 'g', value_hint = clap::ValueHint::FilePath)]
    pub graph: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the vertices and edges of the graph.
    Show {
        /// Write to this file instead of stdout.
        #[clap(long, short = 'o', value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Compute rank scores and print them in descending order.
    Rank {
        #[clap(long)]
        damping: Option<f64>,
        #[clap(long)]
        delta: Option<f64>,
        /// TOML file with rank settings; flags override it.
        #[clap(long, value_hint = clap::ValueHint::FilePath)]
        config_file: Option<PathBuf>,
    },
    /// Print the shortest path between two vertices.
    Path {
        source: String,
        dest: String,
        /// Relax by hop count instead of edge weight.
        #[clap(long)]
        hops: bool,
    },
}
