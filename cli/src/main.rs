// cli/src/main.rs

// Entry point for the graph CLI. Loads the graph file, then dispatches
// to the requested view or engine.

mod commands;
mod config;

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use commands::{Cli, Command};
use config::RankSettings;
use engine::{dijkstra, hops, rank, view};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let file = File::open(&cli.graph)
        .with_context(|| format!("opening graph file {}", cli.graph.display()))?;
    let mut graph = view::read_graph(BufReader::new(file))
        .with_context(|| format!("loading graph file {}", cli.graph.display()))?;
    info!(
        "loaded {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    match cli.command {
        Command::Show { output } => {
            view::show(&graph, output.as_deref())?;
        }
        Command::Rank {
            damping,
            delta,
            config_file,
        } => {
            let settings = match config_file {
                Some(path) => RankSettings::load(&path)?,
                None => RankSettings::default(),
            };
            let mut config = settings.into_config();
            if let Some(damping) = damping {
                config.damping = damping;
            }
            if let Some(delta) = delta {
                config.delta = delta;
            }
            let scores = rank(&mut graph, config)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            view::write_rank(&graph, &scores, &mut out)?;
            out.flush()?;
        }
        Command::Path {
            source,
            dest,
            hops: by_hops,
        } => {
            let run = if by_hops {
                hops(&graph, source.as_str())
            } else {
                dijkstra(&graph, source.as_str())
            };
            let Some(run) = run else {
                bail!("vertex '{source}' is not in the graph");
            };
            let Some(path) = run.path_to(&graph, dest.as_str()) else {
                bail!("no path from '{source}' to '{dest}'");
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            view::write_path(&path, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
