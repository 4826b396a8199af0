use std::collections::BTreeSet;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use misgraph::io::{dot, graph6};
use misgraph::{is_independent_set, Branching, Graph, IndependentSetSolver, NodeId};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "misgraph")]
#[command(about = "Maximum independent set of a graph6-encoded graph", long_about = None)]
struct Cli {
    /// Graph in graph6 format, e.g. `DQc`
    graph6: String,

    /// Also print the graph in Graphviz DOT format
    #[arg(long, default_value_t = false)]
    dot: bool,

    /// Also print the graph re-encoded as graph6, without header
    #[arg(long, default_value_t = false)]
    canonical: bool,

    /// Output format for the result
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Branching strategy of the exact search
    #[arg(long, value_enum, default_value_t = Strategy::MaxDegree)]
    strategy: Strategy,

    /// Refuse graphs with more nodes than this; the search is exponential
    #[arg(long, default_value_t = 40)]
    max_nodes: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    MaxDegree,
    EveryNode,
}

impl From<Strategy> for Branching {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::MaxDegree => Branching::MaxDegree,
            Strategy::EveryNode => Branching::EveryNode,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    nodes: usize,
    edges: usize,
    independent_set: &'a BTreeSet<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dot: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let graph: Graph<usize, u32> = graph6::parse(cli.graph6.trim())
        .with_context(|| format!("failed to decode graph6 input {:?}", cli.graph6))?;

    if graph.node_count() > cli.max_nodes {
        anyhow::bail!(
            "graph has {} nodes, more than --max-nodes {}",
            graph.node_count(),
            cli.max_nodes
        );
    }

    let mis = IndependentSetSolver::new()
        .with_branching(cli.strategy.into())
        .solve(&graph);
    debug_assert!(is_independent_set(&graph, &mis));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => {
            let ids: Vec<String> = mis.iter().map(ToString::to_string).collect();
            writeln!(out, "[{}]", ids.join(" "))?;
            if cli.canonical {
                writeln!(out, "{}", graph6::encode(&graph))?;
            }
            if cli.dot {
                dot::write_dot(&graph, &mut out).context("failed to write DOT output")?;
            }
        }
        Format::Json => {
            let report = Report {
                nodes: graph.node_count(),
                edges: graph.edge_count() / 2,
                independent_set: &mis,
                graph6: cli.canonical.then(|| graph6::encode(&graph)),
                dot: cli.dot.then(|| dot::to_dot(&graph)),
            };
            serde_json::to_writer_pretty(&mut out, &report).context("failed to write JSON output")?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Installs a `RUST_LOG`-driven subscriber, defaulting to `info`.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}
