use crate::models::OutputStyle;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "toposort")]
#[command(about = "Depth-first topological sort with cycle detection")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the built-in nine-vertex example graph
    Demo {
        /// Add the edge 8 -> 4, which closes a cycle
        #[arg(long)]
        cyclic: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sort a graph given as edges on the command line
    Sort {
        /// Number of vertices, ids run from 0 to N-1
        #[arg(long, short = 'n')]
        vertices: usize,

        /// Edge as SRC:DEST, may be repeated
        #[arg(long = "edge", short = 'e', value_parser = parse_edge)]
        edges: Vec<(usize, usize)>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Output style
    #[arg(long, value_enum, env = "TOPOSORT_STYLE", default_value_t = OutputStyle::Arrow)]
    pub style: OutputStyle,

    /// Also print discovery and finish times of every vertex
    #[arg(long)]
    pub times: bool,
}

/// Parse `SRC:DEST` into a pair of vertex ids
pub fn parse_edge(s: &str) -> Result<(usize, usize), String> {
    let (src, dest) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SRC:DEST, got `{s}`"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("`{part}` is not a vertex id"))
    };

    Ok((parse(src)?, parse(dest)?))
}
