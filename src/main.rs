use clap::Parser;
use std::process;
use toposort::cli::{Cli, Commands};
use toposort::cli_handlers;

fn main() {
    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo { cyclic, output } => cli_handlers::handle_demo(cyclic, output),
        Commands::Sort {
            vertices,
            edges,
            output,
        } => cli_handlers::handle_sort(vertices, &edges, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
