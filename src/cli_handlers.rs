use crate::cli::OutputArgs;
use crate::error::{Result as GraphResult, format_path};
use crate::graph::Graph;
use crate::models::{OutputStyle, SortReport};
use crate::sorter::{CycleDetected, TopologicalOrder, topological_sort};
use anyhow::{Context, Result};

pub const EXAMPLE_VERTICES: usize = 9;

/// Edges of the demo graph, in insertion order
pub const EXAMPLE_EDGES: [(usize, usize); 12] = [
    (2, 1),
    (1, 0),
    (0, 6),
    (0, 8),
    (3, 7),
    (4, 0),
    (4, 1),
    (4, 5),
    (4, 8),
    (6, 8),
    (7, 8),
    (7, 6),
];

/// Added by `demo --cyclic`
pub const CYCLE_EDGE: (usize, usize) = (8, 4);

/// Build the demo graph, optionally with the edge that closes a cycle
pub fn example_graph(cyclic: bool) -> GraphResult<Graph> {
    let mut graph = Graph::from_edges(EXAMPLE_VERTICES, &EXAMPLE_EDGES)?;
    if cyclic {
        graph.add_edge(CYCLE_EDGE.0, CYCLE_EDGE.1)?;
    }
    Ok(graph)
}

/// Handle the demo command
pub fn handle_demo(cyclic: bool, output: OutputArgs) -> Result<()> {
    let graph = example_graph(cyclic).context("building example graph")?;
    print!("{}", sort_and_render(&graph, output)?);
    Ok(())
}

/// Handle the sort command
pub fn handle_sort(vertices: usize, edges: &[(usize, usize)], output: OutputArgs) -> Result<()> {
    let mut graph = Graph::new(vertices).context("building graph")?;
    for &(src, dest) in edges {
        graph
            .add_edge(src, dest)
            .with_context(|| format!("adding edge {src}:{dest}"))?;
    }

    print!("{}", sort_and_render(&graph, output)?);
    Ok(())
}

/// Sort `graph` and format the outcome for the terminal.
///
/// Vertex times are included only when `output.times` is set, and never for
/// a cyclic graph since the traversal stopped before finishing.
pub fn sort_and_render(graph: &Graph, output: OutputArgs) -> Result<String> {
    let result = topological_sort(graph);
    tracing::info!(acyclic = result.is_ok(), "sort finished");

    match output.style {
        OutputStyle::Json => {
            let mut json = serde_json::to_string_pretty(&SortReport::new(&result, output.times))
                .context("serializing report")?;
            json.push('\n');
            Ok(json)
        }
        style => match &result {
            Ok(order) => Ok(render_order(order, style, output.times)),
            Err(cycle) => Ok(render_cycle(cycle)),
        },
    }
}

fn render_order(order: &TopologicalOrder, style: OutputStyle, with_times: bool) -> String {
    let mut out = String::from("Topological order of the vertices:\n");
    let line = order
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(style.separator());
    out.push_str(&line);
    out.push('\n');

    if with_times {
        out.push_str("Discovery/finish times:\n");
        for (vertex, times) in order.all_times().iter().enumerate() {
            let origin = match times.parent {
                Some(parent) => format!("from {parent}"),
                None => "root".to_string(),
            };
            out.push_str(&format!(
                "  {vertex}: {}/{} ({origin})\n",
                times.discovered, times.finished
            ));
        }
    }

    out
}

fn render_cycle(cycle: &CycleDetected) -> String {
    format!(
        "Graph is cyclic, topological sort is not possible\nCycle: {}\n",
        format_path(cycle.path())
    )
}
