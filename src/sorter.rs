//! Depth-first topological sort with cycle detection.
//!
//! Vertices are colored unvisited, in progress or finished. A vertex is
//! appended to the finish list once every successor is finished, and the
//! topological order is that list reversed. Reaching a vertex that is still
//! in progress means the edge closes a cycle, and the traversal stops there.

use crate::error::format_path;
use crate::graph::{Graph, Neighbors};
use crate::models::VertexTimes;
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Vertices of an acyclic graph in topological order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologicalOrder {
    order: Vec<usize>,
    times: Vec<VertexTimes>,
    /// Index into `order` of each vertex
    #[serde(skip)]
    rank: Vec<usize>,
}

impl TopologicalOrder {
    fn new(order: Vec<usize>, times: Vec<VertexTimes>) -> Self {
        let mut rank = vec![usize::MAX; order.len()];
        for (i, &v) in order.iter().enumerate() {
            if let Some(slot) = rank.get_mut(v) {
                *slot = i;
            }
        }
        Self { order, times, rank }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Index of `vertex` in the order
    pub fn position(&self, vertex: usize) -> Option<usize> {
        self.rank.get(vertex).copied().filter(|&i| i != usize::MAX)
    }

    /// Vertices in the order the traversal finished them
    pub fn finish_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().rev().copied()
    }

    pub fn times(&self, vertex: usize) -> Option<&VertexTimes> {
        self.times.get(vertex)
    }

    /// Clock readings for every vertex, indexed by vertex id
    pub fn all_times(&self) -> &[VertexTimes] {
        &self.times
    }

    /// Edges of `graph` whose source does not come before their destination
    pub fn violations(&self, graph: &Graph) -> Vec<(usize, usize)> {
        graph
            .edges()
            .filter(|&(src, dest)| match (self.position(src), self.position(dest)) {
                (Some(s), Some(d)) => s >= d,
                _ => true,
            })
            .collect()
    }
}

/// The graph has a cycle, so no topological order exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleDetected {
    back_edge: (usize, usize),
    path: Vec<usize>,
}

impl CycleDetected {
    /// The edge that reached a vertex still in progress
    pub fn back_edge(&self) -> (usize, usize) {
        self.back_edge
    }

    /// The cycle, starting and ending at the back edge's target
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

impl fmt::Display for CycleDetected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cycle {}", format_path(&self.path))
    }
}

/// Sort `graph` topologically.
///
/// Roots are tried in increasing vertex order and successors in
/// [`Graph::neighbors`] order, so the result is deterministic. The graph is
/// only read; each call starts from a fresh traversal state.
#[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn topological_sort(graph: &Graph) -> Result<TopologicalOrder, CycleDetected> {
    let mut traversal = Traversal::new(graph);

    for root in 0..graph.vertex_count() {
        if traversal.colors[root] == Color::Unvisited {
            debug!(root, "starting depth-first visit");
            traversal.visit_from(root)?;
        }
    }

    Ok(traversal.into_order())
}

/// Check whether `graph` has no cycle
pub fn is_acyclic(graph: &Graph) -> bool {
    topological_sort(graph).is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Finished,
}

/// A vertex on the traversal stack and the successors it has yet to look at
struct Frame<'g> {
    vertex: usize,
    pending: Neighbors<'g>,
}

struct Traversal<'g> {
    graph: &'g Graph,
    colors: Vec<Color>,
    times: Vec<VertexTimes>,
    clock: usize,
    finished: Vec<usize>,
    stack: Vec<Frame<'g>>,
}

impl<'g> Traversal<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            colors: vec![Color::Unvisited; n],
            times: vec![VertexTimes::default(); n],
            clock: 0,
            finished: Vec::with_capacity(n),
            stack: Vec::new(),
        }
    }

    /// Explore everything reachable from `root` that is still unvisited
    fn visit_from(&mut self, root: usize) -> Result<(), CycleDetected> {
        self.enter(root, None);

        while let Some(frame) = self.stack.last_mut() {
            let vertex = frame.vertex;
            match frame.pending.next() {
                Some(next) => match self.colors[next] {
                    Color::Unvisited => self.enter(next, Some(vertex)),
                    Color::InProgress => return Err(self.cycle_through(vertex, next)),
                    Color::Finished => {}
                },
                None => {
                    self.stack.pop();
                    self.finish(vertex);
                }
            }
        }

        Ok(())
    }

    fn enter(&mut self, vertex: usize, parent: Option<usize>) {
        self.colors[vertex] = Color::InProgress;
        self.times[vertex].discovered = self.tick();
        self.times[vertex].parent = parent;
        self.stack.push(Frame {
            vertex,
            pending: self.graph.neighbors(vertex),
        });
    }

    fn finish(&mut self, vertex: usize) {
        self.colors[vertex] = Color::Finished;
        self.times[vertex].finished = self.tick();
        self.finished.push(vertex);
        trace!(vertex, "finished");
    }

    fn tick(&mut self) -> usize {
        let now = self.clock;
        self.clock += 1;
        now
    }

    /// The stack holds the active path, so the cycle is its tail from `to`
    fn cycle_through(&self, from: usize, to: usize) -> CycleDetected {
        let mut path: Vec<usize> = self
            .stack
            .iter()
            .map(|frame| frame.vertex)
            .skip_while(|&v| v != to)
            .collect();
        path.push(to);

        debug!(from, to, cycle = %format_path(&path), "back edge found");
        CycleDetected {
            back_edge: (from, to),
            path,
        }
    }

    fn into_order(self) -> TopologicalOrder {
        let mut order = self.finished;
        order.reverse();
        TopologicalOrder::new(order, self.times)
    }
}
