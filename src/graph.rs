use crate::error::{GraphError, Result};
use std::iter::{FusedIterator, Rev};
use std::slice;

/// A fixed-size directed graph over the vertices `0..vertex_count`.
///
/// Each vertex owns an adjacency list. Edges are only ever added, never
/// removed, and parallel edges and self-loops are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount);
        }

        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    /// Create a graph and insert `edges` in order. Stops at the first invalid edge.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count)?;
        for &(src, dest) in edges {
            graph.add_edge(src, dest)?;
        }
        Ok(graph)
    }

    /// Add the edge `src -> dest`.
    ///
    /// Both endpoints are checked before anything is stored, so a rejected
    /// edge leaves the graph untouched.
    pub fn add_edge(&mut self, src: usize, dest: usize) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;

        self.adjacency[src].push(dest);
        self.edge_count += 1;
        Ok(())
    }

    /// Direct successors of `vertex`, most recently inserted first.
    ///
    /// This is the order the sorter explores them in. An out-of-range vertex
    /// has no neighbors.
    pub fn neighbors(&self, vertex: usize) -> Neighbors<'_> {
        let list = self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice);
        Neighbors {
            inner: list.iter().rev(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// All edges, grouped by source in increasing order, each group in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(src, dests)| dests.iter().map(move |&dest| (src, dest)))
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.vertex_count() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }
}

/// Iterator over a vertex's successors, see [`Graph::neighbors`]
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Rev<slice::Iter<'a, usize>>,
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}
