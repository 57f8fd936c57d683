use crate::sorter::{CycleDetected, TopologicalOrder};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Clock readings recorded for a vertex by the depth-first traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VertexTimes {
    pub discovered: usize,
    pub finished: usize,
    /// Vertex the traversal came from, `None` for a traversal root
    pub parent: Option<usize>,
}

impl VertexTimes {
    /// True if `other`'s lifetime lies strictly inside this one
    pub fn encloses(&self, other: &VertexTimes) -> bool {
        self.discovered < other.discovered && other.finished < self.finished
    }
}

/// How the command line prints a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputStyle {
    /// `4 -> 5 -> 3`
    #[default]
    Arrow,
    /// `4 5 3`
    Space,
    /// Serialized report
    Json,
}

impl OutputStyle {
    pub fn separator(&self) -> &'static str {
        match self {
            OutputStyle::Arrow => " -> ",
            OutputStyle::Space | OutputStyle::Json => " ",
        }
    }
}

/// Serializable outcome of a sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SortReport {
    Sorted {
        order: Vec<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        times: Option<Vec<VertexTimes>>,
    },
    Cyclic {
        back_edge: (usize, usize),
        cycle: Vec<usize>,
    },
}

impl SortReport {
    /// Build a report, including the vertex times only if `with_times` is set
    pub fn new(result: &Result<TopologicalOrder, CycleDetected>, with_times: bool) -> Self {
        match result {
            Ok(order) => SortReport::Sorted {
                order: order.as_slice().to_vec(),
                times: with_times.then(|| order.all_times().to_vec()),
            },
            Err(cycle) => SortReport::Cyclic {
                back_edge: cycle.back_edge(),
                cycle: cycle.path().to_vec(),
            },
        }
    }
}
