use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use lanmap_core::Graph;

use crate::route::Route;

/// A candidate path in the open set.
#[derive(Debug, Clone)]
struct Candidate {
    /// Ordered device names from the origin to the candidate's tip.
    hops: Vec<String>,
    /// Cumulative weight of the path so far.
    weight: f64,
    /// Insertion sequence number, used to break ties deterministically.
    seq: u64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the cheapest candidate pops
        // first, with equal weights resolved in insertion order.
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Find the minimum-total-weight path from `origin` to `destination` over
/// an already-discovered graph, using uniform-cost search.
///
/// Returns `None` when the destination was never discovered or is
/// unreachable; both are normal outcomes, not failures. With non-negative
/// edge weights the first pop of the destination is the true minimum.
/// A destination equal to the origin resolves to the single-element path
/// at cost zero.
pub fn find_path(graph: &Graph, origin: &str, destination: &str) -> Option<Route> {
    // A never-discovered destination resolves immediately, without search.
    graph.find_vertex(destination)?;

    let mut open: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut closed: HashSet<String> = HashSet::new();
    let mut seq = 0u64;

    open.push(Candidate {
        hops: vec![origin.to_string()],
        weight: 0.0,
        seq,
    });

    while let Some(candidate) = open.pop() {
        let Some(current) = candidate.hops.last().cloned() else {
            continue;
        };

        if current == destination {
            let route = Route::new(candidate.hops, candidate.weight);
            tracing::debug!(%route, "resolved cheapest path");
            return Some(route);
        }

        // A cheaper or equal route through this device was already
        // finalized; the closed set never reopens.
        if !closed.insert(current.clone()) {
            continue;
        }

        let Some(vertex) = graph.find_vertex(&current) else {
            continue;
        };
        for edge in vertex.edges() {
            let next = edge.destination();
            // A path may not revisit a device within itself.
            if closed.contains(next) || candidate.hops.iter().any(|hop| hop == next) {
                continue;
            }
            seq += 1;
            let mut hops = candidate.hops.clone();
            hops.push(next.to_string());
            open.push(Candidate {
                hops,
                weight: candidate.weight + edge.weight(),
                seq,
            });
        }
    }

    tracing::debug!(origin, destination, "no path found");
    None
}
