use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::graph::Graph;

/// Run Dijkstra's algorithm over edge fuel cost and return the airports of the
/// cheapest path from `start` to `goal`, both included.
///
/// Ties are broken deterministically: the queue pops equal-cost entries in
/// airport-code order, neighbours are relaxed in code order, and a tentative
/// distance is only replaced by a strictly cheaper one.
///
/// Returns `None` when either endpoint is not in the graph or no path exists.
pub fn find_route_dijkstra<'a>(
    graph: &'a Graph,
    start: &'a str,
    goal: &'a str,
) -> Option<Vec<String>> {
    if !graph.contains_airport(start) || !graph.contains_airport(goal) {
        return None;
    }

    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut distances: HashMap<&'a str, f64> = HashMap::new();
    let mut parents: HashMap<&'a str, Option<&'a str>> = HashMap::new();
    let mut settled: HashSet<&'a str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.node) {
            continue;
        }

        if entry.node == goal {
            debug!(settled = settled.len(), cost = entry.cost.0, "dijkstra reached goal");
            return Some(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            if settled.contains(next) {
                continue;
            }

            let next_cost = entry.cost.0 + edge.fuel_cost();
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(settled = settled.len(), "dijkstra exhausted reachable airports");
    None
}

fn reconstruct_path(
    parents: &HashMap<&str, Option<&str>>,
    start: &str,
    goal: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then code.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
