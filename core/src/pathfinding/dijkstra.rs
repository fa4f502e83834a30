use super::utils::{QueryResult, Route, reconstruct_path, travel_minutes};
use crate::error::RouteError;
use crate::graph::RouteGraph;
use crate::route_config::RouteConfig;
use rustc_hash::FxHashMap;
use std::{cmp::Ordering, collections::BinaryHeap};
use tracing::{debug, trace};

/// Best known way to reach an airport during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathInfo {
    distance: u64,
    hops: usize,
}

impl PathInfo {
    /// Shorter wins; at equal distance, fewer hops wins. Ties do not.
    fn improves_on(&self, best: Option<&PathInfo>) -> bool {
        match best {
            None => true,
            Some(best) => {
                self.distance < best.distance
                    || (self.distance == best.distance && self.hops < best.hops)
            }
        }
    }
}

/// Heap entry ordered by distance alone; hop count never affects pop order.
struct DijkstraNode<'a> {
    distance: u64,
    airport: &'a str,
}

impl PartialEq for DijkstraNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for DijkstraNode<'_> {}

impl PartialOrd for DijkstraNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other.distance.cmp(&self.distance)
    }
}

struct DijkstraState<'a> {
    heap: BinaryHeap<DijkstraNode<'a>>,
    records: FxHashMap<&'a str, PathInfo>,
    predecessors: FxHashMap<&'a str, &'a str>,
    expanded: usize,
}

impl<'a> DijkstraState<'a> {
    fn new(start: &'a str) -> Self {
        let mut heap = BinaryHeap::new();
        let mut records = FxHashMap::default();

        heap.push(DijkstraNode {
            distance: 0,
            airport: start,
        });
        records.insert(start, PathInfo { distance: 0, hops: 0 });

        Self {
            heap,
            records,
            predecessors: FxHashMap::default(),
            expanded: 0,
        }
    }

    fn visit_neighbor(&mut self, neighbor: &'a str, current: &'a str, candidate: PathInfo) {
        if !candidate.improves_on(self.records.get(neighbor)) {
            return;
        }

        trace!(
            airport = neighbor,
            via = current,
            distance = candidate.distance,
            hops = candidate.hops,
            "relaxed"
        );

        self.records.insert(neighbor, candidate);
        self.predecessors.insert(neighbor, current);
        self.heap.push(DijkstraNode {
            distance: candidate.distance,
            airport: neighbor,
        });
    }
}

/// Shortest route from `start` to `end`, preferring fewer hops at equal distance.
///
/// The whole component reachable from `start` is explored before the result
/// is read, since an equal-distance route with fewer hops may still be found
/// after `end` was first reached.
pub fn dijkstra_find_route(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    config: &RouteConfig,
) -> QueryResult {
    let (Some(start_airport), Some(end_airport)) = (graph.airport_key(start), graph.airport_key(end))
    else {
        debug!(start, end, "route query with unknown airport");
        return Err(RouteError::UnknownNode {
            start: start.to_string(),
            end: end.to_string(),
        });
    };

    let mut state = DijkstraState::new(start_airport);

    while let Some(DijkstraNode {
        distance,
        airport: current_airport,
    }) = state.heap.pop()
    {
        let Some(&current) = state.records.get(current_airport) else {
            continue;
        };
        // Superseded by a shorter entry that was already expanded
        if distance > current.distance {
            continue;
        }
        state.expanded += 1;

        let Some(neighbors) = graph.neighbors(current_airport) else {
            continue;
        };

        for (neighbor_airport, route_distance) in neighbors.iter() {
            // A route longer than u64::MAX is treated as unreachable
            let Some(distance) = current.distance.checked_add(route_distance) else {
                continue;
            };
            let candidate = PathInfo {
                distance,
                hops: current.hops + 1,
            };
            state.visit_neighbor(neighbor_airport, current_airport, candidate);
        }
    }

    let Some(&best) = state.records.get(end_airport) else {
        debug!(start, end, expanded = state.expanded, "no route found");
        return Err(RouteError::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        });
    };

    let path = reconstruct_path(&state.predecessors, start_airport, end_airport);
    debug!(
        start,
        end,
        distance = best.distance,
        hops = best.hops,
        expanded = state.expanded,
        "route found"
    );

    Ok(Route {
        path,
        total_distance: best.distance,
        hops: best.hops,
        minutes: travel_minutes(best.distance, config.cruise_speed),
    })
}
