use std::collections::HashMap;

use itertools::Itertools;
use rand::RngCore;
use strum::IntoEnumIterator;

use super::{RoutePlanner, RouteRequest, validate_endpoints};
use crate::config::{FARES, ROUTING};
use crate::domain::{Line, RouteMode, RouteResult, StationId, StationRegistry};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Ride between neighbouring stations of one line
    Segment,
    /// Walk between interchange platforms
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: StationId,
    pub minutes: u32,
    pub kind: EdgeKind,
}

/// Undirected network graph: nodes are stations, edges are line segments and transfer
/// corridors weighted in travel minutes.
#[derive(Debug, Clone, Default)]
pub struct MetroGraph {
    adjacency: HashMap<StationId, Vec<Edge>>,
}

impl MetroGraph {
    pub fn from_registry(registry: &StationRegistry) -> Self {
        let settings = &ROUTING.graph;
        let mut graph = Self::default();

        for station in registry.stations() {
            graph.adjacency.entry(station.id).or_default();
        }

        for line in Line::iter() {
            for (a, b) in registry.line_sequence(line).iter().tuple_windows() {
                let (Some(sa), Some(sb)) = (registry.get(*a), registry.get(*b)) else {
                    continue;
                };
                let minutes = ((sa.distance_to(sb) * settings.minutes_per_unit).round() as u32).max(1);
                graph.connect(*a, *b, minutes, EdgeKind::Segment);
            }
        }

        for station in registry.stations() {
            for target in station.transfers {
                graph.connect(station.id, *target, settings.transfer_minutes, EdgeKind::Transfer);
            }
        }

        graph
    }

    fn connect(&mut self, a: StationId, b: StationId, minutes: u32, kind: EdgeKind) {
        for (from, to) in [(a, b), (b, a)] {
            let edges = self.adjacency.entry(from).or_default();
            if !edges.iter().any(|e| e.to == to) {
                edges.push(Edge { to, minutes, kind });
            }
        }
    }

    pub fn edges(&self, id: StationId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge(&self, from: StationId, to: StationId) -> Option<&Edge> {
        self.edges(from).iter().find(|e| e.to == to)
    }

    /// Cheapest station path under `mode`, or `None` when unreachable.
    pub fn shortest_path(
        &self,
        from: StationId,
        to: StationId,
        mode: RouteMode,
    ) -> Option<Vec<StationId>> {
        let penalty = ROUTING.graph.transfer_penalty;
        pathfinding::prelude::dijkstra(
            &from,
            |id| {
                self.edges(*id)
                    .iter()
                    .filter_map(|edge| match (mode, edge.kind) {
                        (RouteMode::Accessible, EdgeKind::Transfer) => None,
                        (RouteMode::FewestTransfers, EdgeKind::Transfer) => {
                            Some((edge.to, edge.minutes + penalty))
                        }
                        _ => Some((edge.to, edge.minutes)),
                    })
                    .collect::<Vec<_>>()
            },
            |id| *id == to,
        )
        .map(|(path, _cost)| path)
    }
}

/// Real shortest-path planner over a `MetroGraph`.
#[derive(Debug, Clone)]
pub struct GraphPlanner {
    registry: StationRegistry,
    graph: MetroGraph,
}

impl GraphPlanner {
    pub fn new(registry: StationRegistry) -> Self {
        let graph = MetroGraph::from_registry(&registry);
        Self { registry, graph }
    }
}

impl RoutePlanner for GraphPlanner {
    fn plan(
        &self,
        request: &RouteRequest<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<RouteResult, AppError> {
        validate_endpoints(request.from, request.to)?;
        let origin = self.registry.find_by_name(request.from)?;
        let destination = self.registry.find_by_name(request.to)?;

        let path = self
            .graph
            .shortest_path(origin.id, destination.id, request.mode)
            .ok_or_else(|| AppError::NoRoute {
                from: request.from.to_string(),
                to: request.to.to_string(),
            })?;

        let mut duration = 0;
        let mut transfers = 0;
        for (a, b) in path.iter().tuple_windows() {
            if let Some(edge) = self.graph.edge(*a, *b) {
                duration += edge.minutes;
                if edge.kind == EdgeKind::Transfer {
                    transfers += 1;
                }
            }
        }

        let stations = path
            .iter()
            .map(|id| self.registry.find(*id).map(|s| s.name.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteResult {
            from: request.from.to_string(),
            to: request.to.to_string(),
            duration,
            transfers,
            stations,
            cost: FARES.flat_fare,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn planner() -> GraphPlanner {
        GraphPlanner::new(StationRegistry::standard().unwrap())
    }

    fn plan(from: &str, to: &str, mode: RouteMode) -> Result<RouteResult, AppError> {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        planner().plan(&RouteRequest { from, to, mode }, &mut rng)
    }

    #[test]
    fn graph_links_lines_and_transfers_both_ways() {
        let registry = StationRegistry::standard().unwrap();
        let graph = MetroGraph::from_registry(&registry);

        let seg = graph.edge(StationId(2), StationId(1)).unwrap();
        assert_eq!(seg.kind, EdgeKind::Segment);
        assert_eq!(seg.minutes, 3);
        assert!(graph.edge(StationId(1), StationId(2)).is_some());

        let transfer = graph.edge(StationId(1), StationId(4)).unwrap();
        assert_eq!(transfer.kind, EdgeKind::Transfer);
        // Listed on both stations, stored once per direction
        assert_eq!(
            graph.edges(StationId(1)).iter().filter(|e| e.to == StationId(4)).count(),
            1
        );
    }

    #[test]
    fn cross_line_trip_uses_the_interchange() {
        let route = plan("Центральная", "Западная", RouteMode::Fastest).unwrap();
        assert_eq!(
            route.stations,
            vec!["Центральная", "Площадь Революции", "Западная"]
        );
        assert_eq!(route.transfers, 1);
        assert_eq!(route.duration, 4 + 3);
        assert_eq!(route.cost, 55);
    }

    #[test]
    fn same_line_trip_has_no_transfers() {
        let route = plan("Северная", "Южная", RouteMode::FewestTransfers).unwrap();
        assert_eq!(route.stations, vec!["Северная", "Центральная", "Южная"]);
        assert!(route.is_direct());
    }

    #[test]
    fn accessible_mode_refuses_transfers() {
        let result = plan("Северная", "Восточная", RouteMode::Accessible);
        assert!(matches!(result, Err(AppError::NoRoute { .. })));
        assert!(plan("Северная", "Восточная", RouteMode::Fastest).is_ok());
    }

    #[test]
    fn isolated_station_is_unreachable() {
        let result = plan("Центральная", "Театральная", RouteMode::Fastest);
        assert_eq!(
            result,
            Err(AppError::NoRoute {
                from: "Центральная".to_string(),
                to: "Театральная".to_string()
            })
        );
    }

    #[test]
    fn unknown_names_are_reported() {
        let result = plan("Центральная", "Атлантида", RouteMode::Fastest);
        assert_eq!(
            result,
            Err(AppError::UnknownStationName("Атлантида".to_string()))
        );
    }
}
