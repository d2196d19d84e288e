use rand::RngCore;

use super::{RoutePlanner, RouteRequest, validate_endpoints};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{RouteMode, RouteResult};
use crate::error::AppError;

/// Pending origin/destination picks plus the last search outcome.
#[derive(Debug, Clone, Default)]
pub struct RouteSearch {
    origin: Option<String>,
    destination: Option<String>,
    mode: RouteMode,
    result: Option<RouteResult>,
    last_error: Option<AppError>,
}

impl RouteSearch {
    pub fn new(mode: RouteMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn mode(&self) -> RouteMode {
        self.mode
    }

    pub fn result(&self) -> Option<&RouteResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    pub fn set_origin(&mut self, name: impl Into<String>) {
        self.origin = Some(name.into());
    }

    pub fn set_destination(&mut self, name: impl Into<String>) {
        self.destination = Some(name.into());
    }

    /// Starts a new query from `name`: the previous outcome is dropped and a
    /// destination equal to `name` is cleared.
    pub fn preset_origin(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.destination.as_deref() == Some(name.as_str()) {
            self.destination = None;
        }
        self.origin = Some(name);
        self.result = None;
        self.last_error = None;
    }

    pub fn set_mode(&mut self, mode: RouteMode) {
        self.mode = mode;
    }

    pub fn can_swap(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }

    pub fn can_search(&self) -> bool {
        match (&self.origin, &self.destination) {
            (Some(from), Some(to)) => validate_endpoints(from, to).is_ok(),
            _ => false,
        }
    }

    /// Exchanges origin and destination. No-op unless both are set.
    pub fn swap(&mut self) -> bool {
        if !self.can_swap() {
            return false;
        }
        std::mem::swap(&mut self.origin, &mut self.destination);
        true
    }

    /// Runs the planner and replaces any previous result.
    pub fn search(
        &mut self,
        planner: &dyn RoutePlanner,
        rng: &mut dyn RngCore,
    ) -> Result<&RouteResult, AppError> {
        let (Some(from), Some(to)) = (self.origin.as_deref(), self.destination.as_deref()) else {
            return Err(AppError::IncompleteSelection);
        };

        let request = RouteRequest {
            from,
            to,
            mode: self.mode,
        };

        match planner.plan(&request, rng) {
            Ok(route) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_route_searches {
                    log::info!(
                        "Route {} -> {}: {} min, {} transfer(s), {} stops",
                        route.from,
                        route.to,
                        route.duration,
                        route.transfers,
                        route.stations.len()
                    );
                }
                self.last_error = None;
                Ok(self.result.insert(route))
            }
            Err(err) => {
                log::warn!("Route search failed: {}", err);
                self.result = None;
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationRegistry;
    use crate::routing::{GraphPlanner, MockPlanner};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn swap_is_its_own_inverse() {
        let mut search = RouteSearch::default();
        search.set_origin("Северная");
        search.set_destination("Лесная");

        assert!(search.swap());
        assert_eq!(search.origin(), Some("Лесная"));
        assert_eq!(search.destination(), Some("Северная"));

        assert!(search.swap());
        assert_eq!(search.origin(), Some("Северная"));
        assert_eq!(search.destination(), Some("Лесная"));
    }

    #[test]
    fn swap_needs_both_ends() {
        let mut search = RouteSearch::default();
        search.set_origin("Северная");
        assert!(!search.can_swap());
        assert!(!search.swap());
        assert_eq!(search.origin(), Some("Северная"));
        assert_eq!(search.destination(), None);
    }

    #[test]
    fn equal_or_missing_picks_disable_search() {
        let mut search = RouteSearch::default();
        assert!(!search.can_search());
        search.set_origin("Южная");
        assert!(!search.can_search());
        search.set_destination("Южная");
        assert!(!search.can_search());
        search.set_destination("Лесная");
        assert!(search.can_search());
    }

    #[test]
    fn central_to_theatre_end_to_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut search = RouteSearch::default();
        search.set_origin("Центральная");
        search.set_destination("Театральная");

        let route = search.search(&MockPlanner, &mut rng).unwrap();
        assert_eq!(
            route.stations,
            vec!["Центральная", "Площадь Революции", "Театральная"]
        );
        assert_eq!(route.cost, 55);
        assert!((10..=39).contains(&route.duration));
        assert!(route.transfers <= 2);
    }

    #[test]
    fn next_search_replaces_result() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut search = RouteSearch::default();
        search.set_origin("Центральная");
        search.set_destination("Театральная");
        search.search(&MockPlanner, &mut rng).unwrap();

        search.set_destination("Лесная");
        search.search(&MockPlanner, &mut rng).unwrap();
        assert_eq!(search.result().map(|r| r.to.as_str()), Some("Лесная"));
    }

    #[test]
    fn failed_search_clears_result_and_keeps_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let planner = GraphPlanner::new(StationRegistry::standard().unwrap());
        let mut search = RouteSearch::default();
        search.set_origin("Центральная");
        search.set_destination("Южная");
        search.search(&planner, &mut rng).unwrap();

        search.set_destination("Театральная");
        assert!(search.search(&planner, &mut rng).is_err());
        assert!(search.result().is_none());
        assert!(matches!(search.last_error(), Some(AppError::NoRoute { .. })));
    }

    #[test]
    fn preset_origin_starts_a_fresh_query() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut search = RouteSearch::default();
        search.set_origin("Центральная");
        search.set_destination("Лесная");
        search.search(&MockPlanner, &mut rng).unwrap();

        search.preset_origin("Лесная");
        assert_eq!(search.origin(), Some("Лесная"));
        assert_eq!(search.destination(), None);
        assert!(search.result().is_none());
        assert!(!search.can_search());
    }

    #[test]
    fn preset_origin_keeps_a_distinct_destination() {
        let planner = GraphPlanner::new(StationRegistry::standard().unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut search = RouteSearch::default();
        search.set_origin("Центральная");
        search.set_destination("Театральная");
        assert!(search.search(&planner, &mut rng).is_err());

        search.preset_origin("Южная");
        assert_eq!(search.destination(), Some("Театральная"));
        assert!(search.last_error().is_none());
        assert!(search.can_search());
    }
}
