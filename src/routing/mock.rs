use rand::{Rng, RngCore};

use super::{RoutePlanner, RouteRequest, validate_endpoints};
use crate::config::{FARES, ROUTING};
use crate::domain::RouteResult;
use crate::error::AppError;

/// Placeholder planner: random duration and transfer count, a fixed three-stop path
/// through the hub station and a flat fare. Ignores the network entirely.
#[derive(Debug, Clone, Default)]
pub struct MockPlanner;

impl RoutePlanner for MockPlanner {
    fn plan(
        &self,
        request: &RouteRequest<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<RouteResult, AppError> {
        validate_endpoints(request.from, request.to)?;
        let settings = &ROUTING.mock;

        Ok(RouteResult {
            from: request.from.to_string(),
            to: request.to.to_string(),
            duration: rng.gen_range(settings.min_duration..=settings.max_duration),
            transfers: rng.gen_range(0..=settings.max_transfers),
            stations: vec![
                request.from.to_string(),
                settings.via_station.to_string(),
                request.to.to_string(),
            ],
            cost: FARES.flat_fare,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteMode, StationRegistry};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request<'a>(from: &'a str, to: &'a str) -> RouteRequest<'a> {
        RouteRequest {
            from,
            to,
            mode: RouteMode::default(),
        }
    }

    #[test]
    fn central_to_theatre_goes_through_revolution_square() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let route = MockPlanner
            .plan(&request("Центральная", "Театральная"), &mut rng)
            .unwrap();

        assert_eq!(
            route.stations,
            vec!["Центральная", "Площадь Революции", "Театральная"]
        );
        assert_eq!(route.cost, 55);
    }

    #[test]
    fn every_pair_respects_ranges_and_endpoints() {
        let registry = StationRegistry::standard().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for (a, b) in registry.names().into_iter().tuple_combinations() {
            for (from, to) in [(a, b), (b, a)] {
                let route = MockPlanner.plan(&request(from, to), &mut rng).unwrap();
                assert!(route.stations.len() >= 2);
                assert_eq!(route.stations.first().map(String::as_str), Some(from));
                assert_eq!(route.stations.last().map(String::as_str), Some(to));
                assert!((10..=39).contains(&route.duration));
                assert!(route.transfers <= 2);
                assert_eq!(route.from, from);
                assert_eq!(route.to, to);
            }
        }
    }

    #[test]
    fn same_or_missing_endpoints_are_refused() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            MockPlanner.plan(&request("Лесная", "Лесная"), &mut rng),
            Err(AppError::SameOriginDestination("Лесная".to_string()))
        );
        assert_eq!(
            MockPlanner.plan(&request("", "Лесная"), &mut rng),
            Err(AppError::IncompleteSelection)
        );
    }
}
