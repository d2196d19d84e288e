//! Selection and hover state of the map tab.

use crate::domain::{Station, StationId, StationRegistry};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetroMapState {
    selected: Option<StationId>,
    hovered: Option<StationId>,
}

impl MetroMapState {
    /// Selects `id`. Unknown ids leave the current selection untouched.
    pub fn select_station<'r>(
        &mut self,
        registry: &'r StationRegistry,
        id: StationId,
    ) -> Result<&'r Station, AppError> {
        let station = registry.find(id)?;
        self.selected = Some(station.id);
        Ok(station)
    }

    /// Sets transient hover. Unknown ids clear it; the selection is never touched.
    pub fn hover_station(&mut self, registry: &StationRegistry, id: Option<StationId>) {
        self.hovered = id.filter(|id| registry.get(*id).is_some());
    }

    pub fn selected_id(&self) -> Option<StationId> {
        self.selected
    }

    pub fn hovered_id(&self) -> Option<StationId> {
        self.hovered
    }

    pub fn selected<'r>(&self, registry: &'r StationRegistry) -> Option<&'r Station> {
        self.selected.and_then(|id| registry.get(id))
    }

    pub fn hovered<'r>(&self, registry: &'r StationRegistry) -> Option<&'r Station> {
        self.hovered.and_then(|id| registry.get(id))
    }

    pub fn is_hovered(&self, id: StationId) -> bool {
        self.hovered == Some(id)
    }
}

/// Nearest station whose marker lies within `radius` map units of `(x, y)`.
pub fn station_at(registry: &StationRegistry, x: f32, y: f32, radius: f32) -> Option<&Station> {
    registry
        .stations()
        .iter()
        .map(|s| (s, ((s.x - x).powi(2) + (s.y - y).powi(2)).sqrt()))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(s, _)| s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StationRegistry {
        StationRegistry::standard().unwrap()
    }

    #[test]
    fn selecting_any_station_reads_back_exactly_it() {
        let registry = registry();
        let mut state = MetroMapState::default();
        for station in registry.stations() {
            let picked = state.select_station(&registry, station.id).unwrap();
            assert_eq!(picked, station);
            assert_eq!(state.selected(&registry), Some(station));
        }
    }

    #[test]
    fn unknown_selection_is_a_reported_no_op() {
        let registry = registry();
        let mut state = MetroMapState::default();
        state.select_station(&registry, StationId(3)).unwrap();

        let result = state.select_station(&registry, StationId(404));
        assert_eq!(result, Err(AppError::UnknownStation(StationId(404))));
        assert_eq!(state.selected_id(), Some(StationId(3)));
    }

    #[test]
    fn hover_never_changes_selection() {
        let registry = registry();
        let mut state = MetroMapState::default();
        state.select_station(&registry, StationId(1)).unwrap();

        state.hover_station(&registry, Some(StationId(9)));
        assert!(state.is_hovered(StationId(9)));
        assert_eq!(state.selected_id(), Some(StationId(1)));

        state.hover_station(&registry, None);
        assert_eq!(state.hovered_id(), None);
        assert_eq!(state.selected_id(), Some(StationId(1)));
    }

    #[test]
    fn hovering_unknown_id_clears_hover() {
        let registry = registry();
        let mut state = MetroMapState::default();
        state.hover_station(&registry, Some(StationId(2)));
        state.hover_station(&registry, Some(StationId(500)));
        assert_eq!(state.hovered_id(), None);
    }

    #[test]
    fn hit_test_picks_nearest_marker() {
        let registry = registry();
        assert_eq!(
            station_at(&registry, 50.5, 29.0, 2.5).map(|s| s.id),
            Some(StationId(1))
        );
        assert_eq!(station_at(&registry, 40.0, 40.0, 2.5), None);
    }
}
