use std::collections::HashSet;

use crate::config::network::{LINE_SEQUENCES, STATIONS};
use crate::domain::{Line, Station, StationId};
use crate::error::AppError;

/// Read-only, validated table of every station and the order of stations along each line.
///
/// All per-module station lists (route pickers, schedule board) are projections of this
/// single table.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
    lines: Vec<(Line, Vec<StationId>)>,
}

impl StationRegistry {
    /// Builds a registry, rejecting duplicate ids, dangling transfers and line sequences
    /// that reference unknown stations or stations belonging to another line.
    pub fn new(
        stations: Vec<Station>,
        lines: Vec<(Line, Vec<StationId>)>,
    ) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.id) {
                return Err(AppError::DuplicateStation(station.id));
            }
        }

        for station in &stations {
            if let Some(target) = station.transfers.iter().find(|t| !seen.contains(*t)) {
                return Err(AppError::DanglingTransfer {
                    station: station.id,
                    target: *target,
                });
            }
        }

        for (line, sequence) in &lines {
            for id in sequence {
                let on_line = stations
                    .iter()
                    .find(|s| s.id == *id)
                    .map(|s| s.line == *line)
                    .unwrap_or(false);
                if !on_line {
                    return Err(AppError::InvalidLineSequence {
                        line: *line,
                        station: *id,
                    });
                }
            }
        }

        Ok(Self { stations, lines })
    }

    /// The built-in network.
    pub fn standard() -> Result<Self, AppError> {
        Self::new(
            STATIONS.to_vec(),
            LINE_SEQUENCES
                .iter()
                .map(|(line, ids)| (*line, ids.to_vec()))
                .collect(),
        )
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn find(&self, id: StationId) -> Result<&Station, AppError> {
        self.get(id).ok_or(AppError::UnknownStation(id))
    }

    pub fn find_by_name(&self, name: &str) -> Result<&Station, AppError> {
        self.stations
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::UnknownStationName(name.to_string()))
    }

    /// Every station name, in table order.
    pub fn names(&self) -> Vec<&'static str> {
        self.stations.iter().map(|s| s.name).collect()
    }

    /// Names of stations on any of `lines`, in table order.
    pub fn names_on_lines(&self, lines: &[Line]) -> Vec<&'static str> {
        self.stations
            .iter()
            .filter(|s| lines.contains(&s.line))
            .map(|s| s.name)
            .collect()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Line, &[StationId])> {
        self.lines.iter().map(|(line, ids)| (*line, ids.as_slice()))
    }

    pub fn line_sequence(&self, line: Line) -> &[StationId] {
        self.lines
            .iter()
            .find(|(l, _)| *l == line)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Lines reachable by a transfer from `id`, one entry per transfer target.
    pub fn transfer_lines(&self, id: StationId) -> Vec<Line> {
        let Some(station) = self.get(id) else {
            return Vec::new();
        };
        station
            .transfers
            .iter()
            .filter_map(|t| self.get(*t))
            .map(|s| s.line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u32, line: Line, transfers: &'static [StationId]) -> Station {
        Station {
            id: StationId(id),
            name: "Тестовая",
            line,
            x: 0.0,
            y: 0.0,
            transfers,
        }
    }

    #[test]
    fn standard_network_is_valid() {
        let registry = StationRegistry::standard().unwrap();
        assert_eq!(registry.len(), 11);
        assert_eq!(registry.names()[0], "Центральная");
        assert_eq!(registry.names()[10], "Театральная");
    }

    #[test]
    fn every_standard_transfer_resolves() {
        let registry = StationRegistry::standard().unwrap();
        for station in registry.stations() {
            for target in station.transfers {
                assert!(registry.get(*target).is_some());
            }
        }
    }

    #[test]
    fn dangling_transfer_is_rejected() {
        let result = StationRegistry::new(
            vec![station(1, Line::Red, &[StationId(99)])],
            vec![],
        );
        assert_eq!(
            result.unwrap_err(),
            AppError::DanglingTransfer {
                station: StationId(1),
                target: StationId(99)
            }
        );
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let result = StationRegistry::new(
            vec![station(1, Line::Red, &[]), station(1, Line::Blue, &[])],
            vec![],
        );
        assert_eq!(result.unwrap_err(), AppError::DuplicateStation(StationId(1)));
    }

    #[test]
    fn line_sequence_must_stay_on_its_line() {
        let result = StationRegistry::new(
            vec![station(1, Line::Red, &[]), station(2, Line::Blue, &[])],
            vec![(Line::Red, vec![StationId(1), StationId(2)])],
        );
        assert_eq!(
            result.unwrap_err(),
            AppError::InvalidLineSequence {
                line: Line::Red,
                station: StationId(2)
            }
        );
    }

    #[test]
    fn schedule_projection_matches_red_and_blue_lines() {
        let registry = StationRegistry::standard().unwrap();
        assert_eq!(
            registry.names_on_lines(&[Line::Red, Line::Blue]),
            vec![
                "Центральная",
                "Северная",
                "Южная",
                "Площадь Революции",
                "Западная",
                "Восточная",
            ]
        );
    }

    #[test]
    fn lookups_report_missing_stations() {
        let registry = StationRegistry::standard().unwrap();
        assert_eq!(
            registry.find(StationId(42)).unwrap_err(),
            AppError::UnknownStation(StationId(42))
        );
        assert!(registry.find_by_name("Нигде").is_err());
        assert_eq!(registry.find_by_name("Лесная").unwrap().id, StationId(8));
    }

    #[test]
    fn transfer_lines_follow_targets() {
        let registry = StationRegistry::standard().unwrap();
        assert_eq!(registry.transfer_lines(StationId(1)), vec![Line::Blue]);
        assert_eq!(registry.transfer_lines(StationId(4)), vec![Line::Red]);
        assert!(registry.transfer_lines(StationId(8)).is_empty());
    }

    #[test]
    fn line_sequences_run_end_to_end() {
        let registry = StationRegistry::standard().unwrap();
        assert_eq!(
            registry.line_sequence(Line::Red),
            &[StationId(2), StationId(1), StationId(3)]
        );
        assert_eq!(registry.line_sequence(Line::Purple), &[StationId(11)]);
    }
}
