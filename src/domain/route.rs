use std::fmt;

use strum_macros::EnumIter;

/// Outcome of a single route search. Replaced wholesale by the next search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    pub from: String,
    pub to: String,
    /// Total travel time in minutes
    pub duration: u32,
    pub transfers: u32,
    /// Station names along the route, origin first and destination last
    pub stations: Vec<String>,
    /// Fare in rubles
    pub cost: u32,
}

impl RouteResult {
    pub fn leg_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Time shown beside every leg. Evenly split, rounded down.
    pub fn minutes_per_leg(&self) -> u32 {
        match self.leg_count() {
            0 => self.duration,
            legs => self.duration / legs as u32,
        }
    }

    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }
}

/// What the graph planner optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, clap::ValueEnum)]
pub enum RouteMode {
    #[default]
    Fastest,
    FewestTransfers,
    /// Avoids transfer corridors entirely
    Accessible,
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMode::Fastest => write!(f, "Быстрый"),
            RouteMode::FewestTransfers => write!(f, "Без пересадок"),
            RouteMode::Accessible => write!(f, "Доступный"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(duration: u32, stations: &[&str]) -> RouteResult {
        RouteResult {
            from: stations[0].to_string(),
            to: stations[stations.len() - 1].to_string(),
            duration,
            transfers: 0,
            stations: stations.iter().map(|s| s.to_string()).collect(),
            cost: 55,
        }
    }

    #[test]
    fn per_leg_time_is_floored_even_split() {
        let r = route(25, &["А", "Б", "В"]);
        assert_eq!(r.leg_count(), 2);
        assert_eq!(r.minutes_per_leg(), 12);
    }

    #[test]
    fn single_leg_gets_full_duration() {
        let r = route(17, &["А", "Б"]);
        assert_eq!(r.minutes_per_leg(), 17);
    }
}
