use std::fmt;

use strum_macros::EnumIter;

/// Registry identifier of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Line {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl Line {
    pub fn display_name(&self) -> &'static str {
        match self {
            Line::Red => "Красная линия",
            Line::Blue => "Синяя линия",
            Line::Green => "Зелёная линия",
            Line::Yellow => "Жёлтая линия",
            Line::Purple => "Фиолетовая линия",
        }
    }

    /// Theme token the UI resolves into a concrete color.
    pub fn color_token(&self) -> &'static str {
        match self {
            Line::Red => "metro-red",
            Line::Blue => "metro-blue",
            Line::Green => "metro-green",
            Line::Yellow => "metro-yellow",
            Line::Purple => "metro-purple",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single station of the static network table.
/// Coordinates live in a normalized 0-100 square.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: &'static str,
    pub line: Line,
    pub x: f32,
    pub y: f32,
    pub transfers: &'static [StationId],
}

impl Station {
    pub fn has_transfers(&self) -> bool {
        !self.transfers.is_empty()
    }

    pub fn line_name(&self) -> &'static str {
        self.line.display_name()
    }

    /// Euclidean distance in map units.
    pub fn distance_to(&self, other: &Station) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STATIONS;

    #[test]
    fn station_inherits_line_name_and_token() {
        let central = &STATIONS[0];
        assert_eq!(central.line_name(), "Красная линия");
        assert_eq!(central.line.color_token(), "metro-red");
        assert!(central.has_transfers());
        assert!(!STATIONS[1].has_transfers());
    }

    #[test]
    fn distance_is_planar() {
        assert_eq!(STATIONS[0].distance_to(&STATIONS[1]), 15.0);
    }
}
