//! Arrival board generation knobs

use crate::domain::Line;

pub struct BoardSettings {
    /// Rows on a generated board
    pub entries: usize,
    /// Minutes between consecutive rows
    pub minutes_between_trains: i64,
    /// Platforms a train can be announced on (1..=platforms)
    pub platforms: u8,
    /// Inclusive delay range for delayed trains, in minutes
    pub min_delay_minutes: u8,
    pub max_delay_minutes: u8,
    /// Lines whose stations appear in the board's station picker and as destinations
    pub lines: &'static [Line],
}

pub const BOARD: BoardSettings = BoardSettings {
    entries: 8,
    minutes_between_trains: 3,
    platforms: 2,
    min_delay_minutes: 1,
    max_delay_minutes: 5,
    lines: &[Line::Red, Line::Blue],
};
