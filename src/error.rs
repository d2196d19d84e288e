use std::fmt;

use crate::domain::{Line, StationId};

/// Error types for application operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No station with this id exists in the registry
    UnknownStation(StationId),
    /// No station carries this display name
    UnknownStationName(String),
    /// Two registry rows share the same id
    DuplicateStation(StationId),
    /// A transfer points at a station the registry does not know
    DanglingTransfer { station: StationId, target: StationId },
    /// A line sequence lists an unknown station or one from another line
    InvalidLineSequence { line: Line, station: StationId },
    /// Route search was requested before both ends were chosen
    IncompleteSelection,
    /// Route search was requested with identical origin and destination
    SameOriginDestination(String),
    /// The planner found no path between the two stations
    NoRoute { from: String, to: String },
    /// No owned ticket has this id
    UnknownTicket(u64),
    /// The catalog has no product with this id
    UnknownProduct(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnknownStation(id) => write!(f, "Unknown station id: {}", id),
            AppError::UnknownStationName(name) => write!(f, "Unknown station name: {}", name),
            AppError::DuplicateStation(id) => write!(f, "Duplicate station id: {}", id),
            AppError::DanglingTransfer { station, target } => write!(
                f,
                "Station {} lists transfer to unknown station {}",
                station, target
            ),
            AppError::InvalidLineSequence { line, station } => write!(
                f,
                "Line sequence for {} references station {} which is not on that line",
                line, station
            ),
            AppError::IncompleteSelection => write!(f, "Origin and destination must both be set"),
            AppError::SameOriginDestination(name) => {
                write!(f, "Origin and destination are the same: {}", name)
            }
            AppError::NoRoute { from, to } => write!(f, "No route from {} to {}", from, to),
            AppError::UnknownTicket(id) => write!(f, "Unknown ticket id: {}", id),
            AppError::UnknownProduct(id) => write!(f, "Unknown ticket product: {}", id),
        }
    }
}

impl std::error::Error for AppError {}
