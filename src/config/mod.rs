//! Configuration module for the metro companion app.

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod fares;
pub mod map;
pub mod network;
pub mod routing;
pub mod schedule;

// Re-export commonly used items
pub use fares::{FARES, SEED_TICKETS, TICKET_CATALOG};
pub use map::MAP_CONFIG;
pub use network::{LINE_SEQUENCES, OPERATING_HOURS, STATIONS};
pub use routing::ROUTING;
pub use schedule::BOARD;
