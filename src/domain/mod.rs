// Domain types and value objects
pub mod registry;
pub mod route;
pub mod schedule;
pub mod station;
pub mod ticket;

// Re-export commonly used types
pub use registry::StationRegistry;
pub use route::{RouteMode, RouteResult};
pub use schedule::{ArrivalStatus, TrainScheduleEntry};
pub use station::{Line, Station, StationId};
pub use ticket::{ProductKind, Ticket, TicketId, TicketProduct};
