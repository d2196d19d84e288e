// Ticket catalog, owned tickets and the storage seam behind them
pub mod store;
pub mod wallet;

pub use store::{MemoryTicketStore, TicketStore};
pub use wallet::{Notification, TicketWallet};
