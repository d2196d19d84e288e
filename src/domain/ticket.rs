use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fare product family. Decides which optional fields a purchased ticket carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Single,
    Double,
    TenRides,
    Monthly,
}

impl ProductKind {
    pub fn id(&self) -> &'static str {
        match self {
            ProductKind::Single => "single",
            ProductKind::Double => "double",
            ProductKind::TenRides => "ten",
            ProductKind::Monthly => "month",
        }
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketProduct {
    pub kind: ProductKind,
    pub name: &'static str,
    /// Rubles
    pub price: u32,
    pub description: &'static str,
    pub icon: &'static str,
}

impl TicketProduct {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }
}

/// A ticket owned by the rider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub label: String,
    pub price: u32,
    /// Subscription products only
    pub valid_until: Option<NaiveDate>,
    /// Multi-ride products only
    pub rides: Option<u32>,
    pub active: bool,
}
