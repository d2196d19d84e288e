//! Fare catalog and purchase rules

use crate::domain::{ProductKind, TicketProduct};

pub struct FareSettings {
    /// Flat fare quoted for every route search
    pub flat_fare: u32,
    /// Validity window of a monthly pass
    pub monthly_validity_days: i64,
    /// Rides loaded onto a fresh ten-ride ticket
    pub ten_ride_count: u32,
}

pub const FARES: FareSettings = FareSettings {
    flat_fare: 55,
    monthly_validity_days: 30,
    ten_ride_count: 10,
};

pub const TICKET_CATALOG: &[TicketProduct] = &[
    TicketProduct {
        kind: ProductKind::Single,
        name: "Разовый билет",
        price: 55,
        description: "Одна поездка",
        icon: "🎫",
    },
    TicketProduct {
        kind: ProductKind::Double,
        name: "2 поездки",
        price: 110,
        description: "Две поездки",
        icon: "🎟",
    },
    TicketProduct {
        kind: ProductKind::TenRides,
        name: "10 поездок",
        price: 500,
        description: "Выгода 50₽",
        icon: "✅",
    },
    TicketProduct {
        kind: ProductKind::Monthly,
        name: "Месячный",
        price: 2500,
        description: "Безлимит на 30 дней",
        icon: "📅",
    },
];

/// Tickets every fresh wallet starts with.
pub struct SeedTicket {
    pub label: &'static str,
    pub price: u32,
    /// `(year, month, day)`
    pub valid_until: Option<(i32, u32, u32)>,
    pub rides: Option<u32>,
}

pub const SEED_TICKETS: &[SeedTicket] = &[
    SeedTicket {
        label: "Месячный абонемент",
        price: 2500,
        valid_until: Some((2024, 12, 31)),
        rides: None,
    },
    SeedTicket {
        label: "10 поездок",
        price: 500,
        valid_until: None,
        rides: Some(7),
    },
];
