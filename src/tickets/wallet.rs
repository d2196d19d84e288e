use chrono::{DateTime, Duration, Local, NaiveDate};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{FARES, SEED_TICKETS, TICKET_CATALOG};
use crate::domain::{ProductKind, Ticket, TicketId, TicketProduct};
use crate::error::AppError;

use super::store::{MemoryTicketStore, TicketStore};

/// User-facing confirmation raised by a purchase. Fire and forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

/// Owned tickets plus the purchase flow. Purchases never fail and always append.
pub struct TicketWallet<S: TicketStore = MemoryTicketStore> {
    store: S,
    next_id: u64,
}

impl TicketWallet<MemoryTicketStore> {
    /// Fresh in-memory wallet holding the two example tickets.
    pub fn seeded() -> Self {
        Self::mount(MemoryTicketStore::default())
    }
}

impl<S: TicketStore> TicketWallet<S> {
    /// Wraps `store`, adding the example tickets if it is empty.
    pub fn mount(mut store: S) -> Self {
        if store.list().is_empty() {
            for (i, seed) in SEED_TICKETS.iter().enumerate() {
                store.put(Ticket {
                    id: TicketId(i as u64 + 1),
                    label: seed.label.to_string(),
                    price: seed.price,
                    valid_until: seed
                        .valid_until
                        .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
                    rides: seed.rides,
                    active: true,
                });
            }
        }
        let next_id = store.list().iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        Self { store, next_id }
    }

    pub fn catalog(&self) -> &'static [TicketProduct] {
        TICKET_CATALOG
    }

    pub fn product(&self, id: &str) -> Result<&'static TicketProduct, AppError> {
        TICKET_CATALOG
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| AppError::UnknownProduct(id.to_string()))
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.store.list()
    }

    pub fn find(&self, id: TicketId) -> Result<&Ticket, AppError> {
        self.store.get(id).ok_or(AppError::UnknownTicket(id.0))
    }

    /// Looks up a catalog product by id and buys it.
    pub fn purchase_by_id(
        &mut self,
        product_id: &str,
        now: DateTime<Local>,
    ) -> Result<(TicketId, Notification), AppError> {
        let product = self.product(product_id)?;
        Ok(self.purchase(product, now))
    }

    /// Issues a new active ticket for `product`. Monthly passes expire
    /// `FARES.monthly_validity_days` after `now`; ten-ride tickets start full.
    /// Expiry is the rider's local calendar day, not the UTC one.
    pub fn purchase(
        &mut self,
        product: &TicketProduct,
        now: DateTime<Local>,
    ) -> (TicketId, Notification) {
        let id = TicketId(self.next_id);
        self.next_id += 1;

        let ticket = Ticket {
            id,
            label: product.name.to_string(),
            price: product.price,
            valid_until: (product.kind == ProductKind::Monthly)
                .then(|| (now + Duration::days(FARES.monthly_validity_days)).date_naive()),
            rides: (product.kind == ProductKind::TenRides).then_some(FARES.ten_ride_count),
            active: true,
        };
        self.store.put(ticket);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_purchases {
            log::info!("Purchased {} for {}₽ (ticket {})", product.name, product.price, id);
        }

        let notification = Notification {
            title: format!("Билет \"{}\" успешно куплен!", product.name),
            description: format!("Списано {}₽ с вашего счёта", product.price),
        };
        (id, notification)
    }
}
