use crate::domain::{Ticket, TicketId};

/// Storage seam for owned tickets. Swapping the backend must not touch wallet logic.
pub trait TicketStore {
    fn get(&self, id: TicketId) -> Option<&Ticket>;
    /// Inserts, or replaces the ticket with the same id.
    fn put(&mut self, ticket: Ticket);
    /// All tickets in insertion order.
    fn list(&self) -> &[Ticket];
}

/// Session-scoped store; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryTicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore for MemoryTicketStore {
    fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    fn put(&mut self, ticket: Ticket) {
        match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(existing) => *existing = ticket,
            None => self.tickets.push(ticket),
        }
    }

    fn list(&self) -> &[Ticket] {
        &self.tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: u64, price: u32) -> Ticket {
        Ticket {
            id: TicketId(id),
            label: "Разовый билет".to_string(),
            price,
            valid_until: None,
            rides: None,
            active: true,
        }
    }

    #[test]
    fn put_appends_then_replaces_by_id() {
        let mut store = MemoryTicketStore::default();
        store.put(ticket(1, 55));
        store.put(ticket(2, 110));
        store.put(ticket(1, 60));

        assert_eq!(store.list().len(), 2);
        assert_eq!(store.get(TicketId(1)).map(|t| t.price), Some(60));
        assert!(store.get(TicketId(3)).is_none());
    }
}
