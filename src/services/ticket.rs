//! Support ticket service
//!
//! The admin console's support queue: open tickets, attach replies, and
//! move tickets through their workflow states.

use crate::audit::EntityType;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Ticket, TicketId, TicketStatus, VendorId};
use crate::storage::Storage;

/// Service for support ticket management
pub struct TicketService<'a> {
    storage: &'a Storage,
}

impl<'a> TicketService<'a> {
    /// Create a new ticket service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Open a new ticket
    pub fn open(
        &self,
        subject: &str,
        body: &str,
        requester_email: &str,
        vendor_id: Option<VendorId>,
    ) -> TrailheadResult<Ticket> {
        let mut ticket = Ticket::new(subject.trim(), body, requester_email.trim());
        ticket.vendor_id = vendor_id;

        ticket
            .validate()
            .map_err(|e| TrailheadError::Validation(e.to_string()))?;

        self.storage.tickets.upsert(ticket.clone())?;
        self.storage.tickets.save()?;

        self.storage.log_create(
            EntityType::Ticket,
            ticket.id.to_string(),
            Some(ticket.subject.clone()),
            &ticket,
        )?;

        Ok(ticket)
    }

    /// Get a ticket by ID
    pub fn get(&self, id: TicketId) -> TrailheadResult<Option<Ticket>> {
        self.storage.tickets.get(id)
    }

    /// List tickets, optionally narrowed to one status
    pub fn list(&self, status: Option<TicketStatus>) -> TrailheadResult<Vec<Ticket>> {
        match status {
            Some(status) => self.storage.tickets.get_by_status(status),
            None => self.storage.tickets.get_all(),
        }
    }

    /// Attach a reply to a ticket thread
    ///
    /// Replies never change the workflow state.
    pub fn reply(&self, id: TicketId, author: &str, body: &str) -> TrailheadResult<Ticket> {
        if body.trim().is_empty() {
            return Err(TrailheadError::Validation("Reply body cannot be empty".into()));
        }

        let mut ticket = self
            .storage
            .tickets
            .get(id)?
            .ok_or_else(|| TrailheadError::ticket_not_found(id.to_string()))?;

        ticket.reply(author.trim(), body);
        self.storage.tickets.upsert(ticket.clone())?;
        self.storage.tickets.save()?;

        Ok(ticket)
    }

    /// Move a ticket to a new workflow state
    pub fn set_status(&self, id: TicketId, status: TicketStatus) -> TrailheadResult<Ticket> {
        let before = self
            .storage
            .tickets
            .get(id)?
            .ok_or_else(|| TrailheadError::ticket_not_found(id.to_string()))?;

        let mut ticket = before.clone();
        ticket.set_status(status);
        self.storage.tickets.upsert(ticket.clone())?;
        self.storage.tickets.save()?;

        self.storage.log_update(
            EntityType::Ticket,
            ticket.id.to_string(),
            Some(ticket.subject.clone()),
            &before,
            &ticket,
        )?;

        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrailheadPaths;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_open_and_reply() {
        let (_temp_dir, storage) = test_storage();
        let service = TicketService::new(&storage);

        let ticket = service
            .open("Refund not received", "Batch was cancelled", "c@example.com", None)
            .unwrap();

        let ticket = service
            .reply(ticket.id, "support", "Refund issued, allow 3 days")
            .unwrap();
        assert_eq!(ticket.replies.len(), 1);
        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[test]
    fn test_empty_reply_rejected() {
        let (_temp_dir, storage) = test_storage();
        let service = TicketService::new(&storage);

        let ticket = service
            .open("Refund not received", "...", "c@example.com", None)
            .unwrap();
        assert!(service.reply(ticket.id, "support", "   ").is_err());
    }

    #[test]
    fn test_status_transitions_are_explicit() {
        let (_temp_dir, storage) = test_storage();
        let service = TicketService::new(&storage);

        let ticket = service
            .open("Refund not received", "...", "c@example.com", None)
            .unwrap();

        service.set_status(ticket.id, TicketStatus::InProgress).unwrap();
        let ticket = service.set_status(ticket.id, TicketStatus::Resolved).unwrap();
        assert_eq!(ticket.status, TicketStatus::Resolved);

        assert_eq!(service.list(Some(TicketStatus::Resolved)).unwrap().len(), 1);
        assert!(service.list(Some(TicketStatus::Open)).unwrap().is_empty());
    }
}
