//! Support ticket repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{Ticket, TicketId, TicketStatus};

use super::file_io::{read_json, write_json_atomic};

/// Serializable ticket data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TicketData {
    tickets: Vec<Ticket>,
}

/// Repository for ticket persistence
pub struct TicketRepository {
    path: PathBuf,
    data: RwLock<HashMap<TicketId, Ticket>>,
}

impl TicketRepository {
    /// Create a new ticket repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load tickets from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: TicketData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for ticket in file_data.tickets {
            data.insert(ticket.id, ticket);
        }

        Ok(())
    }

    /// Save tickets to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TicketData {
            tickets: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a ticket by ID
    pub fn get(&self, id: TicketId) -> Result<Option<Ticket>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all tickets, most recently touched first
    pub fn get_all(&self) -> Result<Vec<Ticket>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut tickets: Vec<_> = data.values().cloned().collect();
        tickets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(tickets)
    }

    /// Get all tickets with the given status
    pub fn get_by_status(&self, status: TicketStatus) -> Result<Vec<Ticket>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|t| t.status == status).collect())
    }

    /// Get all open or in-progress tickets
    pub fn get_active(&self) -> Result<Vec<Ticket>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|t| t.status.is_active()).collect())
    }

    /// Insert or update a ticket
    pub fn upsert(&self, ticket: Ticket) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(ticket.id, ticket);
        Ok(())
    }

    /// Delete a ticket
    pub fn delete(&self, id: TicketId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count tickets
    pub fn count(&self) -> Result<usize, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TicketRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tickets.json");
        (temp_dir, TicketRepository::new(path))
    }

    #[test]
    fn test_get_active_excludes_closed() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut closed = Ticket::new("Old issue", "...", "a@example.com");
        closed.set_status(TicketStatus::Closed);
        repo.upsert(closed).unwrap();
        repo.upsert(Ticket::new("New issue", "...", "b@example.com"))
            .unwrap();

        let active = repo.get_active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].subject, "New issue");
    }

    #[test]
    fn test_get_by_status() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut in_progress = Ticket::new("Being worked", "...", "a@example.com");
        in_progress.set_status(TicketStatus::InProgress);
        repo.upsert(in_progress).unwrap();
        repo.upsert(Ticket::new("Fresh", "...", "b@example.com")).unwrap();

        assert_eq!(repo.get_by_status(TicketStatus::InProgress).unwrap().len(), 1);
        assert_eq!(repo.get_by_status(TicketStatus::Open).unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload_keeps_replies() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut ticket = Ticket::new("Refund", "...", "a@example.com");
        ticket.reply("support", "Looking into it");
        let id = ticket.id;
        repo.upsert(ticket).unwrap();
        repo.save().unwrap();

        let repo2 = TicketRepository::new(temp_dir.path().join("tickets.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().replies.len(), 1);
    }
}
