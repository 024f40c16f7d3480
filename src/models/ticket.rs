//! Support ticket model
//!
//! Tickets raised by customers or vendors and worked by support staff in the
//! admin console. Replies attach to a thread; status transitions are always
//! explicit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TicketId, VendorId};

/// Workflow state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Parse a ticket status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "in_progress" | "inprogress" | "progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    /// Whether the ticket still needs attention
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Resolved => write!(f, "Resolved"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// A single reply in a ticket thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketReply {
    /// Display name of the author (support staff or requester)
    pub author: String,
    /// Reply body
    pub body: String,
    /// When the reply was posted
    pub posted_at: DateTime<Utc>,
}

/// A support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier
    pub id: TicketId,

    /// Short subject line
    pub subject: String,

    /// Initial description
    pub body: String,

    /// Email of the requester
    pub requester_email: String,

    /// Vendor this ticket concerns, if raised by or about a vendor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<VendorId>,

    /// Workflow state
    #[serde(default)]
    pub status: TicketStatus,

    /// Threaded replies, oldest first
    #[serde(default)]
    pub replies: Vec<TicketReply>,

    /// When the ticket was opened
    pub created_at: DateTime<Utc>,

    /// When the ticket was last modified
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Open a new ticket
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        requester_email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TicketId::new(),
            subject: subject.into(),
            body: body.into(),
            requester_email: requester_email.into(),
            vendor_id: None,
            status: TicketStatus::Open,
            replies: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a reply to the thread
    ///
    /// Replies never change status; transitions are explicit via set_status.
    pub fn reply(&mut self, author: impl Into<String>, body: impl Into<String>) {
        self.replies.push(TicketReply {
            author: author.into(),
            body: body.into(),
            posted_at: Utc::now(),
        });
        self.updated_at = Utc::now();
    }

    /// Move the ticket to a new workflow state
    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Validate the ticket
    pub fn validate(&self) -> Result<(), TicketValidationError> {
        if self.subject.trim().is_empty() {
            return Err(TicketValidationError::EmptySubject);
        }
        if self.requester_email.trim().is_empty() {
            return Err(TicketValidationError::EmptyRequester);
        }
        Ok(())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.subject, self.status)
    }
}

/// Validation errors for tickets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketValidationError {
    EmptySubject,
    EmptyRequester,
}

impl fmt::Display for TicketValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySubject => write!(f, "Ticket subject cannot be empty"),
            Self::EmptyRequester => write!(f, "Ticket requester email cannot be empty"),
        }
    }
}

impl std::error::Error for TicketValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticket_is_open() {
        let ticket = Ticket::new("Refund not received", "Batch was cancelled", "c@example.com");
        assert_eq!(ticket.status, TicketStatus::Open);
        assert!(ticket.status.is_active());
        assert!(ticket.replies.is_empty());
    }

    #[test]
    fn test_reply_does_not_change_status() {
        let mut ticket = Ticket::new("Refund not received", "...", "c@example.com");
        ticket.set_status(TicketStatus::Resolved);

        ticket.reply("support", "Refund issued, please confirm");
        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(ticket.replies.len(), 1);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TicketStatus::parse("in_progress"), Some(TicketStatus::InProgress));
        assert_eq!(TicketStatus::parse("CLOSED"), Some(TicketStatus::Closed));
        assert_eq!(TicketStatus::parse("done"), None);
    }

    #[test]
    fn test_validation() {
        let mut ticket = Ticket::new("Refund not received", "...", "c@example.com");
        assert!(ticket.validate().is_ok());

        ticket.subject = String::new();
        assert_eq!(ticket.validate(), Err(TicketValidationError::EmptySubject));
    }
}
