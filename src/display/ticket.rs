//! Support ticket display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Ticket;

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Requester")]
    requester: String,
    #[tabled(rename = "Replies")]
    replies: usize,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format a list of tickets as a table
pub fn format_ticket_list(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets found.".to_string();
    }

    let rows: Vec<TicketRow> = tickets
        .iter()
        .map(|t| TicketRow {
            id: t.id.to_string(),
            subject: t.subject.clone(),
            requester: t.requester_email.clone(),
            replies: t.replies.len(),
            status: t.status.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a ticket thread
pub fn format_ticket_thread(ticket: &Ticket) -> String {
    let mut output = String::new();

    output.push_str(&format!("[{}] {}\n", ticket.status, ticket.subject));
    output.push_str(&format!(
        "  From {} on {}\n",
        ticket.requester_email,
        ticket.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!("\n  {}\n", ticket.body));

    for reply in &ticket.replies {
        output.push_str(&format!(
            "\n  -- {} ({})\n  {}\n",
            reply.author,
            reply.posted_at.format("%Y-%m-%d %H:%M"),
            reply.body
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_ticket_list(&[]), "No tickets found.");
    }

    #[test]
    fn test_thread_includes_replies() {
        let mut ticket = Ticket::new("Refund not received", "Batch was cancelled", "c@example.com");
        ticket.reply("support", "Refund issued");

        let output = format_ticket_thread(&ticket);
        assert!(output.contains("Refund not received"));
        assert!(output.contains("-- support"));
        assert!(output.contains("Refund issued"));
    }
}
