//! Trek display formatting
//!
//! Formats treks and batches for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Trek;
use crate::services::batch::BatchSummary;

#[derive(Tabled)]
struct TrekRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Days")]
    days: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format a list of treks as a table
pub fn format_trek_list(treks: &[Trek], currency: &str) -> String {
    if treks.is_empty() {
        return "No treks found.".to_string();
    }

    let rows: Vec<TrekRow> = treks
        .iter()
        .map(|t| TrekRow {
            name: t.name.clone(),
            region: t.region.clone(),
            difficulty: t.difficulty.to_string(),
            days: t.duration_days,
            price: t.price.format_with_symbol(currency),
            status: if t.active { "Active" } else { "Inactive" }.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a trek detail view with its departures
pub fn format_trek_details(trek: &Trek, batches: &[BatchSummary], currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", trek.name));
    output.push_str(&format!("  ID:         {}\n", trek.id));
    output.push_str(&format!("  Region:     {}\n", trek.region));
    output.push_str(&format!("  Difficulty: {}\n", trek.difficulty));
    output.push_str(&format!("  Duration:   {} days\n", trek.duration_days));
    output.push_str(&format!(
        "  Price:      {} per seat\n",
        trek.price.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Status:     {}\n",
        if trek.active { "Active" } else { "Inactive" }
    ));
    if !trek.description.is_empty() {
        output.push_str(&format!("  About:      {}\n", trek.description));
    }

    if batches.is_empty() {
        output.push_str("\nNo departures scheduled.\n");
    } else {
        output.push_str("\nDepartures:\n");
        for summary in batches {
            output.push_str(&format!(
                "  {}  {} -> {}  {:>3} seats left  {}  [{}]\n",
                summary.batch.id,
                summary.batch.start_date,
                summary.batch.end_date,
                summary.seats_left,
                summary.effective_price.format_with_symbol(currency),
                summary.batch.status,
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Money, VendorId};

    fn sample_trek() -> Trek {
        Trek::new(
            VendorId::new(),
            "Valley of Flowers",
            "Garhwal Himalaya",
            Difficulty::Moderate,
            6,
            Money::from_minor(1_450_000),
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_trek_list(&[], "₹"), "No treks found.");
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_trek_list(&[sample_trek()], "₹");
        assert!(output.contains("Valley of Flowers"));
        assert!(output.contains("Moderate"));
        assert!(output.contains("₹14500.00"));
    }

    #[test]
    fn test_details_without_batches() {
        let output = format_trek_details(&sample_trek(), &[], "₹");
        assert!(output.contains("Garhwal Himalaya"));
        assert!(output.contains("No departures scheduled."));
    }
}
