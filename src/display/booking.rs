//! Booking display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Booking;

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Seats")]
    seats: u32,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Coupon")]
    coupon: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format a list of bookings as a table
pub fn format_booking_list(bookings: &[Booking], currency: &str) -> String {
    if bookings.is_empty() {
        return "No bookings found.".to_string();
    }

    let rows: Vec<BookingRow> = bookings
        .iter()
        .map(|b| BookingRow {
            id: b.id.to_string(),
            customer: b.customer_name.clone(),
            email: b.customer_email.clone(),
            seats: b.participants,
            amount: b.amount.format_with_symbol(currency),
            coupon: b.coupon_code.clone().unwrap_or_else(|| "-".into()),
            status: b.status.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a booking detail view
pub fn format_booking_details(booking: &Booking, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Booking {}\n", booking.id));
    output.push_str(&format!("  Customer: {}\n", booking.customer_name));
    output.push_str(&format!("  Email:    {}\n", booking.customer_email));
    output.push_str(&format!("  Batch:    {}\n", booking.batch_id));
    output.push_str(&format!("  Seats:    {}\n", booking.participants));
    output.push_str(&format!(
        "  Amount:   {}\n",
        booking.amount.format_with_symbol(currency)
    ));
    if let Some(code) = &booking.coupon_code {
        output.push_str(&format!("  Coupon:   {}\n", code));
    }
    output.push_str(&format!("  Status:   {}\n", booking.status));
    output.push_str(&format!(
        "  Booked:   {}\n",
        booking.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchId, Money, TrekId};

    fn sample_booking() -> Booking {
        Booking::new(
            BatchId::new(),
            TrekId::new(),
            "Ravi Menon",
            "ravi@example.com",
            2,
            Money::from_minor(2_400_000),
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_booking_list(&[], "₹"), "No bookings found.");
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_booking_list(&[sample_booking()], "₹");
        assert!(output.contains("Ravi Menon"));
        assert!(output.contains("₹24000.00"));
        assert!(output.contains("Pending"));
    }

    #[test]
    fn test_details_show_coupon_when_present() {
        let mut booking = sample_booking();
        assert!(!format_booking_details(&booking, "₹").contains("Coupon"));

        booking.coupon_code = Some("TREK10".into());
        assert!(format_booking_details(&booking, "₹").contains("TREK10"));
    }
}
