//! Vendor display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{TaxProfile, Vendor, VerificationStatus};
use crate::services::vendor::VendorSummary;

#[derive(Tabled)]
struct VendorRow {
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Treks")]
    treks: String,
}

/// Format a list of vendor summaries as a table
pub fn format_vendor_list(summaries: &[VendorSummary]) -> String {
    if summaries.is_empty() {
        return "No vendors found.".to_string();
    }

    let rows: Vec<VendorRow> = summaries
        .iter()
        .map(|s| VendorRow {
            company: s.vendor.company_name.clone(),
            contact: s.vendor.contact_name.clone(),
            email: s.vendor.email.clone(),
            status: s.vendor.verification.to_string(),
            treks: format!("{}/{}", s.active_trek_count, s.trek_count),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a vendor detail view
pub fn format_vendor_details(vendor: &Vendor) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", vendor.company_name));
    output.push_str(&format!("  ID:      {}\n", vendor.id));
    output.push_str(&format!("  Contact: {}\n", vendor.contact_name));
    output.push_str(&format!("  Email:   {}\n", vendor.email));
    if !vendor.phone.is_empty() {
        output.push_str(&format!("  Phone:   {}\n", vendor.phone));
    }
    if !vendor.city.is_empty() {
        output.push_str(&format!("  City:    {}\n", vendor.city));
    }
    if let Some(business_type) = vendor.business_type {
        output.push_str(&format!("  Type:    {}\n", business_type));
    }

    match &vendor.verification {
        VerificationStatus::Rejected(reason) => {
            output.push_str(&format!("  Status:  Rejected ({})\n", reason));
        }
        status => {
            output.push_str(&format!("  Status:  {}\n", status));
        }
    }

    if let Some(bank) = &vendor.bank {
        output.push_str(&format!(
            "  Bank:    {} {} ({})\n",
            bank.bank_name, bank.branch, bank.ifsc_code
        ));
    }

    match &vendor.tax {
        Some(TaxProfile::Registered { gstin, state_name, .. }) => {
            output.push_str(&format!("  GSTIN:   {} ({})\n", gstin, state_name));
        }
        Some(TaxProfile::Unregistered) => {
            output.push_str("  GSTIN:   Not registered\n");
        }
        None => {}
    }

    if !vendor.documents.is_empty() {
        let marked = vendor.documents.iter().filter(|d| d.selected).count();
        output.push_str(&format!(
            "  Documents: {}/{} slots marked\n",
            marked,
            vendor.documents.len()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_vendor_list(&[]), "No vendors found.");
    }

    #[test]
    fn test_details_show_rejection_reason() {
        let mut vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        vendor.reject("Bank details unconfirmed");

        let output = format_vendor_details(&vendor);
        assert!(output.contains("Rejected (Bank details unconfirmed)"));
    }

    #[test]
    fn test_list_shows_status() {
        let mut vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        vendor.verify();
        let summary = VendorSummary {
            vendor,
            trek_count: 3,
            active_trek_count: 2,
        };

        let output = format_vendor_list(&[summary]);
        assert!(output.contains("Verified"));
        assert!(output.contains("2/3"));
    }
}
