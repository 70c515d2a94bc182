use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use super::investors_errors::Result;
use super::investors_model::Investor;

/// Column order of the exported sheet. Fixed; consumers rely on it.
const CSV_HEADERS: [&str; 19] = [
    "Name",
    "Type",
    "Email",
    "Phone",
    "Website",
    "Contact Person",
    "Location",
    "Investment Focus",
    "Stage Preference",
    "Min Ticket Size",
    "Max Ticket Size",
    "Currency",
    "Status",
    "Notes",
    "Next Action",
    "Next Action Date",
    "Date Added",
    "Last Updated",
    "Tags",
];

fn format_amount(amount: f64) -> String {
    // Whole amounts print without a trailing ".0".
    if amount.fract() == 0.0 && amount.is_finite() {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

/// Serializes the collection into CSV with every field quoted and
/// multi-valued fields joined with "; ". Wire the string to any file-emission
/// mechanism.
pub fn to_csv(investors: &[Investor]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for investor in investors {
        writer.write_record([
            investor.name.clone(),
            investor.investor_type.as_str().to_string(),
            investor.email.clone(),
            investor.phone.clone().unwrap_or_default(),
            investor.website.clone().unwrap_or_default(),
            investor.contact_person.clone().unwrap_or_default(),
            investor.location.clone().unwrap_or_default(),
            investor.investment_focus.join("; "),
            investor.stage_preference.as_str().to_string(),
            investor
                .ticket_size
                .map(|t| format_amount(t.min))
                .unwrap_or_default(),
            investor
                .ticket_size
                .map(|t| format_amount(t.max))
                .unwrap_or_default(),
            investor
                .ticket_size
                .map(|t| t.currency.as_str().to_string())
                .unwrap_or_default(),
            investor.status.as_str().to_string(),
            investor.notes.clone().unwrap_or_default(),
            investor.next_action.clone().unwrap_or_default(),
            investor
                .next_action_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            investor.date_added.to_rfc3339(),
            investor.last_updated.to_rfc3339(),
            investor.tags.join("; "),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // The writer only ever receives UTF-8 strings.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Name for an export file stamped with the given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("raisetrack_investors_{}.csv", date.format("%Y-%m-%d"))
}
