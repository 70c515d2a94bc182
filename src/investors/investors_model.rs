use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::investors_errors::{InvestorError, Result};

/// Kind of funding contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorType {
    Vc,
    Angel,
    Incubator,
    Accelerator,
    FamilyOffice,
    Corporate,
    Government,
    Other,
}

impl InvestorType {
    pub const ALL: [InvestorType; 8] = [
        InvestorType::Vc,
        InvestorType::Angel,
        InvestorType::Incubator,
        InvestorType::Accelerator,
        InvestorType::FamilyOffice,
        InvestorType::Corporate,
        InvestorType::Government,
        InvestorType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestorType::Vc => "vc",
            InvestorType::Angel => "angel",
            InvestorType::Incubator => "incubator",
            InvestorType::Accelerator => "accelerator",
            InvestorType::FamilyOffice => "family_office",
            InvestorType::Corporate => "corporate",
            InvestorType::Government => "government",
            InvestorType::Other => "other",
        }
    }

    /// Human-readable label for pickers and reports.
    pub fn label(&self) -> &'static str {
        match self {
            InvestorType::Vc => "Venture Capital",
            InvestorType::Angel => "Angel Investor",
            InvestorType::Incubator => "Incubator",
            InvestorType::Accelerator => "Accelerator",
            InvestorType::FamilyOffice => "Family Office",
            InvestorType::Corporate => "Corporate VC",
            InvestorType::Government => "Government Fund",
            InvestorType::Other => "Other",
        }
    }
}

impl FromStr for InvestorType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        InvestorType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown investor type: {}", s))
    }
}

/// Funding stage an investor prefers to enter at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagePreference {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    Growth,
    Any,
}

impl StagePreference {
    pub const ALL: [StagePreference; 7] = [
        StagePreference::PreSeed,
        StagePreference::Seed,
        StagePreference::SeriesA,
        StagePreference::SeriesB,
        StagePreference::SeriesC,
        StagePreference::Growth,
        StagePreference::Any,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StagePreference::PreSeed => "pre_seed",
            StagePreference::Seed => "seed",
            StagePreference::SeriesA => "series_a",
            StagePreference::SeriesB => "series_b",
            StagePreference::SeriesC => "series_c",
            StagePreference::Growth => "growth",
            StagePreference::Any => "any",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StagePreference::PreSeed => "Pre-Seed",
            StagePreference::Seed => "Seed",
            StagePreference::SeriesA => "Series A",
            StagePreference::SeriesB => "Series B",
            StagePreference::SeriesC => "Series C+",
            StagePreference::Growth => "Growth",
            StagePreference::Any => "Any Stage",
        }
    }
}

impl FromStr for StagePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StagePreference::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown stage preference: {}", s))
    }
}

/// Position of an investor in the outreach funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorStatus {
    Researching,
    Contacted,
    ApplicationSubmitted,
    MeetingScheduled,
    UnderReview,
    Rejected,
    Invested,
    FollowUp,
}

impl InvestorStatus {
    pub const ALL: [InvestorStatus; 8] = [
        InvestorStatus::Researching,
        InvestorStatus::Contacted,
        InvestorStatus::ApplicationSubmitted,
        InvestorStatus::MeetingScheduled,
        InvestorStatus::UnderReview,
        InvestorStatus::Rejected,
        InvestorStatus::Invested,
        InvestorStatus::FollowUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestorStatus::Researching => "researching",
            InvestorStatus::Contacted => "contacted",
            InvestorStatus::ApplicationSubmitted => "application_submitted",
            InvestorStatus::MeetingScheduled => "meeting_scheduled",
            InvestorStatus::UnderReview => "under_review",
            InvestorStatus::Rejected => "rejected",
            InvestorStatus::Invested => "invested",
            InvestorStatus::FollowUp => "follow_up",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestorStatus::Researching => "Researching",
            InvestorStatus::Contacted => "Contacted",
            InvestorStatus::ApplicationSubmitted => "Application Submitted",
            InvestorStatus::MeetingScheduled => "Meeting Scheduled",
            InvestorStatus::UnderReview => "Under Review",
            InvestorStatus::Rejected => "Rejected",
            InvestorStatus::Invested => "Invested",
            InvestorStatus::FollowUp => "Follow Up",
        }
    }
}

impl FromStr for InvestorStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        InvestorStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("Unknown investor status: {}", s))
    }
}

/// Currency of a ticket-size range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCurrency {
    USD,
    INR,
    EUR,
    GBP,
}

impl TicketCurrency {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCurrency::USD => "USD",
            TicketCurrency::INR => "INR",
            TicketCurrency::EUR => "EUR",
            TicketCurrency::GBP => "GBP",
        }
    }
}

/// Check size range an investor writes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TicketSize {
    pub min: f64,
    pub max: f64,
    pub currency: TicketCurrency,
}

/// Curated focus-tag suggestions offered by the form layer.
pub const INVESTMENT_FOCUS_OPTIONS: [&str; 24] = [
    "AI/ML",
    "B2B SaaS",
    "Consumer Tech",
    "E-commerce",
    "FinTech",
    "HealthTech",
    "EdTech",
    "Digital Health",
    "Healthcare",
    "Enterprise Software",
    "Mobile Apps",
    "IoT",
    "Blockchain",
    "Cybersecurity",
    "Gaming",
    "Media & Entertainment",
    "Real Estate Tech",
    "AgTech",
    "CleanTech",
    "Transportation",
    "Food & Beverage",
    "Retail",
    "Manufacturing",
    "Other",
];

/// Domain model representing one funding contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investor_type: InvestorType,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub investment_focus: Vec<String>,
    pub stage_preference: StagePreference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size: Option<TicketSize>,
    pub status: InvestorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date_added: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Input model for creating a new investor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub name: String,
    #[serde(rename = "type")]
    pub investor_type: InvestorType,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub contact_person: Option<String>,
    pub location: Option<String>,
    pub investment_focus: Vec<String>,
    pub stage_preference: StagePreference,
    pub ticket_size: Option<TicketSize>,
    pub status: InvestorStatus,
    pub notes: Option<String>,
    pub next_action: Option<String>,
    pub next_action_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl NewInvestor {
    /// Form-layer validation. The store itself accepts whatever it is given.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InvestorError::InvalidData(
                "Investor name cannot be empty".to_string(),
            ));
        }
        if self.email.trim().is_empty() {
            return Err(InvestorError::InvalidData(
                "Email cannot be empty".to_string(),
            ));
        }
        if self.investment_focus.is_empty() {
            return Err(InvestorError::InvalidData(
                "At least one investment focus is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Patch for an existing investor; absent fields are left untouched.
///
/// Field presence is a first-class distinction here: the remote adapter
/// serializes only the present fields into its backend patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub investor_type: Option<InvestorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_focus: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_preference: Option<StagePreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size: Option<TicketSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvestorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl InvestorUpdate {
    /// Merges the present fields into `investor`. `date_added` is immutable
    /// and never touched.
    pub fn apply_to(&self, investor: &mut Investor) {
        if let Some(name) = &self.name {
            investor.name = name.clone();
        }
        if let Some(investor_type) = self.investor_type {
            investor.investor_type = investor_type;
        }
        if let Some(email) = &self.email {
            investor.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            investor.phone = Some(phone.clone());
        }
        if let Some(website) = &self.website {
            investor.website = Some(website.clone());
        }
        if let Some(contact_person) = &self.contact_person {
            investor.contact_person = Some(contact_person.clone());
        }
        if let Some(location) = &self.location {
            investor.location = Some(location.clone());
        }
        if let Some(investment_focus) = &self.investment_focus {
            investor.investment_focus = investment_focus.clone();
        }
        if let Some(stage_preference) = self.stage_preference {
            investor.stage_preference = stage_preference;
        }
        if let Some(ticket_size) = self.ticket_size {
            investor.ticket_size = Some(ticket_size);
        }
        if let Some(status) = self.status {
            investor.status = status;
        }
        if let Some(notes) = &self.notes {
            investor.notes = Some(notes.clone());
        }
        if let Some(next_action) = &self.next_action {
            investor.next_action = Some(next_action.clone());
        }
        if let Some(next_action_date) = self.next_action_date {
            investor.next_action_date = Some(next_action_date);
        }
        if let Some(tags) = &self.tags {
            investor.tags = tags.clone();
        }
    }
}

/// Outreach funnel aggregate. Every enum variant is present in its map, with
/// zero for variants no investor currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorOutreach {
    pub total_investors: usize,
    pub by_status: HashMap<InvestorStatus, usize>,
    pub by_type: HashMap<InvestorType, usize>,
    pub by_stage: HashMap<StagePreference, usize>,
}

/// Backend row for the `investors` table, in the backend's column naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investor_type: InvestorType,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub investment_focus: Vec<String>,
    pub stage_preference: StagePreference,
    #[serde(default)]
    pub ticket_size_min: Option<f64>,
    #[serde(default)]
    pub ticket_size_max: Option<f64>,
    #[serde(default)]
    pub ticket_size_currency: Option<TicketCurrency>,
    pub status: InvestorStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub next_action: Option<String>,
    #[serde(default)]
    pub next_action_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InvestorRow> for Investor {
    fn from(row: InvestorRow) -> Self {
        let ticket_size = if row.ticket_size_min.is_some() || row.ticket_size_max.is_some() {
            Some(TicketSize {
                min: row.ticket_size_min.unwrap_or(0.0),
                max: row.ticket_size_max.unwrap_or(0.0),
                currency: row.ticket_size_currency.unwrap_or(TicketCurrency::USD),
            })
        } else {
            None
        };

        Self {
            id: row.id,
            name: row.name,
            investor_type: row.investor_type,
            email: row.email,
            phone: row.phone,
            website: row.website,
            contact_person: row.contact_person,
            location: row.location,
            investment_focus: row.investment_focus,
            stage_preference: row.stage_preference,
            ticket_size,
            status: row.status,
            notes: row.notes,
            next_action: row.next_action,
            next_action_date: row.next_action_date,
            tags: row.tags,
            date_added: row.created_at,
            last_updated: row.updated_at,
        }
    }
}

/// Insert payload for the `investors` table. The backend generates the
/// primary key and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInvestorRow {
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investor_type: InvestorType,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub investment_focus: Vec<String>,
    pub stage_preference: StagePreference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size_currency: Option<TicketCurrency>,
    pub status: InvestorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl NewInvestorRow {
    pub fn from_form(user_id: &str, data: NewInvestor) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: data.name,
            investor_type: data.investor_type,
            email: data.email,
            phone: data.phone,
            website: data.website,
            contact_person: data.contact_person,
            location: data.location,
            investment_focus: data.investment_focus,
            stage_preference: data.stage_preference,
            ticket_size_min: data.ticket_size.map(|t| t.min),
            ticket_size_max: data.ticket_size.map(|t| t.max),
            ticket_size_currency: data.ticket_size.map(|t| t.currency),
            status: data.status,
            notes: data.notes,
            next_action: data.next_action,
            next_action_date: data.next_action_date,
            tags: data.tags,
        }
    }
}

/// Sparse update payload for the `investors` table: only present fields are
/// serialized. A present `ticket_size` expands into its three columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvestorRowPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub investor_type: Option<InvestorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_focus: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_preference: Option<StagePreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_size_currency: Option<TicketCurrency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvestorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<&InvestorUpdate> for InvestorRowPatch {
    fn from(update: &InvestorUpdate) -> Self {
        Self {
            name: update.name.clone(),
            investor_type: update.investor_type,
            email: update.email.clone(),
            phone: update.phone.clone(),
            website: update.website.clone(),
            contact_person: update.contact_person.clone(),
            location: update.location.clone(),
            investment_focus: update.investment_focus.clone(),
            stage_preference: update.stage_preference,
            ticket_size_min: update.ticket_size.map(|t| t.min),
            ticket_size_max: update.ticket_size.map(|t| t.max),
            ticket_size_currency: update.ticket_size.map(|t| t.currency),
            status: update.status,
            notes: update.notes.clone(),
            next_action: update.next_action.clone(),
            next_action_date: update.next_action_date,
            tags: update.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_with_absent_optional_columns_maps_to_defaults() {
        let row: InvestorRow = serde_json::from_value(json!({
            "id": "r1",
            "user_id": "u1",
            "name": "Acme Ventures",
            "type": "vc",
            "email": "hello@acme.vc",
            "stage_preference": "seed",
            "status": "researching",
            "created_at": "2025-01-10T09:00:00Z",
            "updated_at": "2025-01-10T09:00:00Z"
        }))
        .unwrap();

        let investor: Investor = row.into();
        assert!(investor.investment_focus.is_empty());
        assert!(investor.tags.is_empty());
        assert!(investor.ticket_size.is_none());
        assert!(investor.phone.is_none());
    }

    #[test]
    fn row_with_one_ticket_bound_maps_to_ticket_size() {
        let row: InvestorRow = serde_json::from_value(json!({
            "id": "r1",
            "user_id": "u1",
            "name": "Acme Ventures",
            "type": "vc",
            "email": "hello@acme.vc",
            "stage_preference": "seed",
            "status": "researching",
            "ticket_size_max": 250000.0,
            "created_at": "2025-01-10T09:00:00Z",
            "updated_at": "2025-01-10T09:00:00Z"
        }))
        .unwrap();

        let investor: Investor = row.into();
        let ticket = investor.ticket_size.unwrap();
        assert_eq!(ticket.min, 0.0);
        assert_eq!(ticket.max, 250000.0);
        assert_eq!(ticket.currency, TicketCurrency::USD);
    }

    #[test]
    fn sparse_patch_serializes_only_present_fields() {
        let update = InvestorUpdate {
            status: Some(InvestorStatus::Invested),
            notes: Some("signed".to_string()),
            ..Default::default()
        };
        let patch = serde_json::to_value(InvestorRowPatch::from(&update)).unwrap();
        let object = patch.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("status"), Some(&json!("invested")));
        assert_eq!(object.get("notes"), Some(&json!("signed")));
    }

    #[test]
    fn present_ticket_size_expands_into_three_columns() {
        let update = InvestorUpdate {
            ticket_size: Some(TicketSize {
                min: 50000.0,
                max: 500000.0,
                currency: TicketCurrency::EUR,
            }),
            ..Default::default()
        };
        let patch = serde_json::to_value(InvestorRowPatch::from(&update)).unwrap();
        let object = patch.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object.get("ticket_size_min"), Some(&json!(50000.0)));
        assert_eq!(object.get("ticket_size_max"), Some(&json!(500000.0)));
        assert_eq!(object.get("ticket_size_currency"), Some(&json!("EUR")));
    }

    #[test]
    fn enum_round_trips_through_strings() {
        for status in InvestorStatus::ALL {
            assert_eq!(status.as_str().parse::<InvestorStatus>().unwrap(), status);
        }
        for stage in StagePreference::ALL {
            assert_eq!(stage.as_str().parse::<StagePreference>().unwrap(), stage);
        }
        for investor_type in InvestorType::ALL {
            assert_eq!(
                investor_type.as_str().parse::<InvestorType>().unwrap(),
                investor_type
            );
        }
    }

    #[test]
    fn form_validation_requires_focus_entry() {
        let mut data = NewInvestor {
            name: "Acme Ventures".to_string(),
            investor_type: InvestorType::Vc,
            email: "hello@acme.vc".to_string(),
            phone: None,
            website: None,
            contact_person: None,
            location: None,
            investment_focus: vec![],
            stage_preference: StagePreference::Seed,
            ticket_size: None,
            status: InvestorStatus::Researching,
            notes: None,
            next_action: None,
            next_action_date: None,
            tags: vec![],
        };
        assert!(data.validate().is_err());
        data.investment_focus.push("FinTech".to_string());
        assert!(data.validate().is_ok());
    }
}
