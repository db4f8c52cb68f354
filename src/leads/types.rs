//! Types for contact-form leads

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Workflow status of a lead
///
/// The set is closed server-side; the admin UI may move a lead to any status
/// with no transition restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Closed,
}

impl LeadStatus {
    /// The wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Converted => "converted",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "converted" => Ok(Self::Converted),
            "closed" => Ok(Self::Closed),
            other => Err(format!("unknown lead status: {}", other)),
        }
    }
}

/// A contact-form lead
#[derive(Debug, Clone, Deserialize)]
pub struct Lead {
    /// The lead ID
    pub id: i64,

    /// The contact's name
    pub name: String,

    /// The contact's email address
    pub email: String,

    /// The contact's phone number
    pub phone: Option<String>,

    /// The contact's organization
    pub organization: Option<String>,

    /// The inquiry message
    pub message: String,

    /// When the contact prefers to be reached
    pub preferred_contact_time: Option<String>,

    /// Which service the inquiry concerns
    pub service_interest: Option<String>,

    /// Where the lead came from
    pub source: String,

    /// Current workflow status
    pub status: LeadStatus,

    /// Admin notes
    pub notes: Option<String>,

    /// Whether the contact accepted the privacy policy
    pub privacy_accepted: bool,

    /// Whether the notification emails went out
    pub email_sent: bool,

    /// The creation time
    pub created_at: String,

    /// The update time
    pub updated_at: String,
}

/// A public contact-form submission
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactForm {
    pub name: String,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_contact_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_interest: Option<String>,

    pub privacy_accepted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Server acknowledgment of a contact submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionReceipt {
    /// Human-readable confirmation message
    pub message: String,

    /// ID assigned to the new lead
    pub lead_id: i64,
}

/// Admin-editable lead fields
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregate lead counts
#[derive(Debug, Clone, Deserialize)]
pub struct LeadStats {
    /// Total leads on record
    pub total: u64,

    /// Lead counts keyed by status
    #[serde(default)]
    pub by_status: HashMap<String, u64>,

    /// Leads received in the last seven days
    pub recent_7_days: u64,

    /// Leads received this calendar month
    pub this_month: u64,
}
