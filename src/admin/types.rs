//! Types for the admin dashboard and user management

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Headline counters shown on the dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardCounts {
    pub total_leads: u64,
    pub total_pages: u64,
    pub total_services: u64,
    pub total_posts: u64,

    /// Leads received in the last seven days
    pub recent_leads: u64,

    /// Leads still in the `new` status
    pub new_leads: u64,

    /// Blog views summed across all posts
    pub total_views: u64,
}

/// One month's lead count
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyLeads {
    /// Month in `YYYY-MM` form
    pub month: String,

    pub count: u64,
}

/// One entry in the recent-activity stream
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    /// What kind of record produced the entry (`lead` or `post`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable description
    pub message: String,

    /// When the underlying record was created
    pub time: String,

    /// ID of the underlying record
    pub id: i64,
}

/// The dashboard aggregate
#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    /// Headline counters
    pub stats: DashboardCounts,

    /// Lead counts keyed by status
    #[serde(default)]
    pub leads_by_status: HashMap<String, u64>,

    /// Lead counts for the last six months
    #[serde(default)]
    pub monthly_leads: Vec<MonthlyLeads>,

    /// Most recent leads and posts, newest first
    #[serde(default)]
    pub recent_activity: Vec<Activity>,
}

/// Fields required to create an admin user
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,

    pub password: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Admin-editable user fields
///
/// A present `password` resets the account's password.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
