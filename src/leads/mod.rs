//! Contact-form leads
//!
//! The public surface is a single submission endpoint; everything else lives
//! under the admin prefix. The CSV export requests a binary payload and hands
//! it back untouched for the caller to write out.

mod types;

use serde::Deserialize;
use std::sync::Arc;

use crate::error::Error;
use crate::fetch::Http;

pub use types::*;

const ADMIN_PAGE_SIZE: u32 = 20;

#[derive(Debug, Deserialize)]
struct LeadList {
    leads: Vec<Lead>,
}

#[derive(Debug, Deserialize)]
struct LeadEnvelope {
    lead: Lead,
}

/// Client for contact-form leads
#[derive(Clone)]
pub struct LeadsClient {
    http: Arc<Http>,
}

impl LeadsClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Submit the public contact form
    pub async fn submit(&self, form: &ContactForm) -> Result<SubmissionReceipt, Error> {
        self.http
            .post("/contact")
            .json(form)?
            .execute::<SubmissionReceipt>()
            .await
    }

    /// List leads, newest first, optionally filtered by status
    pub async fn admin_list(
        &self,
        page: u32,
        status: Option<LeadStatus>,
    ) -> Result<Vec<Lead>, Error> {
        let mut request = self
            .http
            .get("/contact/admin")
            .query_param("page", &page.to_string())
            .query_param("per_page", &ADMIN_PAGE_SIZE.to_string());

        if let Some(status) = status {
            request = request.query_param("status", status.as_str());
        }

        let list = request.execute::<LeadList>().await?;
        Ok(list.leads)
    }

    /// Get a lead by ID
    pub async fn admin_get(&self, id: i64) -> Result<Lead, Error> {
        let envelope = self
            .http
            .get(&format!("/contact/admin/{}", id))
            .execute::<LeadEnvelope>()
            .await?;
        Ok(envelope.lead)
    }

    /// Update a lead's status and notes
    pub async fn update(&self, id: i64, update: &LeadUpdate) -> Result<Lead, Error> {
        let envelope = self
            .http
            .put(&format!("/contact/admin/{}", id))
            .json(update)?
            .execute::<LeadEnvelope>()
            .await?;
        Ok(envelope.lead)
    }

    /// Move a lead to a new status
    pub async fn update_status(&self, id: i64, status: LeadStatus) -> Result<Lead, Error> {
        self.update(
            id,
            &LeadUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Delete a lead
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.http
            .delete(&format!("/contact/admin/{}", id))
            .execute_empty()
            .await
    }

    /// Export leads as CSV, optionally filtered by status
    ///
    /// The payload is returned as-is; turning it into a file is the caller's
    /// concern.
    pub async fn export_csv(&self, status: Option<LeadStatus>) -> Result<Vec<u8>, Error> {
        let mut request = self.http.get("/contact/admin/export");

        if let Some(status) = status {
            request = request.query_param("status", status.as_str());
        }

        request.execute_bytes().await
    }

    /// Aggregate lead counts
    pub async fn stats(&self) -> Result<LeadStats, Error> {
        self.http
            .get("/contact/admin/stats")
            .execute::<LeadStats>()
            .await
    }
}
