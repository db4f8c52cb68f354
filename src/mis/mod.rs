//! MIS report templates
//!
//! Templates define a named, ordered column schema; their rows are opaque
//! tabular data moved in and out through the server's file conversion.
//! Imports submit multipart form data; exports request a binary payload and
//! return it untouched.

mod types;

use reqwest::multipart;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Error;
use crate::fetch::Http;

pub use types::*;

#[derive(Debug, Deserialize)]
struct TemplateList {
    templates: Vec<MisTemplate>,
}

#[derive(Debug, Deserialize)]
struct TemplateEnvelope {
    template: MisTemplate,
}

#[derive(Debug, Deserialize)]
struct RowList {
    rows: Vec<MisRow>,
}

#[derive(Debug, Deserialize)]
struct ImportReceipt {
    imported: u64,
}

#[derive(Debug, Serialize)]
struct NewTemplate<'a> {
    name: &'a str,
    columns: &'a [MisColumn],
}

/// Client for MIS report templates
#[derive(Clone)]
pub struct MisClient {
    http: Arc<Http>,
}

impl MisClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// List all templates, newest first
    pub async fn templates(&self) -> Result<Vec<MisTemplate>, Error> {
        let list = self
            .http
            .get("/admin/mis/templates")
            .execute::<TemplateList>()
            .await?;
        Ok(list.templates)
    }

    /// Create a template from a name and column schema
    pub async fn create_template(
        &self,
        name: &str,
        columns: &[MisColumn],
    ) -> Result<MisTemplate, Error> {
        let envelope = self
            .http
            .post("/admin/mis/templates")
            .json(&NewTemplate { name, columns })?
            .execute::<TemplateEnvelope>()
            .await?;
        Ok(envelope.template)
    }

    /// Get a template by ID
    pub async fn template(&self, id: i64) -> Result<MisTemplate, Error> {
        let envelope = self
            .http
            .get(&format!("/admin/mis/templates/{}", id))
            .execute::<TemplateEnvelope>()
            .await?;
        Ok(envelope.template)
    }

    /// Update a template's name or columns
    pub async fn update_template(
        &self,
        id: i64,
        update: &MisTemplateUpdate,
    ) -> Result<MisTemplate, Error> {
        let envelope = self
            .http
            .put(&format!("/admin/mis/templates/{}", id))
            .json(update)?
            .execute::<TemplateEnvelope>()
            .await?;
        Ok(envelope.template)
    }

    /// Delete a template and all of its rows
    pub async fn delete_template(&self, id: i64) -> Result<(), Error> {
        self.http
            .delete(&format!("/admin/mis/templates/{}", id))
            .execute_empty()
            .await
    }

    /// List a template's imported rows, newest first
    pub async fn rows(&self, id: i64) -> Result<Vec<MisRow>, Error> {
        let list = self
            .http
            .get(&format!("/admin/mis/templates/{}/rows", id))
            .execute::<RowList>()
            .await?;
        Ok(list.rows)
    }

    /// Upload a report file into a template
    ///
    /// The file rides as the `file` part of a multipart form; `format` labels
    /// the file type when the name alone is ambiguous. Returns how many rows
    /// the server imported.
    pub async fn import(
        &self,
        id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        format: Option<ExportFormat>,
    ) -> Result<u64, Error> {
        let mut form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(bytes).file_name(file_name.to_string()),
        );

        if let Some(format) = format {
            form = form.text("format", format.as_str());
        }

        let receipt = self
            .http
            .post(&format!("/admin/mis/templates/{}/import", id))
            .multipart(form)
            .execute::<ImportReceipt>()
            .await?;

        Ok(receipt.imported)
    }

    /// Download a template's rows in the given format
    ///
    /// The payload is returned as-is; writing it to a file is the caller's
    /// concern.
    pub async fn export(&self, id: i64, format: ExportFormat) -> Result<Vec<u8>, Error> {
        self.http
            .get(&format!("/admin/mis/templates/{}/export", id))
            .query_param("format", format.as_str())
            .execute_bytes()
            .await
    }
}
