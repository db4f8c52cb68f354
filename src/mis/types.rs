//! Types for MIS report templates

use serde::{Deserialize, Serialize};
use std::fmt;

/// One column of a template's schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisColumn {
    /// Key the column's values are stored under
    #[serde(default)]
    pub key: String,

    /// Column heading shown to people
    #[serde(default)]
    pub label: String,
}

/// An admin-defined tabular report schema
#[derive(Debug, Clone, Deserialize)]
pub struct MisTemplate {
    /// The template ID
    pub id: i64,

    /// The template name; also names exported files
    pub name: String,

    /// Ordered column schema
    #[serde(default)]
    pub columns: Vec<MisColumn>,

    /// ID of the user who created the template
    #[serde(default)]
    pub created_by: Option<i64>,

    /// Whether the template is visible outside the admin area
    #[serde(default)]
    pub is_public: bool,

    /// The creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// The update time
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One imported row of report data
///
/// Row contents are opaque here: a JSON object mapping column keys to values,
/// produced and consumed server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct MisRow {
    /// The row ID
    pub id: i64,

    /// The template the row belongs to
    pub template_id: i64,

    /// The row's values keyed by column key
    pub data: serde_json::Value,

    /// The import time
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields accepted when updating a template
#[derive(Debug, Clone, Default, Serialize)]
pub struct MisTemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<MisColumn>>,
}

/// File formats the server converts report data to and from
///
/// Conversion happens server-side; the client only labels the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Docx,
    Pdf,
}

impl ExportFormat {
    /// The wire representation of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}
