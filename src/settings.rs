//! Site settings
//!
//! A flat key-value store grouped for display by category. The admin screen's
//! save flow is preserved as [`SettingsClient::save_changed`]: one update
//! request per changed key, issued concurrently and joined. A single
//! rejection surfaces as one failure with no indication of which keys
//! persisted. Reloading afterwards reflects the server's actual state.

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;
use crate::fetch::Http;

/// A site setting
#[derive(Debug, Clone, Deserialize)]
pub struct Setting {
    /// The setting ID
    #[serde(default)]
    pub id: Option<i64>,

    /// The setting key
    pub key: String,

    /// The raw stored value
    #[serde(default)]
    pub value: Option<String>,

    /// Value interpretation hint (`string`, `boolean`, `number`, `json`)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Display grouping
    #[serde(default)]
    pub category: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

/// Fields accepted when writing a single setting by key
#[derive(Debug, Clone, Serialize)]
pub struct SettingUpdate {
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PublicSettings {
    settings: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AdminSettings {
    settings: HashMap<String, Vec<Setting>>,
    all: Vec<Setting>,
}

#[derive(Debug, Deserialize)]
struct SettingEnvelope {
    setting: Setting,
}

#[derive(Debug, Serialize)]
struct SettingsBody<'a> {
    settings: &'a HashMap<String, String>,
}

/// Client for site settings
#[derive(Clone)]
pub struct SettingsClient {
    http: Arc<Http>,
}

impl SettingsClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// The public subset of settings, values already typed by the server
    pub async fn public(&self) -> Result<HashMap<String, serde_json::Value>, Error> {
        let envelope = self
            .http
            .get("/settings/public")
            .execute::<PublicSettings>()
            .await?;
        Ok(envelope.settings)
    }

    /// Every setting, as a flat list
    pub async fn admin_all(&self) -> Result<Vec<Setting>, Error> {
        let envelope = self
            .http
            .get("/settings/admin")
            .execute::<AdminSettings>()
            .await?;
        Ok(envelope.all)
    }

    /// Every setting, grouped by category
    pub async fn admin_grouped(&self) -> Result<HashMap<String, Vec<Setting>>, Error> {
        let envelope = self
            .http
            .get("/settings/admin")
            .execute::<AdminSettings>()
            .await?;
        Ok(envelope.settings)
    }

    /// Write one setting's value
    pub async fn update(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut settings = HashMap::new();
        settings.insert(key.to_string(), value.to_string());
        self.update_many(&settings).await
    }

    /// Write several settings in one request
    pub async fn update_many(&self, settings: &HashMap<String, String>) -> Result<(), Error> {
        self.http
            .post("/settings/admin")
            .json(&SettingsBody { settings })?
            .execute_empty()
            .await
    }

    /// Write one setting with its metadata
    pub async fn set(&self, key: &str, update: &SettingUpdate) -> Result<Setting, Error> {
        let envelope = self
            .http
            .put(&format!("/settings/admin/{}", key))
            .json(update)?
            .execute::<SettingEnvelope>()
            .await?;
        Ok(envelope.setting)
    }

    /// Delete a setting
    pub async fn delete(&self, key: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/settings/admin/{}", key))
            .execute_empty()
            .await
    }

    /// Save an edited settings form
    ///
    /// Diffs the edited values against the loaded originals and issues one
    /// update per changed key, concurrently, waiting for all of them. Returns
    /// how many keys were written; any rejection fails the whole save without
    /// saying which keys persisted.
    pub async fn save_changed(
        &self,
        original: &[Setting],
        edited: &HashMap<String, String>,
    ) -> Result<usize, Error> {
        let changed: Vec<(&String, &String)> = edited
            .iter()
            .filter(|(key, value)| {
                let current = original
                    .iter()
                    .find(|setting| setting.key == **key)
                    .and_then(|setting| setting.value.as_deref());
                current != Some(value.as_str())
            })
            .collect();

        if changed.is_empty() {
            return Ok(0);
        }

        try_join_all(
            changed
                .iter()
                .map(|(key, value)| self.update(key, value)),
        )
        .await?;

        Ok(changed.len())
    }
}
