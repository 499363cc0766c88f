use std::{collections::HashSet, path::Path};

use chrono::{DateTime, Utc};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::{
    date::{ByRecency, PostedOn},
    sort::Engagement,
    title::Title,
};

/// A post or photo as the content API returns it.
///
/// Only the id, creation instant and vote counters matter to the list engine.
/// Everything else rides along in `extra` and is written back out unchanged.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downvotes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
            upvotes: None,
            downvotes: None,
            title: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_votes(mut self, upvotes: u64, downvotes: u64) -> Self {
        self.upvotes = Some(upvotes);
        self.downvotes = Some(downvotes);
        self
    }

    /// A pass-through string field such as `file` or `author`.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}

impl PostedOn for ContentRecord {
    fn posted_on(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Engagement for ContentRecord {
    fn upvotes(&self) -> u64 {
        self.upvotes.unwrap_or(0)
    }

    fn downvotes(&self) -> u64 {
        self.downvotes.unwrap_or(0)
    }
}

impl Title for ContentRecord {
    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// A fetched collection, in the order the API returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentRecords {
    records: Vec<ContentRecord>,
}

impl ContentRecords {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ContentRecord> =
            serde_json::from_str(json).wrap_err("Records should be a JSON array of posts")?;

        debug!(count = records.len(), "Parsed content records");

        Ok(Self { records })
    }

    #[instrument(name = "ContentRecords::from_path")]
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Could not read records from {}", path.display()))?;

        Self::from_json(&json)
            .wrap_err_with(|| format!("One of the records in {} failed to parse", path.display()))
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ContentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn by_recency(&self) -> Vec<&ContentRecord> {
        self.records.by_recency()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.records.len());

        for record in &self.records {
            if !seen.insert(record.id.as_str()) {
                return Err(eyre!("Id {} is not unique", record.id));
            }
        }

        Ok(())
    }
}

impl From<Vec<ContentRecord>> for ContentRecords {
    fn from(records: Vec<ContentRecord>) -> Self {
        Self::new(records)
    }
}
