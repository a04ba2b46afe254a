//! EmBrain entity types.
//!
//! An entity is a person or organization record held in the POI repository,
//! carrying a free-form ordered tag list.

use serde::{Deserialize, Serialize};

/// Kind of record held in the POI repository.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Organization,
}

/// A person or organization tracked by EmBrain.
///
/// `tags` behaves like an ordered set: [`Entity::apply_tag_update`] never
/// introduces duplicates, and removals keep the relative order of the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Entity {
    /// Create an entity with the given tags and optional notes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: EntityKind,
        tags: &[&str],
        notes: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            notes: notes.map(str::to_string),
        }
    }

    /// Apply a tag update in place.
    ///
    /// Every tag listed in `remove` is dropped first (exact match), then each
    /// tag of `add` that is not already present is appended at the end.
    pub fn apply_tag_update(&mut self, add: &[String], remove: &[String]) {
        self.tags.retain(|tag| !remove.contains(tag));
        for tag in add {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
    }

    /// Whether one of the entity's tags equals `tag` ignoring case.
    ///
    /// `tag` is expected to be lower-cased already.
    pub fn has_tag_lowercase(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Body of `POST /api/embrain/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-insensitive substring matched against the entity name.
    #[serde(default)]
    pub q: String,
    /// Optional case-insensitive tag filter.
    #[serde(default)]
    pub tag: Option<String>,
}

/// Body of `POST /api/embrain/tags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUpdateRequest {
    pub id: String,
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
}

/// Body of `POST /api/embrain/create-instance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstanceRequest {
    pub name: String,
}

/// Response of `POST /api/embrain/create-instance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceCreated {
    #[serde(rename = "instanceId")]
    pub instance_id: String,
    pub name: String,
    pub status: String,
}

impl InstanceCreated {
    pub const PROVISIONING: &'static str = "provisioning";

    /// A freshly requested instance, always reported as provisioning.
    pub fn provisioning(instance_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            status: Self::PROVISIONING.to_string(),
        }
    }
}
