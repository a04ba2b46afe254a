//! EmBrain POI repository.

use dshield_shared::{Entity, InstanceCreated};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::MockDataError;
use crate::utils::random_hex;

/// Ordered list of entities supporting search and tag updates.
///
/// Entities are never added or deleted after construction; only their tags
/// change.
pub struct EntityStore {
    entities: RwLock<Vec<Entity>>,
}

impl EntityStore {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }

    /// Find entities by name substring and tag, both case-insensitive.
    ///
    /// `query` and `tag` are trimmed and lower-cased; an empty value matches
    /// everything. Results keep insertion order.
    pub async fn search(&self, query: &str, tag: Option<&str>) -> Vec<Entity> {
        let query = query.trim().to_lowercase();
        let tag = tag.unwrap_or_default().trim().to_lowercase();

        let entities = self.entities.read().await;
        let results: Vec<Entity> = entities
            .iter()
            .filter(|e| query.is_empty() || e.name.to_lowercase().contains(&query))
            .filter(|e| tag.is_empty() || e.has_tag_lowercase(&tag))
            .cloned()
            .collect();

        debug!(
            query = %query,
            tag = %tag,
            matches = results.len(),
            "Searched entities"
        );
        results
    }

    /// Remove then add tags on the entity with the given id.
    ///
    /// # Returns
    ///
    /// * `Ok(Entity)` - The entity after the update
    /// * `Err(MockDataError::EntityNotFound)` - If no entity has this id
    pub async fn update_tags(
        &self,
        id: &str,
        add: &[String],
        remove: &[String],
    ) -> Result<Entity, MockDataError> {
        let mut entities = self.entities.write().await;
        let entity = entities
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| MockDataError::entity_not_found(id))?;

        entity.apply_tag_update(add, remove);

        info!(entity_id = %id, tags = ?entity.tags, "Updated entity tags");
        Ok(entity.clone())
    }

    /// Request a new EmBrain instance.
    ///
    /// Nothing is stored; the response only carries a fresh `inst_` id.
    pub fn create_instance(&self, name: &str) -> InstanceCreated {
        let instance_id = format!("inst_{}", random_hex(8));
        info!(instance_id = %instance_id, name = %name, "Provisioning instance");
        InstanceCreated::provisioning(instance_id, name)
    }

    pub async fn get(&self, id: &str) -> Option<Entity> {
        self.entities
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }
}
