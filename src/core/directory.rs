//! Category routing and resource availability.
//!
//! The directory owns two tables: a static `category -> ResourceId` routing
//! table and the mutable availability flag per known resource. Labels are kept
//! apart from identities so display text can change without breaking lookups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::record::{Availability, ResourceId};
use super::SchedulerError;
use crate::config::DirectoryConfig;

/// Rendering snapshot of one known resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    /// Stable identity.
    pub id: ResourceId,
    /// Display label.
    pub label: String,
    /// Current availability flag.
    pub available: bool,
}

#[derive(Debug, Clone)]
struct Slot {
    id: ResourceId,
    label: String,
    available: bool,
}

/// Static routing table plus per-resource availability.
#[derive(Debug, Clone)]
pub struct ResourceDirectory {
    routes: HashMap<String, ResourceId>,
    slots: Vec<Slot>,
    index: HashMap<ResourceId, usize>,
    fallback: ResourceId,
    fallback_label: String,
}

impl ResourceDirectory {
    /// Build a directory from validated configuration.
    pub fn from_config(cfg: &DirectoryConfig) -> Result<Self, SchedulerError> {
        cfg.validate().map_err(SchedulerError::InvalidConfig)?;
        Ok(Self::build(cfg))
    }

    fn build(cfg: &DirectoryConfig) -> Self {
        let mut routes = HashMap::new();
        let mut slots = Vec::with_capacity(cfg.resources.len());
        let mut index = HashMap::with_capacity(cfg.resources.len());
        for resource in &cfg.resources {
            let id = ResourceId::new(resource.id.clone());
            for category in &resource.categories {
                routes.insert(category.clone(), id.clone());
            }
            index.insert(id.clone(), slots.len());
            slots.push(Slot {
                id,
                label: resource.label.clone(),
                available: resource.available,
            });
        }

        Self {
            routes,
            slots,
            index,
            fallback: ResourceId::new(cfg.fallback_id.clone()),
            fallback_label: cfg.fallback_label.clone(),
        }
    }

    /// Exact-match category lookup; unmatched categories go to the fallback.
    pub fn resolve(&self, category: &str) -> ResourceId {
        self.routes
            .get(category)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }

    /// Label of the resource `category` resolves to.
    pub fn resolve_label(&self, category: &str) -> &str {
        self.routes
            .get(category)
            .map_or(self.fallback_label.as_str(), |id| self.label(id))
    }

    /// Display label for an identity. Unknown identities render as their raw key.
    pub fn label<'a>(&'a self, id: &'a ResourceId) -> &'a str {
        if *id == self.fallback {
            return &self.fallback_label;
        }
        self.slot(id).map_or(id.as_str(), |slot| slot.label.as_str())
    }

    /// The identity used for unmatched categories.
    pub const fn fallback(&self) -> &ResourceId {
        &self.fallback
    }

    /// Find a known resource by its display label.
    pub fn find_by_label(&self, label: &str) -> Option<ResourceId> {
        self.slots
            .iter()
            .find(|slot| slot.label == label)
            .map(|slot| slot.id.clone())
    }

    /// Accept either an identity key or a display label.
    pub fn lookup(&self, identity_or_label: &str) -> Option<ResourceId> {
        let id = ResourceId::new(identity_or_label);
        if self.index.contains_key(&id) {
            return Some(id);
        }
        self.find_by_label(identity_or_label)
    }

    /// Current availability; `Unknown` for identities without an entry.
    pub fn is_available(&self, id: &ResourceId) -> Availability {
        self.slot(id)
            .map_or(Availability::Unknown, |slot| Availability::from_flag(slot.available))
    }

    /// Set availability of a known resource.
    pub fn set_available(&mut self, id: &ResourceId, value: bool) -> Result<(), SchedulerError> {
        let slot = self
            .index
            .get(id)
            .and_then(|&i| self.slots.get_mut(i))
            .ok_or_else(|| SchedulerError::NotFound(format!("resource `{id}`")))?;
        slot.available = value;
        Ok(())
    }

    /// Snapshot of every known resource in configuration order.
    pub fn list_all(&self) -> Vec<ResourceStatus> {
        self.slots
            .iter()
            .map(|slot| ResourceStatus {
                id: slot.id.clone(),
                label: slot.label.clone(),
                available: slot.available,
            })
            .collect()
    }

    /// Number of known resources currently busy.
    pub fn busy_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.available).count()
    }

    fn slot(&self, id: &ResourceId) -> Option<&Slot> {
        self.index.get(id).and_then(|&i| self.slots.get(i))
    }
}

impl Default for ResourceDirectory {
    fn default() -> Self {
        Self::build(&DirectoryConfig::default())
    }
}
