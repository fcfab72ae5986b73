//! Resource directory configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const fn default_available() -> bool {
    true
}

/// One resource and the categories routed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Stable identity key.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Categories resolved to this resource (case-sensitive).
    #[serde(default)]
    pub categories: Vec<String>,
    /// Initial availability.
    #[serde(default = "default_available")]
    pub available: bool,
}

impl ResourceConfig {
    /// Build an initially available resource entry.
    pub fn new<I, S>(id: impl Into<String>, label: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            label: label.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            available: true,
        }
    }
}

/// Category routing table plus the fallback resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Resources in listing order.
    pub resources: Vec<ResourceConfig>,
    /// Identity used for unmatched categories; has no availability entry.
    pub fallback_id: String,
    /// Display label of the fallback identity.
    pub fallback_label: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            resources: vec![
                ResourceConfig::new("mehta", "Dr. Mehta (General Physician)", ["fever"]),
                ResourceConfig::new("kapoor", "Dr. Kapoor (Orthopedic)", ["fracture"]),
                ResourceConfig::new("sharma", "Dr. Sharma (Cardiologist)", ["chest pain"]),
                ResourceConfig::new("sinha", "Dr. Sinha (Plastic Surgeon)", ["burn"]),
                ResourceConfig::new("rao", "Dr. Rao (Neurologist)", ["headache"]),
                ResourceConfig::new("rathi", "Dr. Rathi (Gynecologist)", ["pregnancy"]),
            ],
            fallback_id: "general".into(),
            fallback_label: "General Doctor".into(),
        }
    }
}

impl DirectoryConfig {
    /// Validate identities, labels and category routing.
    pub fn validate(&self) -> Result<(), String> {
        if self.resources.is_empty() {
            return Err("at least one resource must be defined".into());
        }
        if self.fallback_id.is_empty() || self.fallback_label.is_empty() {
            return Err("fallback id and label must be non-empty".into());
        }

        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        let mut categories = HashSet::new();
        for resource in &self.resources {
            if resource.id.is_empty() {
                return Err("resource id must be non-empty".into());
            }
            if resource.label.is_empty() {
                return Err(format!("resource `{}` has an empty label", resource.id));
            }
            if resource.id == self.fallback_id {
                return Err(format!(
                    "resource `{}` collides with the fallback id",
                    resource.id
                ));
            }
            if !ids.insert(resource.id.as_str()) {
                return Err(format!("duplicate resource id `{}`", resource.id));
            }
            if resource.label == self.fallback_label || resource.label == self.fallback_id {
                return Err(format!(
                    "resource `{}` label collides with the fallback",
                    resource.id
                ));
            }
            if !labels.insert(resource.label.as_str()) {
                return Err(format!("duplicate resource label `{}`", resource.label));
            }
            for category in &resource.categories {
                if !categories.insert(category.as_str()) {
                    return Err(format!("category `{category}` is routed twice"));
                }
            }
        }

        // Ids and labels share one lookup namespace.
        for resource in &self.resources {
            if resource.label != resource.id && ids.contains(resource.label.as_str()) {
                return Err(format!(
                    "label `{}` of resource `{}` is another resource's id",
                    resource.label, resource.id
                ));
            }
        }
        if ids.contains(self.fallback_label.as_str()) {
            return Err(format!(
                "fallback label `{}` is a resource id",
                self.fallback_label
            ));
        }
        Ok(())
    }
}
