//! Static notification-type catalog and the visibility registry derived
//! from it.
//!
//! The catalog is platform data that only changes with a deploy, so callers
//! may build the registry once and keep it for the life of the process.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;
use crate::visibility::VisibilityRegistry;

/// One entry of the notification-type catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTypeDefinition {
    pub name: String,
    /// The app (category) this type belongs to.
    pub notification_app: String,
    #[serde(default)]
    pub is_core: bool,
    /// Roles allowed to see the type. Empty means everyone.
    #[serde(default)]
    pub visible_to: Vec<String>,
}

/// Build the type-visibility registry from the catalog.
///
/// Only types with a non-empty `visible_to` are registered. Names are
/// validated here so the filter can trust the registry keys.
pub fn visibility_registry(
    catalog: &[NotificationTypeDefinition],
) -> Result<VisibilityRegistry, PreferenceError> {
    validate_catalog(catalog)?;

    Ok(catalog
        .iter()
        .filter(|def| !def.visible_to.is_empty())
        .map(|def| (def.name.clone(), def.visible_to.clone()))
        .collect())
}

/// Reject catalogs with blank or duplicate type names.
pub fn validate_catalog(catalog: &[NotificationTypeDefinition]) -> Result<(), PreferenceError> {
    let mut seen = HashSet::new();
    for def in catalog {
        if def.name.trim().is_empty() {
            return Err(PreferenceError::Validation(
                "Notification type name must not be empty".to_string(),
            ));
        }
        if def.notification_app.trim().is_empty() {
            return Err(PreferenceError::Validation(format!(
                "Notification type '{}' has no notification_app",
                def.name
            )));
        }
        if !seen.insert(def.name.as_str()) {
            return Err(PreferenceError::Validation(format!(
                "Duplicate notification type '{}' in catalog",
                def.name
            )));
        }
    }
    Ok(())
}
