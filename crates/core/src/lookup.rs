//! Flattened ("normalized") view of a preference configuration and the
//! first-match lookups used against it.
//!
//! The nested [`NotificationConfig`] is convenient for merging, while bulk
//! update endpoints work on flat lists of apps and per-type preferences.

use serde::{Deserialize, Serialize};

use crate::model::NotificationConfig;

/// An app (category) entry of the normalized view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedApp {
    pub name: String,
    pub enabled: bool,
    pub core_notification_types: Vec<String>,
}

/// A single notification type entry of the normalized view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPreference {
    pub name: String,
    pub app_name: String,
    pub web: bool,
    pub push: bool,
    pub email: bool,
    pub email_cadence: String,
    pub is_core: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPreferences {
    pub apps: Vec<NormalizedApp>,
    pub preferences: Vec<NormalizedPreference>,
}

/// Flatten a configuration into app and preference lists.
///
/// Output follows the configuration's key order (apps by name, then types
/// by name within each app).
pub fn normalize_config(config: &NotificationConfig) -> NormalizedPreferences {
    let mut normalized = NormalizedPreferences::default();

    for (app_name, category) in config {
        normalized.apps.push(NormalizedApp {
            name: app_name.clone(),
            enabled: category.enabled,
            core_notification_types: category.core_notification_types.iter().cloned().collect(),
        });

        for (type_name, type_config) in &category.notification_types {
            normalized.preferences.push(NormalizedPreference {
                name: type_name.clone(),
                app_name: app_name.clone(),
                web: type_config.web,
                push: type_config.push,
                email: type_config.email,
                email_cadence: type_config.email_cadence.clone(),
                is_core: category.core_notification_types.contains(type_name),
            });
        }
    }

    normalized
}

/// Return the first app named `app_name`.
pub fn find_app_in_normalized_apps<'a>(
    app_name: &str,
    apps: &'a [NormalizedApp],
) -> Option<&'a NormalizedApp> {
    apps.iter().find(|app| app.name == app_name)
}

/// Return the first preference matching both `pref_name` and `app_name`.
pub fn find_pref_in_normalized_prefs<'a>(
    pref_name: &str,
    app_name: &str,
    prefs: &'a [NormalizedPreference],
) -> Option<&'a NormalizedPreference> {
    prefs
        .iter()
        .find(|pref| pref.name == pref_name && pref.app_name == app_name)
}
