//! Notification preference data model.
//!
//! These types serialize to the interchange shape shared with the
//! preference store:
//!
//! ```json
//! {
//!   "discussion": {
//!     "enabled": true,
//!     "core_notification_types": ["new_comment"],
//!     "notification_types": {
//!       "new_comment": { "web": true, "push": false, "email": false, "email_cadence": "Daily" }
//!     }
//!   }
//! }
//! ```
//!
//! Fields absent from a document deserialize to their "no contribution"
//! value (`false`, empty collection, empty cadence), so partially populated
//! per-course overrides can be fed to the aggregator as-is.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Email digest sent once a day.
pub const CADENCE_DAILY: &str = "Daily";

/// Email digest sent once a week.
pub const CADENCE_WEEKLY: &str = "Weekly";

/// Email sent as soon as the notification is created.
pub const CADENCE_IMMEDIATELY: &str = "Immediately";

/// No email is sent.
pub const CADENCE_NEVER: &str = "Never";

/// All valid email cadence strings.
pub const VALID_CADENCES: &[&str] = &[
    CADENCE_DAILY,
    CADENCE_WEEKLY,
    CADENCE_IMMEDIATELY,
    CADENCE_NEVER,
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// User primary keys as issued by the platform's user store.
pub type UserId = i64;

/// Delivery settings for a single notification type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConfig {
    pub web: bool,
    pub push: bool,
    pub email: bool,
    pub email_cadence: String,
}

/// Settings for one notification app (category).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub enabled: bool,
    /// Types that are always delivered together as the app's "core" group.
    pub core_notification_types: BTreeSet<String>,
    pub notification_types: BTreeMap<String, TypeConfig>,
}

/// A full preference configuration keyed by category name.
pub type NotificationConfig = BTreeMap<String, CategoryConfig>;

/// A user's preference configuration for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceBundle {
    pub course_id: String,
    pub notification_preference_config: NotificationConfig,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a cadence string is one of [`VALID_CADENCES`].
pub fn validate_cadence(cadence: &str) -> Result<(), String> {
    if VALID_CADENCES.contains(&cadence) {
        Ok(())
    } else {
        Err(format!(
            "Invalid email cadence '{cadence}'. Must be one of: {}",
            VALID_CADENCES.join(", ")
        ))
    }
}

/// Boundary check for the trusted default configuration.
///
/// Run once when the default is loaded. Every type must carry a known
/// email cadence because the aggregator copies cadences from the default
/// verbatim.
pub fn validate_default_config(config: &NotificationConfig) -> Result<(), PreferenceError> {
    for (category, category_config) in config {
        for (type_key, type_config) in &category_config.notification_types {
            validate_cadence(&type_config.email_cadence)
                .map_err(|reason| PreferenceError::malformed_default(category, type_key, reason))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
