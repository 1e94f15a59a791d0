//! Role-based filtering of notification types.
//!
//! A notification type listed in the [`VisibilityRegistry`] is visible only
//! to users holding at least one of its roles. Types missing from the
//! registry, or registered with no roles, are visible to everyone. Filtering
//! only ever removes entries; it never adds types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;
use crate::model::{NotificationConfig, PreferenceBundle, UserId};
use crate::roles::{resolve_roles, RoleResolver};

// ---------------------------------------------------------------------------
// RoleSet
// ---------------------------------------------------------------------------

/// A user's roles within one course.
///
/// Forum roles and course access roles are kept apart for reporting, but
/// visibility checks treat them as one union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    forum_roles: BTreeSet<String>,
    course_roles: BTreeSet<String>,
}

impl RoleSet {
    pub fn new<F, C>(forum_roles: F, course_roles: C) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            forum_roles: forum_roles.into_iter().map(Into::into).collect(),
            course_roles: course_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `role` is held as either a forum or a course access role.
    pub fn contains(&self, role: &str) -> bool {
        self.forum_roles.contains(role) || self.course_roles.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.forum_roles.is_empty() && self.course_roles.is_empty()
    }

    pub fn forum_roles(&self) -> &BTreeSet<String> {
        &self.forum_roles
    }

    pub fn course_roles(&self) -> &BTreeSet<String> {
        &self.course_roles
    }
}

// ---------------------------------------------------------------------------
// VisibilityRegistry
// ---------------------------------------------------------------------------

/// Notification type name mapped to the roles allowed to see it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityRegistry(BTreeMap<String, Vec<String>>);

impl VisibilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `notification_type` as visible to `roles`, replacing any
    /// previous entry.
    pub fn insert(&mut self, notification_type: impl Into<String>, roles: Vec<String>) {
        self.0.insert(notification_type.into(), roles);
    }

    pub fn allowed_roles(&self, notification_type: &str) -> Option<&[String]> {
        self.0.get(notification_type).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether a user holding `roles` may see `notification_type`.
    pub fn is_visible(&self, notification_type: &str, roles: &RoleSet) -> bool {
        match self.allowed_roles(notification_type) {
            None => true,
            Some(allowed) => is_visible_to(allowed, roles),
        }
    }

    /// Registered types the user may not see.
    pub fn hidden_types<'a>(&'a self, roles: &'a RoleSet) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |(_, allowed)| !is_visible_to(allowed, roles))
            .map(|(name, _)| name)
    }
}

impl FromIterator<(String, Vec<String>)> for VisibilityRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_visible_to(allowed: &[String], roles: &RoleSet) -> bool {
    allowed.is_empty() || allowed.iter().any(|role| roles.contains(role))
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Remove every notification type the user cannot see from every category.
pub fn filter_out_visible_notifications(
    mut config: NotificationConfig,
    registry: &VisibilityRegistry,
    roles: &RoleSet,
) -> NotificationConfig {
    let hidden: Vec<&str> = registry.hidden_types(roles).collect();
    if hidden.is_empty() {
        return config;
    }

    for (category, category_config) in config.iter_mut() {
        for notification_type in &hidden {
            if category_config
                .notification_types
                .remove(*notification_type)
                .is_some()
            {
                tracing::debug!(
                    category = %category,
                    notification_type,
                    "Removed notification type not visible to user"
                );
            }
        }
    }

    config
}

/// Resolve the user's roles for the bundle's course and filter the bundle.
pub fn remove_preferences_with_no_access(
    mut bundle: PreferenceBundle,
    user_id: UserId,
    registry: &VisibilityRegistry,
    resolver: &dyn RoleResolver,
) -> Result<PreferenceBundle, PreferenceError> {
    let roles = resolve_roles(resolver, user_id, &bundle.course_id)?;
    let config = std::mem::take(&mut bundle.notification_preference_config);
    bundle.notification_preference_config = filter_out_visible_notifications(config, registry, &roles);
    Ok(bundle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
