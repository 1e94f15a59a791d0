//! Merging of per-course preference configurations into one aggregate.
//!
//! Booleans follow "most permissive wins": a flag is set in the aggregate
//! when the default or any override sets it. Email cadence is never taken
//! from an override; every merged type carries the default's cadence.
//! Categories and types absent from the default are ignored.
//!
//! The default is only borrowed. The result is always an independent value,
//! including when there are no overrides.

use crate::error::PreferenceError;
use crate::model::{CategoryConfig, NotificationConfig, TypeConfig};

/// Merge `overrides` into a copy of `default_config`.
///
/// Every combining step is a logical OR or a set union, so the order of
/// `overrides` does not affect the result.
pub fn aggregate_notification_configs(
    default_config: &NotificationConfig,
    overrides: &[NotificationConfig],
) -> Result<NotificationConfig, PreferenceError> {
    let mut result = default_config.clone();
    if overrides.is_empty() {
        return Ok(result);
    }

    log_unknown_categories(default_config, overrides);

    for (category, category_config) in result.iter_mut() {
        for config in overrides {
            let Some(other) = config.get(category) else {
                continue;
            };
            merge_category(category, category_config, other, default_config)?;
        }
    }

    Ok(result)
}

/// Fold one override category into the accumulated category.
fn merge_category(
    category: &str,
    merged: &mut CategoryConfig,
    other: &CategoryConfig,
    default_config: &NotificationConfig,
) -> Result<(), PreferenceError> {
    merged.enabled |= other.enabled;
    merged
        .core_notification_types
        .extend(other.core_notification_types.iter().cloned());

    for (type_key, type_config) in &other.notification_types {
        let Some(merged_type) = merged.notification_types.get_mut(type_key) else {
            tracing::debug!(
                category,
                notification_type = %type_key,
                "Dropping override for notification type absent from default"
            );
            continue;
        };
        merge_type(merged_type, type_config);
        merged_type.email_cadence = default_cadence(default_config, category, type_key)?.to_string();
    }

    Ok(())
}

fn merge_type(merged: &mut TypeConfig, other: &TypeConfig) {
    merged.web |= other.web;
    merged.push |= other.push;
    merged.email |= other.email;
}

/// Read a type's cadence from the untouched default.
fn default_cadence<'a>(
    default_config: &'a NotificationConfig,
    category: &str,
    type_key: &str,
) -> Result<&'a str, PreferenceError> {
    default_config
        .get(category)
        .and_then(|c| c.notification_types.get(type_key))
        .map(|t| t.email_cadence.as_str())
        .ok_or_else(|| {
            PreferenceError::malformed_default(category, type_key, "type missing from default")
        })
}

fn log_unknown_categories(default_config: &NotificationConfig, overrides: &[NotificationConfig]) {
    for config in overrides {
        for category in config.keys().filter(|c| !default_config.contains_key(*c)) {
            tracing::debug!(category = %category, "Dropping override for unknown category");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
