//! Implementations of the admin subcommands.
//!
//! Each command has a pure form that works on already-loaded documents and
//! is exercised directly by tests, plus the file-reading dispatch in
//! [`run`].

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use notifprefs_core::arguments::clean_arguments;
use notifprefs_core::batch::list_in_batches;
use notifprefs_core::catalog::{visibility_registry, NotificationTypeDefinition};
use notifprefs_core::lookup::{
    find_app_in_normalized_apps, find_pref_in_normalized_prefs, normalize_config,
};
use notifprefs_core::model::{validate_default_config, UserId};
use notifprefs_core::roles::StaticRoleResolver;
use notifprefs_core::visibility::remove_preferences_with_no_access;
use notifprefs_core::{aggregate_notification_configs, NotificationConfig, PreferenceBundle};

use crate::cli::Command;
use crate::config::AdminConfig;

// ---------------------------------------------------------------------------
// Input documents
// ---------------------------------------------------------------------------

/// A preference bundle tagged with the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBundle {
    pub user_id: UserId,
    #[serde(flatten)]
    pub bundle: PreferenceBundle,
}

/// Role assignments of one user in one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub user_id: UserId,
    pub course_id: String,
    #[serde(default)]
    pub forum_roles: Vec<String>,
    #[serde(default)]
    pub course_roles: Vec<String>,
}

/// Read and deserialize a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Validate the default and merge the overrides into it.
pub fn aggregate(
    default_config: &NotificationConfig,
    overrides: &[NotificationConfig],
) -> Result<NotificationConfig> {
    validate_default_config(default_config)?;
    let merged = aggregate_notification_configs(default_config, overrides)?;
    tracing::info!(
        overrides = overrides.len(),
        categories = merged.len(),
        "Aggregated notification configs"
    );
    Ok(merged)
}

/// Filter every bundle against its user's roles, `batch_size` bundles at a
/// time.
pub fn filter(
    bundles: Vec<UserBundle>,
    catalog: &[NotificationTypeDefinition],
    assignments: &[RoleAssignment],
    batch_size: usize,
) -> Result<Vec<UserBundle>> {
    let registry = visibility_registry(catalog)?;
    let resolver = build_resolver(assignments);

    let mut filtered = Vec::with_capacity(bundles.len());
    for (index, batch) in list_in_batches(&bundles, batch_size)?.enumerate() {
        for entry in batch {
            let bundle = remove_preferences_with_no_access(
                entry.bundle.clone(),
                entry.user_id,
                &registry,
                &resolver,
            )?;
            filtered.push(UserBundle {
                user_id: entry.user_id,
                bundle,
            });
        }
        tracing::info!(batch = index + 1, size = batch.len(), "Filtered preference batch");
    }

    Ok(filtered)
}

/// Flatten a configuration, optionally narrowing to one app or preference.
pub fn normalize(
    config: &NotificationConfig,
    app: Option<&str>,
    preference: Option<&str>,
) -> Result<Value> {
    let normalized = normalize_config(config);

    let value = match (app, preference) {
        (None, _) => serde_json::to_value(&normalized)?,
        (Some(app), None) => match find_app_in_normalized_apps(app, &normalized.apps) {
            Some(found) => serde_json::to_value(found)?,
            None => bail!("App '{app}' not found"),
        },
        (Some(app), Some(pref)) => {
            match find_pref_in_normalized_prefs(pref, app, &normalized.preferences) {
                Some(found) => serde_json::to_value(found)?,
                None => bail!("Preference '{pref}' not found in app '{app}'"),
            }
        }
    };

    Ok(value)
}

fn build_resolver(assignments: &[RoleAssignment]) -> StaticRoleResolver {
    let mut resolver = StaticRoleResolver::new();
    for assignment in assignments {
        for role in &assignment.forum_roles {
            resolver = resolver.with_forum_role(assignment.user_id, &assignment.course_id, role);
        }
        for role in &assignment.course_roles {
            resolver = resolver.with_course_role(assignment.user_id, &assignment.course_id, role);
        }
    }
    resolver
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Load the command's inputs from disk, run it, and return the JSON output.
pub fn run(command: &Command, config: &AdminConfig) -> Result<Value> {
    match command {
        Command::Aggregate { default, overrides } => {
            let default_config: NotificationConfig = read_json(default)?;
            let overrides = overrides
                .iter()
                .map(|path| read_json(path))
                .collect::<Result<Vec<NotificationConfig>>>()?;
            Ok(serde_json::to_value(aggregate(&default_config, &overrides)?)?)
        }
        Command::Filter {
            bundles,
            catalog,
            roles,
        } => {
            let bundles: Vec<UserBundle> = read_json(bundles)?;
            let catalog: Vec<NotificationTypeDefinition> = read_json(catalog)?;
            let assignments: Vec<RoleAssignment> = match roles {
                Some(path) => read_json(path)?,
                None => Vec::new(),
            };
            let filtered = filter(bundles, &catalog, &assignments, config.batch_size)?;
            Ok(serde_json::to_value(filtered)?)
        }
        Command::Visibility { catalog } => {
            let catalog: Vec<NotificationTypeDefinition> = read_json(catalog)?;
            Ok(serde_json::to_value(visibility_registry(&catalog)?)?)
        }
        Command::Normalize {
            config: path,
            app,
            preference,
        } => {
            let notification_config: NotificationConfig = read_json(path)?;
            normalize(&notification_config, app.as_deref(), preference.as_deref())
        }
        Command::CleanArgs { args } => match read_json::<Value>(args)? {
            Value::Object(map) => Ok(Value::Object(clean_arguments(&map))),
            _ => bail!("{} must contain a JSON object", args.display()),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
