//! Merge-rule properties of the preference aggregator.
//!
//! Each test exercises one rule against a shared multi-category default and
//! a set of per-course overrides that disagree with it and with each other.

use notifprefs_core::aggregate_notification_configs;
use notifprefs_core::model::NotificationConfig;
use serde_json::json;

fn config(value: serde_json::Value) -> NotificationConfig {
    serde_json::from_value(value).expect("fixture should deserialize")
}

fn default_config() -> NotificationConfig {
    config(json!({
        "discussion": {
            "enabled": false,
            "core_notification_types": ["new_comment"],
            "notification_types": {
                "new_comment": { "web": false, "push": false, "email": false, "email_cadence": "Daily" },
                "new_response": { "web": true, "push": false, "email": false, "email_cadence": "Weekly" },
                "content_reported": { "web": false, "push": false, "email": true, "email_cadence": "Immediately" }
            }
        },
        "grading": {
            "enabled": true,
            "core_notification_types": [],
            "notification_types": {
                "ora_grade_assigned": { "web": false, "push": false, "email": false, "email_cadence": "Daily" }
            }
        },
        "updates": {
            "enabled": false,
            "core_notification_types": [],
            "notification_types": {
                "course_updates": { "web": false, "push": false, "email": false, "email_cadence": "Never" }
            }
        }
    }))
}

fn overrides() -> Vec<NotificationConfig> {
    vec![
        config(json!({
            "discussion": {
                "enabled": true,
                "core_notification_types": ["new_response"],
                "notification_types": {
                    "new_comment": { "web": true, "email_cadence": "Weekly" },
                    "unknown_type": { "web": true, "push": true, "email": true, "email_cadence": "Daily" }
                }
            },
            "problem_response": { "enabled": true }
        })),
        config(json!({
            "discussion": {
                "enabled": false,
                "notification_types": {
                    "new_comment": { "push": true },
                    "content_reported": { "email": false, "email_cadence": "Never" }
                }
            },
            "grading": {
                "enabled": false,
                "core_notification_types": ["ora_grade_assigned"],
                "notification_types": {
                    "ora_grade_assigned": { "email": true, "email_cadence": "Weekly" }
                }
            }
        })),
        config(json!({
            "updates": {
                "notification_types": {
                    "course_updates": { "web": true }
                }
            }
        })),
    ]
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn merging_default_into_itself_changes_nothing() {
    let default = default_config();
    let with_self = aggregate_notification_configs(&default, &[default.clone()]).unwrap();
    let without = aggregate_notification_configs(&default, &[]).unwrap();
    assert_eq!(with_self, without);
    assert_eq!(with_self, default);
}

#[test]
fn repeated_override_is_idempotent() {
    let default = default_config();
    let once = aggregate_notification_configs(&default, &overrides()).unwrap();
    let mut twice_input = overrides();
    twice_input.extend(overrides());
    let twice = aggregate_notification_configs(&default, &twice_input).unwrap();
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// Monotonic enabled / boolean union
// ---------------------------------------------------------------------------

#[test]
fn enabled_never_decreases() {
    let default = default_config();
    let result = aggregate_notification_configs(&default, &overrides()).unwrap();
    for (category, category_config) in &default {
        assert!(result[category].enabled >= category_config.enabled);
    }
    assert!(result["discussion"].enabled);
    assert!(result["grading"].enabled);
    assert!(!result["updates"].enabled);
}

#[test]
fn channel_flags_equal_or_over_all_sources() {
    let default = default_config();
    let overrides = overrides();
    let result = aggregate_notification_configs(&default, &overrides).unwrap();

    for (category, category_config) in &result {
        for (type_key, merged) in &category_config.notification_types {
            let sources = std::iter::once(&default).chain(overrides.iter());
            let (mut web, mut push, mut email) = (false, false, false);
            for source in sources {
                if let Some(t) = source
                    .get(category)
                    .and_then(|c| c.notification_types.get(type_key))
                {
                    web |= t.web;
                    push |= t.push;
                    email |= t.email;
                }
            }
            assert_eq!(merged.web, web, "{category}.{type_key}.web");
            assert_eq!(merged.push, push, "{category}.{type_key}.push");
            assert_eq!(merged.email, email, "{category}.{type_key}.email");
        }
    }
}

#[test]
fn core_types_are_union_of_sources() {
    let result = aggregate_notification_configs(&default_config(), &overrides()).unwrap();
    let discussion: Vec<&str> = result["discussion"]
        .core_notification_types
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(discussion, vec!["new_comment", "new_response"]);
    assert!(result["grading"]
        .core_notification_types
        .contains("ora_grade_assigned"));
}

// ---------------------------------------------------------------------------
// Cadence invariance
// ---------------------------------------------------------------------------

#[test]
fn cadence_matches_default_for_every_type() {
    let default = default_config();
    let result = aggregate_notification_configs(&default, &overrides()).unwrap();
    for (category, category_config) in &result {
        for (type_key, merged) in &category_config.notification_types {
            assert_eq!(
                merged.email_cadence,
                default[category].notification_types[type_key].email_cadence
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

#[test]
fn result_keys_are_subset_of_default() {
    let default = default_config();
    let result = aggregate_notification_configs(&default, &overrides()).unwrap();

    assert!(result.keys().all(|k| default.contains_key(k)));
    assert!(!result.contains_key("problem_response"));
    for (category, category_config) in &result {
        assert!(category_config
            .notification_types
            .keys()
            .all(|k| default[category].notification_types.contains_key(k)));
    }
}

// ---------------------------------------------------------------------------
// Order independence
// ---------------------------------------------------------------------------

#[test]
fn override_order_does_not_matter() {
    let default = default_config();
    let forward = overrides();
    let mut reversed = overrides();
    reversed.reverse();

    assert_eq!(
        aggregate_notification_configs(&default, &forward).unwrap(),
        aggregate_notification_configs(&default, &reversed).unwrap()
    );
}

#[test]
fn default_is_not_mutated() {
    let default = default_config();
    let snapshot = default.clone();
    let _ = aggregate_notification_configs(&default, &overrides()).unwrap();
    assert_eq!(default, snapshot);
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[test]
fn single_course_raises_web_but_keeps_daily_cadence() {
    let default = config(json!({
        "discussion": {
            "enabled": false,
            "notification_types": {
                "new_comment": { "web": false, "push": false, "email": false, "email_cadence": "Daily" }
            }
        }
    }));
    let course = config(json!({
        "discussion": {
            "enabled": true,
            "notification_types": {
                "new_comment": { "web": true, "email_cadence": "Weekly" }
            }
        }
    }));

    let result = aggregate_notification_configs(&default, &[course]).unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "discussion": {
                "enabled": true,
                "core_notification_types": [],
                "notification_types": {
                    "new_comment": { "web": true, "push": false, "email": false, "email_cadence": "Daily" }
                }
            }
        })
    );
}
