//! Notification preference aggregation and visibility filtering.
//!
//! The `core` crate is pure: every function works on values passed in by the
//! caller and performs no I/O. Persistence, role storage and transport live
//! with the callers.
//!
//! - [`aggregate`] merges per-course configurations into one aggregate.
//! - [`visibility`] strips notification types a user's roles cannot see.
//! - [`catalog`] derives the type-visibility registry from the static
//!   notification-type catalog.
//! - [`batch`], [`lookup`], [`arguments`] and [`tray`] are the supporting
//!   helpers used by the management commands and request handlers.

pub mod aggregate;
pub mod arguments;
pub mod batch;
pub mod catalog;
pub mod error;
pub mod lookup;
pub mod model;
pub mod roles;
pub mod tray;
pub mod visibility;

pub use aggregate::aggregate_notification_configs;
pub use error::PreferenceError;
pub use model::{CategoryConfig, NotificationConfig, PreferenceBundle, TypeConfig};
pub use visibility::{RoleSet, VisibilityRegistry};
