/// Errors produced by the preference engine.
///
/// The engine degrades silently on stale or foreign override data; these
/// variants cover the cases where the caller or trusted infrastructure data
/// is at fault.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Malformed default configuration at {category}.{notification_type}: {reason}")]
    MalformedDefault {
        category: String,
        notification_type: String,
        reason: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Role lookup failed: {0}")]
    RoleLookup(String),
}

impl PreferenceError {
    /// Shorthand for a [`PreferenceError::MalformedDefault`].
    pub fn malformed_default(
        category: &str,
        notification_type: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedDefault {
            category: category.to_string(),
            notification_type: notification_type.to_string(),
            reason: reason.into(),
        }
    }
}
