//! Role resolution for visibility checks.
//!
//! Role assignments live in external stores (forum roles and course access
//! roles). The engine only consumes them through [`RoleResolver`].

use std::collections::HashMap;

use crate::error::PreferenceError;
use crate::model::UserId;
use crate::visibility::RoleSet;

// ---------------------------------------------------------------------------
// Well-known role names
// ---------------------------------------------------------------------------

pub const FORUM_ROLE_ADMINISTRATOR: &str = "Administrator";
pub const FORUM_ROLE_MODERATOR: &str = "Moderator";
pub const FORUM_ROLE_GROUP_MODERATOR: &str = "Group Moderator";
pub const FORUM_ROLE_COMMUNITY_TA: &str = "Community TA";
pub const FORUM_ROLE_STUDENT: &str = "Student";

pub const COURSE_ROLE_STAFF: &str = "staff";
pub const COURSE_ROLE_INSTRUCTOR: &str = "instructor";

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Source of a user's role assignments within a course.
pub trait RoleResolver {
    /// Forum role names assigned to `user_id` in `course_id`.
    fn forum_roles(&self, user_id: UserId, course_id: &str) -> Result<Vec<String>, PreferenceError>;

    /// Course access role names assigned to `user_id` in `course_id`.
    fn course_access_roles(
        &self,
        user_id: UserId,
        course_id: &str,
    ) -> Result<Vec<String>, PreferenceError>;
}

/// Look up both role kinds and combine them into a [`RoleSet`].
pub fn resolve_roles(
    resolver: &dyn RoleResolver,
    user_id: UserId,
    course_id: &str,
) -> Result<RoleSet, PreferenceError> {
    let forum_roles = resolver.forum_roles(user_id, course_id)?;
    let course_roles = resolver.course_access_roles(user_id, course_id)?;
    Ok(RoleSet::new(forum_roles, course_roles))
}

/// In-memory [`RoleResolver`] keyed by `(user, course)`.
///
/// Unknown pairs resolve to no roles.
#[derive(Debug, Clone, Default)]
pub struct StaticRoleResolver {
    forum: HashMap<(UserId, String), Vec<String>>,
    course: HashMap<(UserId, String), Vec<String>>,
}

impl StaticRoleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a forum role. Returns `self` for chaining.
    pub fn with_forum_role(mut self, user_id: UserId, course_id: &str, role: &str) -> Self {
        self.forum
            .entry((user_id, course_id.to_string()))
            .or_default()
            .push(role.to_string());
        self
    }

    /// Assign a course access role. Returns `self` for chaining.
    pub fn with_course_role(mut self, user_id: UserId, course_id: &str, role: &str) -> Self {
        self.course
            .entry((user_id, course_id.to_string()))
            .or_default()
            .push(role.to_string());
        self
    }
}

impl RoleResolver for StaticRoleResolver {
    fn forum_roles(&self, user_id: UserId, course_id: &str) -> Result<Vec<String>, PreferenceError> {
        Ok(self
            .forum
            .get(&(user_id, course_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn course_access_roles(
        &self,
        user_id: UserId,
        course_id: &str,
    ) -> Result<Vec<String>, PreferenceError> {
        Ok(self
            .course
            .get(&(user_id, course_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
