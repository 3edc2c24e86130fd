//! Lifecycle attributes shared by every persisted entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation, update and soft-deletion timestamps of a persisted entity
///
/// Reads never return entities whose `deleted_at` is set; only an explicit
/// hard delete reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityLifecycle {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl EntityLifecycle {
    /// Lifecycle of an entity created now
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Restore a lifecycle from persisted columns
    pub fn restore(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Update the updated_at timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for EntityLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_lifecycle_is_live() {
        let lifecycle = EntityLifecycle::new();
        assert_eq!(lifecycle.created_at, lifecycle.updated_at);
        assert!(!lifecycle.is_deleted());
    }

    #[test]
    fn test_touch_moves_updated_at_only() {
        let created = Utc::now() - Duration::hours(1);
        let mut lifecycle = EntityLifecycle::restore(created, created, None);

        lifecycle.touch();

        assert_eq!(lifecycle.created_at, created);
        assert!(lifecycle.updated_at > created);
    }

    #[test]
    fn test_restore_soft_deleted() {
        let now = Utc::now();
        let lifecycle = EntityLifecycle::restore(now, now, Some(now));
        assert!(lifecycle.is_deleted());
    }
}
