//! Record of what an executed action changed or read

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::audit::{AuditEntry, EntityType, Operation};

/// Kind of effect an action had on an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsequenceKind {
    Create,
    Read,
    Update,
    Delete,
}

/// One entity touched by an action, with JSON snapshots around the change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consequence {
    pub kind: ConsequenceKind,
    pub entity_type: EntityType,
    pub entity_id: String,
    pub entity_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
}

impl Consequence {
    fn new(
        kind: ConsequenceKind,
        entity_type: EntityType,
        entity_id: impl fmt::Display,
        entity_name: &str,
    ) -> Self {
        Self {
            kind,
            entity_type,
            entity_id: entity_id.to_string(),
            entity_name: entity_name.to_string(),
            before: None,
            after: None,
        }
    }

    pub fn created<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl fmt::Display,
        entity_name: &str,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(ConsequenceKind::Create, entity_type, entity_id, entity_name)
        }
    }

    pub fn read<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl fmt::Display,
        entity_name: &str,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(ConsequenceKind::Read, entity_type, entity_id, entity_name)
        }
    }

    pub fn updated<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl fmt::Display,
        entity_name: &str,
        before: &T,
        after: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            ..Self::new(ConsequenceKind::Update, entity_type, entity_id, entity_name)
        }
    }

    pub fn deleted<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl fmt::Display,
        entity_name: &str,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(ConsequenceKind::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// The audit log entry for this consequence. Reads are not audited.
    pub fn audit_entry(&self) -> Option<AuditEntry> {
        let operation = match self.kind {
            ConsequenceKind::Read => return None,
            ConsequenceKind::Create => Operation::Create,
            ConsequenceKind::Update => Operation::Update,
            ConsequenceKind::Delete => Operation::Delete,
        };

        Some(
            AuditEntry::new(
                operation,
                self.entity_type,
                self.entity_id.clone(),
                self.entity_name.clone(),
            )
            .with_snapshots(self.before.clone(), self.after.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_is_not_audited() {
        let consequence =
            Consequence::read(EntityType::Account, "acc-1", "Checking", &json!({"a": 1}));
        assert_eq!(consequence.kind, ConsequenceKind::Read);
        assert!(consequence.audit_entry().is_none());
    }

    #[test]
    fn test_created_entry() {
        let consequence = Consequence::created(
            EntityType::Account,
            "acc-1",
            "Checking",
            &json!({"name": "Checking"}),
        );

        let entry = consequence.audit_entry().unwrap();
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "acc-1");
        assert_eq!(entry.entity_name.as_deref(), Some("Checking"));
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_updated_entry_has_diff() {
        let consequence = Consequence::updated(
            EntityType::Account,
            "acc-1",
            "Checking",
            &json!({"closed": false}),
            &json!({"closed": true}),
        );

        let entry = consequence.audit_entry().unwrap();
        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.diff_summary.as_deref(), Some("closed: false -> true"));
    }

    #[test]
    fn test_deleted_entry() {
        let consequence =
            Consequence::deleted(EntityType::Category, "cat-1", "Food", &json!({"name": "Food"}));

        let entry = consequence.audit_entry().unwrap();
        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.entity_type, EntityType::Category);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }
}
