//! Capability gate for callers of the core.
//!
//! Permission state is never ambient: the collaborator driving the core
//! holds a `Role` for the authenticated user and checks it before invoking
//! a mutating operation. The core itself performs no permission checks.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    /// Read-only access to entries and reports.
    Viewer,
    /// May record, edit, and delete entries.
    Editor,
    /// Editor plus chart and book management.
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewEntries,
    EditEntries,
    ManageAccounts,
    ManageBooks,
}

impl Role {
    pub fn permits(self, capability: Capability) -> bool {
        match capability {
            Capability::ViewEntries => true,
            Capability::EditEntries => matches!(self, Role::Editor | Role::Admin),
            Capability::ManageAccounts | Capability::ManageBooks => matches!(self, Role::Admin),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Admin => "admin",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("role `{role}` is not permitted to {action}")]
pub struct AccessDenied {
    pub role: Role,
    pub action: &'static str,
}

/// Convenience check for collaborators: errors with a human-readable action
/// name when `role` lacks `capability`.
pub fn ensure_permitted(
    role: Role,
    capability: Capability,
    action: &'static str,
) -> Result<(), AccessDenied> {
    if role.permits(capability) {
        Ok(())
    } else {
        Err(AccessDenied { role, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_cannot_edit() {
        assert!(Role::Viewer.permits(Capability::ViewEntries));
        assert!(!Role::Viewer.permits(Capability::EditEntries));
        let err = ensure_permitted(Role::Viewer, Capability::EditEntries, "record an entry")
            .unwrap_err();
        assert_eq!(err.to_string(), "role `viewer` is not permitted to record an entry");
    }

    #[test]
    fn editor_cannot_manage_accounts() {
        assert!(Role::Editor.permits(Capability::EditEntries));
        assert!(!Role::Editor.permits(Capability::ManageAccounts));
    }

    #[test]
    fn admin_holds_every_capability() {
        for capability in [
            Capability::ViewEntries,
            Capability::EditEntries,
            Capability::ManageAccounts,
            Capability::ManageBooks,
        ] {
            assert!(Role::Admin.permits(capability));
        }
    }
}
