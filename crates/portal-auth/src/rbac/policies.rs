//! Static role-to-permission policy tables.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use portal_core::error::AppError;
use portal_entity::account::AccountRole;

/// A named capability in the portal, checked as `resource:action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    DocumentsRead,
    DocumentsWrite,
    DocumentsDelete,
    RequestsRead,
    RequestsWrite,
    RequestsManage,
    MessagesRead,
    MessagesWrite,
    AuditRead,
    SecurityRead,
    SecurityManage,
    SettingsRead,
    SettingsWrite,
    OrganizationManage,
}

impl Permission {
    /// The wire form of this permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentsRead => "documents:read",
            Self::DocumentsWrite => "documents:write",
            Self::DocumentsDelete => "documents:delete",
            Self::RequestsRead => "requests:read",
            Self::RequestsWrite => "requests:write",
            Self::RequestsManage => "requests:manage",
            Self::MessagesRead => "messages:read",
            Self::MessagesWrite => "messages:write",
            Self::AuditRead => "audit:read",
            Self::SecurityRead => "security:read",
            Self::SecurityManage => "security:manage",
            Self::SettingsRead => "settings:read",
            Self::SettingsWrite => "settings:write",
            Self::OrganizationManage => "organization:manage",
        }
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "documents:read" => Ok(Self::DocumentsRead),
            "documents:write" => Ok(Self::DocumentsWrite),
            "documents:delete" => Ok(Self::DocumentsDelete),
            "requests:read" => Ok(Self::RequestsRead),
            "requests:write" => Ok(Self::RequestsWrite),
            "requests:manage" => Ok(Self::RequestsManage),
            "messages:read" => Ok(Self::MessagesRead),
            "messages:write" => Ok(Self::MessagesWrite),
            "audit:read" => Ok(Self::AuditRead),
            "security:read" => Ok(Self::SecurityRead),
            "security:manage" => Ok(Self::SecurityManage),
            "settings:read" => Ok(Self::SettingsRead),
            "settings:write" => Ok(Self::SettingsWrite),
            "organization:manage" => Ok(Self::OrganizationManage),
            _ => Err(AppError::validation(format!("Unknown permission: '{s}'"))),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable role-to-permission mapping, built once at startup.
///
/// Unknown roles and unknown permission strings fail closed.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    grants: HashMap<AccountRole, HashSet<Permission>>,
}

impl RbacPolicies {
    /// Build the policy table. Admin holds a strict superset of the
    /// user grants.
    pub fn new() -> Self {
        let user: HashSet<Permission> = [
            Permission::DocumentsRead,
            Permission::RequestsRead,
            Permission::RequestsWrite,
            Permission::MessagesRead,
            Permission::MessagesWrite,
            Permission::AuditRead,
            Permission::SecurityRead,
            Permission::SettingsRead,
            Permission::SettingsWrite,
        ]
        .into_iter()
        .collect();

        let mut admin = user.clone();
        admin.extend([
            Permission::DocumentsWrite,
            Permission::DocumentsDelete,
            Permission::RequestsManage,
            Permission::SecurityManage,
            Permission::OrganizationManage,
        ]);

        let mut grants = HashMap::new();
        grants.insert(AccountRole::User, user);
        grants.insert(AccountRole::Admin, admin);

        Self { grants }
    }

    /// Check whether a role holds a permission.
    pub fn has_permission(&self, role: AccountRole, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|set| set.contains(&permission))
    }

    /// String-based check for callers holding wire-format values. Any
    /// unparseable role or permission denies.
    pub fn has_permission_str(&self, role: &str, permission: &str) -> bool {
        let (Ok(role), Ok(permission)) =
            (role.parse::<AccountRole>(), permission.parse::<Permission>())
        else {
            return false;
        };
        self.has_permission(role, permission)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_grants() {
        let policies = RbacPolicies::new();
        assert!(policies.has_permission(AccountRole::User, Permission::DocumentsRead));
        assert!(policies.has_permission(AccountRole::User, Permission::RequestsWrite));
        assert!(policies.has_permission(AccountRole::User, Permission::MessagesWrite));
        assert!(policies.has_permission(AccountRole::User, Permission::AuditRead));
        assert!(policies.has_permission(AccountRole::User, Permission::SettingsWrite));
        assert!(!policies.has_permission(AccountRole::User, Permission::DocumentsWrite));
        assert!(!policies.has_permission(AccountRole::User, Permission::DocumentsDelete));
        assert!(!policies.has_permission(AccountRole::User, Permission::RequestsManage));
        assert!(!policies.has_permission(AccountRole::User, Permission::OrganizationManage));
    }

    #[test]
    fn test_admin_is_superset_of_user() {
        let policies = RbacPolicies::new();
        let user = policies.grants.get(&AccountRole::User).unwrap();
        let admin = policies.grants.get(&AccountRole::Admin).unwrap();
        assert!(user.is_subset(admin));
        assert!(admin.len() > user.len());
    }

    #[test]
    fn test_admin_grants() {
        let policies = RbacPolicies::new();
        assert!(policies.has_permission(AccountRole::Admin, Permission::OrganizationManage));
        assert!(policies.has_permission(AccountRole::Admin, Permission::DocumentsDelete));
        assert!(policies.has_permission(AccountRole::Admin, Permission::SecurityManage));
    }

    #[test]
    fn test_string_checks_fail_closed() {
        let policies = RbacPolicies::new();
        assert!(policies.has_permission_str("admin", "organization:manage"));
        assert!(policies.has_permission_str("user", "settings:write"));
        assert!(!policies.has_permission_str("user", "organization:manage"));
        assert!(!policies.has_permission_str("superuser", "documents:read"));
        assert!(!policies.has_permission_str("admin", "documents:frobnicate"));
    }

    #[test]
    fn test_permission_round_trip() {
        for perm in [
            Permission::DocumentsRead,
            Permission::RequestsManage,
            Permission::OrganizationManage,
        ] {
            assert_eq!(perm.as_str().parse::<Permission>().unwrap(), perm);
        }
    }
}
