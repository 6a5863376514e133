//! Access policy: pure role checks over entity access rules.

use crate::shared::data::schema::{EntityDef, ReadOnlyRule};

/// Any role spelled `admin` in any casing grants admin. Every other role
/// comparison in the product is case-sensitive.
pub fn is_admin(roles: &[String]) -> bool {
    roles.iter().any(|role| role.eq_ignore_ascii_case("admin"))
}

/// Whether the entity's mutating actions are suppressed for this caller.
pub fn is_read_only(entity: &EntityDef, roles: &[String]) -> bool {
    match &entity.access.read_only {
        ReadOnlyRule::Static(fixed) => *fixed,
        ReadOnlyRule::ByRole(rule) => rule(roles),
    }
}

/// Whether the entity is visible to this caller at all.
pub fn can_access(entity: &EntityDef, roles: &[String]) -> bool {
    !entity.access.requires_admin || is_admin(roles)
}

/// The read-only rule shared by the curated reference tables: everyone can
/// read, only admins edit.
pub fn read_only_unless_admin(roles: &[String]) -> bool {
    !is_admin(roles)
}
