//! Organization member roles
//!
//! Roles are ranked: the wire value is the ordinal, and a higher ordinal
//! grants every privilege of the lower ones.

use std::fmt;

use contract_core::{wire, ContractError};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Role of a member within an organization.
///
/// The hierarchy is: Employee < Manager < Administrator < Owner.
/// On the wire the role is its ordinal (`0..=3`); any other integer is
/// rejected.
///
/// # Permission Model
///
/// - **Employee**: Works events on behalf of the organization
/// - **Manager**: Creates and edits events and tickets
/// - **Administrator**: Manages members and organization details
/// - **Owner**: Full control, including deletion of the organization
///
/// # Examples
///
/// ```
/// use contract_organizations::OrganizationMemberRole;
///
/// let role = OrganizationMemberRole::Manager;
/// assert!(role.can_manage_events());
/// assert!(!role.can_manage_members());
/// assert!(OrganizationMemberRole::Owner > OrganizationMemberRole::Administrator);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(into = "u8")]
pub enum OrganizationMemberRole {
    /// Regular staff member
    #[default]
    Employee = 0,

    /// Can create and edit events and tickets
    Manager = 1,

    /// Can manage members and organization details
    Administrator = 2,

    /// Full organization control
    Owner = 3,
}

impl OrganizationMemberRole {
    /// All roles in ascending privilege order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Employee,
            Self::Manager,
            Self::Administrator,
            Self::Owner,
        ]
    }

    /// The wire ordinal of this role.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Look a role up by its wire ordinal.
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_organizations::OrganizationMemberRole;
    ///
    /// assert_eq!(OrganizationMemberRole::from_ordinal(2), Some(OrganizationMemberRole::Administrator));
    /// assert_eq!(OrganizationMemberRole::from_ordinal(4), None);
    /// ```
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Employee),
            1 => Some(Self::Manager),
            2 => Some(Self::Administrator),
            3 => Some(Self::Owner),
            _ => None,
        }
    }

    /// Check if this role ranks at or above `min`.
    pub fn at_least(&self, min: OrganizationMemberRole) -> bool {
        *self >= min
    }

    /// Check if this role can create and edit events and tickets.
    ///
    /// # Returns
    ///
    /// `true` for Manager, Administrator, and Owner roles
    pub fn can_manage_events(&self) -> bool {
        self.at_least(Self::Manager)
    }

    /// Check if this role can invite, remove, and re-rank members.
    ///
    /// # Returns
    ///
    /// `true` for Administrator and Owner roles
    pub fn can_manage_members(&self) -> bool {
        self.at_least(Self::Administrator)
    }

    /// Check if this role can delete the organization.
    pub fn can_delete_organization(&self) -> bool {
        *self == Self::Owner
    }

    /// Parse role from its name.
    ///
    /// # Arguments
    ///
    /// * `s` - Role name (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(OrganizationMemberRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_organizations::OrganizationMemberRole;
    ///
    /// assert_eq!(OrganizationMemberRole::parse("owner"), Some(OrganizationMemberRole::Owner));
    /// assert_eq!(OrganizationMemberRole::parse("MANAGER"), Some(OrganizationMemberRole::Manager));
    /// assert_eq!(OrganizationMemberRole::parse("intern"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EMPLOYEE" => Some(Self::Employee),
            "MANAGER" => Some(Self::Manager),
            "ADMINISTRATOR" => Some(Self::Administrator),
            "OWNER" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Get the role name.
    ///
    /// # Returns
    ///
    /// Uppercase role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::Manager => "MANAGER",
            Self::Administrator => "ADMINISTRATOR",
            Self::Owner => "OWNER",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Manager => "Manager",
            Self::Administrator => "Administrator",
            Self::Owner => "Owner",
        }
    }
}

impl fmt::Display for OrganizationMemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for OrganizationMemberRole {
    type Error = ContractError;

    fn try_from(ordinal: i64) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
            .ok_or_else(|| ContractError::unknown_value("OrganizationMemberRole", ordinal))
    }
}

impl TryFrom<u64> for OrganizationMemberRole {
    type Error = ContractError;

    fn try_from(ordinal: u64) -> Result<Self, Self::Error> {
        i64::try_from(ordinal)
            .ok()
            .and_then(Self::from_ordinal)
            .ok_or_else(|| ContractError::unknown_value("OrganizationMemberRole", ordinal))
    }
}

impl From<OrganizationMemberRole> for u8 {
    fn from(role: OrganizationMemberRole) -> Self {
        role.ordinal()
    }
}

// Integers of either sign reach the ordinal check; everything else is a
// type mismatch.
impl<'de> Deserialize<'de> for OrganizationMemberRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrdinalVisitor;

        impl<'de> Visitor<'de> for OrdinalVisitor {
            type Value = OrganizationMemberRole;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an organization member role ordinal")
            }

            fn visit_i64<E: de::Error>(self, ordinal: i64) -> Result<Self::Value, E> {
                OrganizationMemberRole::from_ordinal(ordinal).ok_or_else(|| {
                    wire::unknown_value_error("OrganizationMemberRole", &ordinal.to_string())
                })
            }

            fn visit_u64<E: de::Error>(self, ordinal: u64) -> Result<Self::Value, E> {
                OrganizationMemberRole::try_from(ordinal).map_err(|_| {
                    wire::unknown_value_error("OrganizationMemberRole", &ordinal.to_string())
                })
            }
        }

        deserializer.deserialize_i64(OrdinalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(OrganizationMemberRole::Owner > OrganizationMemberRole::Administrator);
        assert!(OrganizationMemberRole::Administrator > OrganizationMemberRole::Manager);
        assert!(OrganizationMemberRole::Manager > OrganizationMemberRole::Employee);
    }

    #[test]
    fn test_role_ordinals() {
        let ordinals: Vec<u8> = OrganizationMemberRole::all()
            .iter()
            .map(|role| role.ordinal())
            .collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_role_permissions() {
        assert!(!OrganizationMemberRole::Employee.can_manage_events());
        assert!(OrganizationMemberRole::Manager.can_manage_events());
        assert!(!OrganizationMemberRole::Manager.can_manage_members());
        assert!(OrganizationMemberRole::Administrator.can_manage_members());
        assert!(!OrganizationMemberRole::Administrator.can_delete_organization());
        assert!(OrganizationMemberRole::Owner.can_delete_organization());
    }

    #[test]
    fn test_role_wire_value() {
        assert_eq!(serde_json::to_string(&OrganizationMemberRole::Owner).unwrap(), "3");

        let role: OrganizationMemberRole = serde_json::from_str("1").unwrap();
        assert_eq!(role, OrganizationMemberRole::Manager);

        assert!(serde_json::from_str::<OrganizationMemberRole>("-1").is_err());
        assert!(serde_json::from_str::<OrganizationMemberRole>("\"OWNER\"").is_err());
    }

    #[test]
    fn test_role_try_from() {
        assert_eq!(
            OrganizationMemberRole::try_from(7i64),
            Err(ContractError::unknown_value("OrganizationMemberRole", 7))
        );
    }

    #[test]
    fn test_role_default() {
        assert_eq!(OrganizationMemberRole::default(), OrganizationMemberRole::Employee);
    }

    #[test]
    fn test_role_rejects_any_integer_outside_range() {
        assert_eq!(
            OrganizationMemberRole::try_from(u64::MAX),
            Err(ContractError::unknown_value("OrganizationMemberRole", u64::MAX))
        );

        for (payload, value) in [
            ("4", "4"),
            ("-1", "-1"),
            ("18446744073709551615", "18446744073709551615"),
            ("-9223372036854775808", "-9223372036854775808"),
        ] {
            assert_eq!(
                wire::decode::<OrganizationMemberRole>(payload),
                Err(ContractError::unknown_value("OrganizationMemberRole", value)),
                "{payload}"
            );
        }

        assert!(matches!(
            wire::decode::<OrganizationMemberRole>("1.5"),
            Err(ContractError::TypeMismatch(_))
        ));
    }
}
