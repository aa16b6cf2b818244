use std::{fmt::Display, str::FromStr};

use crate::errors::ConversionError;

use super::Department;

/// The role claim carried by a session. Either the distinguished admin role or
/// membership of exactly one department.
///
/// Stored as the bare identifier (`"admin"`, `"purchase"`, ...)
#[derive(
    Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    Member(Department),
}

impl Role {
    pub const ADMIN_IDENTIFIER: &'static str = "admin";

    pub fn identifier(&self) -> &'static str {
        match self {
            Role::Admin => Self::ADMIN_IDENTIFIER,
            Role::Member(department) => department.identifier(),
        }
    }

    /// Returns `true` if the role is [`Admin`].
    ///
    /// [`Admin`]: Role::Admin
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The department for members, admins are not tied to one
    pub fn department(&self) -> Option<Department> {
        match self {
            Role::Admin => None,
            Role::Member(department) => Some(*department),
        }
    }
}

impl From<Department> for Role {
    fn from(value: Department) -> Self {
        Self::Member(value)
    }
}

impl FromStr for Role {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ADMIN_IDENTIFIER {
            Ok(Self::Admin)
        } else {
            Department::try_from(s).map(Self::Member)
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Role {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.identifier().to_string()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
