//! Decides which department areas a role may enter. Everything here is a pure
//! function of its inputs so it can be called from anywhere at any time.

use tracing::instrument;

use super::{AccessError, Department, Role};

/// Outcome of a navigation attempt
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The caller may render / enter the resource
    Allow,
    /// The caller must show an access denied notice instead of the resource
    Deny,
}

impl Decision {
    /// Returns `true` if the decision is [`Allow`].
    ///
    /// [`Allow`]: Decision::Allow
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for Decision {
    fn from(value: bool) -> Self {
        if value {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// A single navigation attempt by the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequest {
    pub requested_resource: Department,
    pub acting_role: Role,
}

impl AccessRequest {
    pub fn new(acting_role: Role, requested_resource: Department) -> Self {
        Self {
            requested_resource,
            acting_role,
        }
    }

    pub fn decide(&self) -> Decision {
        authorize_navigation(&self.acting_role, &self.requested_resource)
    }

    /// Same as [`Self::decide`] but a denial comes back as an error for callers
    /// that want to use `?`
    pub fn into_result(self) -> Result<Department, AccessError> {
        match self.decide() {
            Decision::Allow => Ok(self.requested_resource),
            Decision::Deny => Err(AccessError::AccessDenied {
                role: self.acting_role,
                resource: self.requested_resource,
            }),
        }
    }
}

/// Admins may enter everything, members only their own department
pub fn can_access(role: &Role, requested_resource: &Department) -> bool {
    match role {
        Role::Admin => true,
        Role::Member(department) => department == requested_resource,
    }
}

#[instrument(ret)]
pub fn authorize_navigation(role: &Role, requested_resource: &Department) -> Decision {
    can_access(role, requested_resource).into()
}

/// Works on raw identifiers as they come off a route or a stored claim.
///
/// Defined for every pair of strings: `"admin"` may enter anything, any other
/// role only the resource carrying exactly its own name. Agrees with
/// [`can_access`] on every known identifier.
pub fn can_access_raw(role: &str, requested_resource: &str) -> bool {
    role == Role::Admin.identifier() || role == requested_resource
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;
    use Department as d;

    fn all_roles() -> impl Iterator<Item = Role> {
        std::iter::once(Role::Admin).chain(Department::iter().map(Role::Member))
    }

    #[test]
    fn exhaustive_access_matrix() {
        for role in all_roles() {
            for department in Department::iter() {
                let expected = role == Role::Admin || role == Role::Member(department);
                assert_eq!(
                    can_access(&role, &department),
                    expected,
                    "role: {role} department: {department:?}"
                );
            }
        }
    }

    #[test]
    fn navigation_never_disagrees_with_can_access() {
        for role in all_roles() {
            for department in Department::iter() {
                assert_eq!(
                    authorize_navigation(&role, &department).is_allowed(),
                    can_access(&role, &department)
                );
                assert_eq!(
                    AccessRequest::new(role, department).decide(),
                    authorize_navigation(&role, &department)
                );
            }
        }
    }

    #[test]
    fn raw_matches_typed_over_known_identifiers() {
        for role in all_roles() {
            for department in Department::iter() {
                assert_eq!(
                    can_access_raw(role.identifier(), department.identifier()),
                    can_access(&role, &department),
                    "role: {role} department: {department:?}"
                );
            }
        }
    }

    #[rstest]
    #[case::own_department(Role::Member(d::Purchase), d::Purchase, Decision::Allow)]
    #[case::other_department(Role::Member(d::Purchase), d::Store, Decision::Deny)]
    #[case::admin(Role::Admin, d::Store, Decision::Allow)]
    fn scenarios(#[case] role: Role, #[case] requested: Department, #[case] expected: Decision) {
        assert_eq!(authorize_navigation(&role, &requested), expected);
    }

    #[rstest]
    #[case::admin_unknown_resource("admin", "warehouse", true)]
    #[case::admin_empty_resource("admin", "", true)]
    #[case::admin_admin("admin", "admin", true)]
    #[case::unknown_equal_strings("janitor", "janitor", true)]
    #[case::unknown_role("janitor", "store", false)]
    #[case::member_admin_area("purchase", "admin", false)]
    #[case::empty_role("", "store", false)]
    #[case::both_empty("", "", true)]
    #[case::case_sensitive("Purchase", "purchase", false)]
    #[case::admin_is_case_sensitive("Admin", "store", false)]
    fn raw_is_total(#[case] role: &str, #[case] resource: &str, #[case] expected: bool) {
        assert_eq!(can_access_raw(role, resource), expected);
    }

    #[test]
    fn raw_is_admin_or_same_name_for_any_strings() {
        let identifiers: Vec<&str> = all_roles()
            .map(|role| role.identifier())
            .chain(["", " ", "janitor", "Store", "purchase/orders", "ADMIN"])
            .collect();
        for role in &identifiers {
            for resource in &identifiers {
                assert_eq!(
                    can_access_raw(role, resource),
                    *role == "admin" || role == resource,
                    "role: {role:?} resource: {resource:?}"
                );
            }
        }
    }

    #[test]
    fn denial_as_error() {
        let err = AccessRequest::new(Role::Member(d::Sales), d::Finance)
            .into_result()
            .unwrap_err();
        assert_eq!(
            err,
            AccessError::AccessDenied {
                role: Role::Member(d::Sales),
                resource: d::Finance
            }
        );
        assert_eq!(
            AccessRequest::new(Role::Admin, d::Finance).into_result(),
            Ok(d::Finance)
        );
    }
}
