use std::{fmt::Display, str::FromStr};

use strum::IntoEnumIterator as _;

use crate::errors::ConversionError;

/// The areas of the ERP a non-admin user can be assigned to. Each one is a
/// tile on the dashboard and a route of its own.
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Department {
    Production,
    Purchase,
    Store,
    Assembly,
    Finance,
    Sales,
}

impl Department {
    /// The identifier used in stored sessions and role claims
    pub fn identifier(&self) -> &'static str {
        self.into()
    }

    pub fn route_path(&self) -> String {
        format!("/{}", self.identifier())
    }

    /// Finds the department a route belongs to using its first segment.
    ///
    /// `/purchase` and `/purchase/orders/7` both belong to
    /// [`Department::Purchase`]
    pub fn from_route_path(path: &str) -> Option<Self> {
        let first_segment = path.trim_start_matches('/').split(['/', '?', '#']).next()?;
        Self::from_str(first_segment).ok()
    }
}

impl FromStr for Department {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ConversionError::Empty);
        }
        Self::iter()
            .find(|department| department.identifier() == s)
            .ok_or_else(|| ConversionError::UnknownIdentifier(s.to_string()))
    }
}

impl TryFrom<&str> for Department {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_text = match self {
            Department::Production => "Production",
            Department::Purchase => "Purchasing",
            Department::Store => "Inventory",
            Department::Assembly => "Assembly",
            Department::Finance => "Finance",
            Department::Sales => "Sales",
        };
        write!(f, "{display_text}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[rstest]
    #[case("production", Department::Production)]
    #[case("purchase", Department::Purchase)]
    #[case("store", Department::Store)]
    #[case("assembly", Department::Assembly)]
    #[case("finance", Department::Finance)]
    #[case("sales", Department::Sales)]
    fn identifiers(#[case] identifier: &str, #[case] department: Department) {
        assert_eq!(department.identifier(), identifier);
        assert_eq!(Department::try_from(identifier), Ok(department));
    }

    #[rstest]
    #[case::empty("", ConversionError::Empty)]
    #[case::unknown("warehouse", ConversionError::UnknownIdentifier("warehouse".into()))]
    #[case::wrong_case("Store", ConversionError::UnknownIdentifier("Store".into()))]
    #[case::admin_is_not_a_department("admin", ConversionError::UnknownIdentifier("admin".into()))]
    fn invalid_identifiers(#[case] identifier: &str, #[case] expected: ConversionError) {
        assert_eq!(Department::try_from(identifier).unwrap_err(), expected);
    }

    #[rstest]
    #[case::bare("/purchase", Some(Department::Purchase))]
    #[case::nested("/purchase/orders/7", Some(Department::Purchase))]
    #[case::no_leading_slash("store", Some(Department::Store))]
    #[case::query("/sales?page=2", Some(Department::Sales))]
    #[case::root("/", None)]
    #[case::unknown("/login", None)]
    fn route_paths(#[case] path: &str, #[case] expected: Option<Department>) {
        assert_eq!(Department::from_route_path(path), expected);
    }

    #[test]
    fn route_path_round_trips_for_every_department() {
        for department in Department::iter() {
            assert_eq!(
                Department::from_route_path(&department.route_path()),
                Some(department)
            );
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let mut identifiers: Vec<_> = Department::iter().map(|d| d.identifier()).collect();
        identifiers.sort();
        identifiers.dedup();
        assert_eq!(identifiers.len(), Department::COUNT);
    }

    #[test]
    fn serde_uses_identifier() {
        let json = serde_json::to_string(&Department::Store).unwrap();
        assert_eq!(json, r#""store""#);
    }
}
