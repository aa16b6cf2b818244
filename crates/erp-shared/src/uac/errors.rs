use super::{Department, Role};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AccessError {
    #[error("role '{role}' is not allowed to access the {resource} department")]
    AccessDenied { role: Role, resource: Department },
}
