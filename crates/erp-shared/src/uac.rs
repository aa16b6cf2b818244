//! Shared items related to user account control

mod access;
mod department;
mod errors;
mod responses;
mod role;
mod user;

pub use access::{authorize_navigation, can_access, can_access_raw, AccessRequest, Decision};
pub use department::Department;
pub use errors::AccessError;
pub use responses::LoginResponse;
pub use role::Role;
pub use user::UserId;
