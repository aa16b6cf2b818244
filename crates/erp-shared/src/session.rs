use crate::{
    token::AuthToken,
    uac::{Role, UserId},
};

/// Who is currently using this client and the credential proving it
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub role: Role,
    pub token: AuthToken,
}

impl Session {
    pub fn new(user_id: UserId, role: Role, token: AuthToken) -> Self {
        Self {
            user_id,
            role,
            token,
        }
    }

    /// A session without a token is the same as being logged out
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
