use crate::session::Session;

/// Body the backend sends back for a successful login
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub enum LoginResponse {
    Success(Session),
    SuccessForcePassChange(Session),
}

impl LoginResponse {
    pub fn session(&self) -> &Session {
        match self {
            LoginResponse::Success(session) | LoginResponse::SuccessForcePassChange(session) => {
                session
            }
        }
    }
}
