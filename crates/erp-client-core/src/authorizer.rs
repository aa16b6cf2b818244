use erp_shared::{const_config::session::SESSION_AUTH_SCHEME, token::AuthToken};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Request, RequestBuilder,
};
use tracing::warn;

use crate::SessionStore;

/// Attaches the current session's credential to outgoing requests.
///
/// Requests made without a usable session go out unchanged, some endpoints
/// (login, password reset) are meant to be called anonymously.
#[derive(Debug, Clone)]
pub struct RequestAuthorizer {
    sessions: SessionStore,
}

impl RequestAuthorizer {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Sets `Authorization: Bearer <token>` if there is a session with a token,
    /// replacing any value already on the builder
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credential() {
            Some(value) => {
                let mut headers = HeaderMap::new();
                headers.insert(AUTHORIZATION, value);
                request.headers(headers)
            }
            None => request,
        }
    }

    /// Same as [`Self::authorize`] for a request that is already built
    pub fn authorize_request(&self, mut request: Request) -> Request {
        if let Some(value) = self.credential() {
            request.headers_mut().insert(AUTHORIZATION, value);
        }
        request
    }

    fn credential(&self) -> Option<HeaderValue> {
        let session = self.sessions.load()?;
        if !session.is_authenticated() {
            return None;
        }
        bearer_header_value(&session.token)
    }
}

/// Builds the header value for `token`, marked sensitive so it is never
/// printed.
///
/// Returns `None` for an empty token or one that cannot be sent as a header
pub fn bearer_header_value(token: &AuthToken) -> Option<HeaderValue> {
    if token.is_empty() {
        return None;
    }
    match HeaderValue::from_str(&format!("{SESSION_AUTH_SCHEME} {}", token.expose())) {
        Ok(mut value) => {
            value.set_sensitive(true);
            Some(value)
        }
        Err(_) => {
            warn!("stored token is not a valid header value, sending request without it");
            None
        }
    }
}
