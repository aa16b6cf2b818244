use anyhow::{anyhow, Context};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use erp_shared::{
    const_config::{
        client::CLIENT_DEFAULT_SERVER_ADDRESS,
        path::{PathSpec, PATH_HEALTH_CHECK, PATH_LOGIN, PATH_PASSWORD_RESET},
    },
    req_args::{LoginReqArgs, PasswordResetReqArgs},
    session::Session,
    uac::{authorize_navigation, Decision, Department, LoginResponse},
};
use futures::channel::oneshot;
use reqwest::StatusCode;
use secrecy::ExposeSecret as _;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{RequestAuthorizer, SessionStore};

pub mod api;

pub const DUMMY_ARGUMENT: &[(&str, &str)] = &[("", "")];

/// The HTTP client shared by all pages. Every request it sends goes through
/// its [`RequestAuthorizer`].
#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    authorizer: RequestAuthorizer,
    server_address: Arc<str>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(
            CLIENT_DEFAULT_SERVER_ADDRESS.to_string(),
            default_session_store(),
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_session_store() -> SessionStore {
    SessionStore::in_memory()
}

#[cfg(target_arch = "wasm32")]
fn default_session_store() -> SessionStore {
    SessionStore::new(crate::BrowserStore)
}

#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    ForcePasswordChange,
}

impl LoginOutcome {
    /// Returns `true` if the login outcome is [`ForcePasswordChange`]
    ///
    /// [`ForcePasswordChange`]: LoginOutcome::ForcePasswordChange
    #[must_use]
    pub fn needs_password_change(&self) -> bool {
        matches!(self, Self::ForcePasswordChange)
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE", skip(sessions))]
    pub fn new(server_address: String, sessions: SessionStore) -> Self {
        Self {
            api_client: reqwest::Client::new(),
            authorizer: RequestAuthorizer::new(sessions),
            server_address: server_address.into(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        self.authorizer.sessions()
    }

    pub fn session(&self) -> Option<Session> {
        self.sessions().load()
    }

    pub fn is_logged_in(&self) -> bool {
        self.sessions().is_authenticated()
    }

    /// Decides if the current user may open `resource`. Without a session
    /// nothing is allowed.
    #[tracing::instrument(ret)]
    pub fn authorize_navigation(&self, resource: Department) -> Decision {
        match self.session() {
            Some(session) if session.is_authenticated() => {
                authorize_navigation(&session.role, &resource)
            }
            _ => Decision::Deny,
        }
    }

    /// Logs in and stores the session the backend hands back
    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<LoginOutcome>> {
        let (tx, rx) = oneshot::channel();
        let args = serde_json::json!({
            "username": args.username,
            "password": args.password.expose_secret(),
        });
        let sessions = self.sessions().clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_login(resp, sessions).await;
            send_to_caller(tx, msg);
            ui_notify();
        };

        self.initiate_request(PATH_LOGIN, &args, on_done);
        rx
    }

    /// Asks the backend to start a password reset. Does not need a session.
    #[tracing::instrument(skip(ui_notify))]
    pub fn request_password_reset<F: UiCallBack>(
        &self,
        args: &PasswordResetReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_PASSWORD_RESET, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn health_check<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_empty(PATH_HEALTH_CHECK, &DUMMY_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(args, on_done))]
    // WARNING: Must skip args as it my contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn initiate_request<T, F, O>(&self, path_spec: PathSpec, args: &T, on_done: F)
    where
        T: serde::Serialize + Debug,
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let url = self.path_to_url(&path_spec);
        let request = self.api_client.request(path_spec.method.clone(), url);
        let request = if path_spec.sends_args_as_query() {
            request.query(&args)
        } else {
            request.json(&args)
        };
        reqwest_cross::fetch(self.authorizer.authorize(request), on_done)
    }

    fn send_request_expect_empty<F, T>(
        &self,
        path_spec: PathSpec,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        T: serde::Serialize + std::fmt::Debug,
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_empty(resp).await;
            send_to_caller(tx, msg);
            ui_notify();
        };
        self.initiate_request(path_spec, args, on_done);
        rx
    }

    fn send_request_no_wait<T>(&self, path_spec: PathSpec, args: &T)
    where
        T: serde::Serialize + std::fmt::Debug,
    {
        self.initiate_request(path_spec, args, |_| async {});
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path_spec: &PathSpec) -> String {
        path_spec.url(&self.server_address)
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }
}

/// The caller may have stopped waiting, that is not a problem for us
fn send_to_caller<T>(tx: oneshot::Sender<T>, msg: T) {
    if tx.send(msg).is_err() {
        info!("receiver dropped before the response arrived");
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_empty(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<()> {
    let (response, status) = extract_response(response)?;
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug), skip(sessions))]
async fn process_login(
    response: reqwest::Result<reqwest::Response>,
    sessions: SessionStore,
) -> anyhow::Result<LoginOutcome> {
    let (response, status) = extract_response(response)?;
    match status {
        StatusCode::OK => {
            let login_response: LoginResponse = response
                .json()
                .await
                .context("failed to parse result as json")?;
            if !login_response.session().is_authenticated() {
                warn!("backend reported a successful login without a token");
            }
            let (result, session) = match login_response {
                LoginResponse::Success(session) => (LoginOutcome::Success, session),
                LoginResponse::SuccessForcePassChange(session) => {
                    (LoginOutcome::ForcePasswordChange, session)
                }
            };
            sessions
                .save(&session)
                .context("failed to store the new session")?;
            Ok(result)
        }
        _ => Err(handle_error(response).await),
    }
}

#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let Ok(body) = response.text().await else {
        return anyhow!("failed to get response body");
    };
    if body.is_empty() {
        anyhow!("request failed with status code: {status} and no body")
    } else {
        anyhow!("{body}")
    }
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> anyhow::Result<(reqwest::Response, StatusCode)> {
    if response.is_err() {
        info!("Response is err: {:#?}", response);
    }
    let response = response.context("failed to send request")?;
    let status = response.status();
    Ok((response, status))
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
