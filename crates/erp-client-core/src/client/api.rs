use erp_shared::{
    const_config::path::{PATH_API_CHANGE_PASSWORD, PATH_API_LOGOUT},
    errors::NotLoggedInError,
    log_err_as_warn,
    req_args::ChangePasswordReqArgs,
};
use futures::channel::oneshot;
use secrecy::ExposeSecret as _;

use crate::{
    client::{send_to_caller, UiCallBack},
    Client,
};

impl Client {
    /// Fails straight away without contacting the backend if nobody is
    /// logged in
    #[tracing::instrument(skip(args, ui_notify))]
    pub fn change_password<F>(
        &self,
        args: &ChangePasswordReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        if !self.is_logged_in() {
            let (tx, rx) = oneshot::channel();
            send_to_caller(tx, Err(NotLoggedInError.into()));
            ui_notify();
            return rx;
        }
        let args = serde_json::json!({
            "current_password": args.current_password.expose_secret(),
            "new_password": args.new_password.expose_secret(),
            "new_password_check": args.new_password_check.expose_secret()
        });
        self.send_request_expect_empty(PATH_API_CHANGE_PASSWORD, &args, ui_notify)
    }

    /// The request is built with the credential before the session is cleared,
    /// the local session is gone even if the backend call fails
    #[tracing::instrument(skip(ui_notify))]
    pub fn logout<F: UiCallBack>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>> {
        let rx = self.send_request_expect_empty(PATH_API_LOGOUT, &"", ui_notify);
        self.clear_session();
        rx
    }

    #[tracing::instrument]
    pub fn logout_no_wait(&self) {
        self.send_request_no_wait(PATH_API_LOGOUT, &"");
        self.clear_session();
    }

    fn clear_session(&self) {
        log_err_as_warn!(self.sessions().clear());
    }
}
