use contracts::system::auth::{LoginRequest, RegisterRequest, SessionUser};

use super::api::AuthGateway;
use super::form::{AuthMode, FormState, Submission};
use crate::routes::routes::AppRoute;

pub const INACTIVE_NOTICE: &str = "User is inactive. Cannot log in.";
pub const LOGIN_FAILED_NOTICE: &str = "Error occurred. Please try again.";
pub const EMAIL_IN_USE_NOTICE: &str = "Email is already in use";

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Navigate(SessionUser, AppRoute),
    Inactive(SessionUser),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    EmailInUse,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Login(LoginOutcome),
    Register(RegisterOutcome),
}

impl SubmitOutcome {
    /// User returned by a successful login, to store in the session.
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SubmitOutcome::Login(LoginOutcome::Navigate(user, _))
            | SubmitOutcome::Login(LoginOutcome::Inactive(user)) => Some(user),
            _ => None,
        }
    }

    pub fn route(&self) -> Option<AppRoute> {
        match self {
            SubmitOutcome::Login(LoginOutcome::Navigate(_, route)) => Some(*route),
            _ => None,
        }
    }

    /// Blocking notice to show, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Login(LoginOutcome::Inactive(_)) => Some(INACTIVE_NOTICE),
            SubmitOutcome::Login(LoginOutcome::Failed) => Some(LOGIN_FAILED_NOTICE),
            SubmitOutcome::Register(RegisterOutcome::EmailInUse) => Some(EMAIL_IN_USE_NOTICE),
            _ => None,
        }
    }
}

impl FormState {
    /// Update the form after a settled submission: successful calls clear
    /// the draft, a registration always lands in login mode.
    pub fn apply_outcome(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Login(LoginOutcome::Navigate(..))
            | SubmitOutcome::Login(LoginOutcome::Inactive(_)) => self.reset(),
            SubmitOutcome::Register(RegisterOutcome::Registered) => {
                *self = Self::new(AuthMode::Login)
            }
            _ => {}
        }
    }
}

/// Where a freshly logged-in user goes. `None` means the account is inactive.
pub fn landing_route(user: &SessionUser) -> Option<AppRoute> {
    if user.is_admin() {
        Some(AppRoute::AdminUsers)
    } else if user.is_active() {
        Some(AppRoute::Home)
    } else {
        None
    }
}

pub async fn submit<G>(gateway: &G, submission: Submission) -> SubmitOutcome
where
    G: AuthGateway + ?Sized,
{
    match submission {
        Submission::Login(request) => SubmitOutcome::Login(submit_login(gateway, &request).await),
        Submission::Register(request) => {
            SubmitOutcome::Register(submit_register(gateway, &request).await)
        }
    }
}

pub async fn submit_login<G>(gateway: &G, request: &LoginRequest) -> LoginOutcome
where
    G: AuthGateway + ?Sized,
{
    match gateway.login(request).await {
        Ok(response) => match landing_route(&response.user) {
            Some(route) => LoginOutcome::Navigate(response.user, route),
            None => LoginOutcome::Inactive(response.user),
        },
        Err(e) => {
            match e.status() {
                Some(status) => {
                    log::error!("Response Status: {}", status);
                    log::error!("Response Error: {}", e);
                }
                None => log::error!("Error Message: {}", e),
            }
            LoginOutcome::Failed
        }
    }
}

pub async fn submit_register<G>(gateway: &G, request: &RegisterRequest) -> RegisterOutcome
where
    G: AuthGateway + ?Sized,
{
    match gateway.register(request).await {
        Ok(()) => RegisterOutcome::Registered,
        Err(e) if matches!(e.status(), Some(401) | Some(404)) => {
            log::error!(
                "Resource not found for the specified role: {}",
                gateway.register_url()
            );
            RegisterOutcome::EmailInUse
        }
        Err(e) => {
            log::error!("An error occurred: {}", e);
            RegisterOutcome::Failed
        }
    }
}
