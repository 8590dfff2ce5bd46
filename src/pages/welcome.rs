//! Sign-in page: demo login, provider login, and the sign-up username step.

use super::forms::validate_username;
use super::routes::Route;
use crate::api::ApiClient;
use crate::auth::{AuthState, DemoSession, ProviderSession};
use crate::errors::ClientError;
use crate::models::UserCreate;

pub const DEMO_LOGIN_FAILED: &str = "Demo login failed. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const ACCOUNT_EXISTS: &str = "Username or email already exists";
pub const SYNC_FAILED: &str = "Failed to sync account. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct WelcomePage {
    pub error: Option<String>,
    pub is_busy: bool,
    /// Provider session waiting for a username before the account is synced.
    pub pending_signup: Option<ProviderSession>,
    pub username: String,
}

impl WelcomePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in with the shared demo account. Returns the route to show next.
    pub async fn demo_login(&mut self, api: &ApiClient, auth: &mut AuthState) -> Option<Route> {
        self.is_busy = true;
        self.error = None;

        let result = match api.users().demo_login().await {
            Ok(reply) => {
                let session = DemoSession {
                    token: reply.access_token,
                    user: reply.user,
                };
                auth.start_demo(session).await
            }
            Err(e) => Err(e),
        };
        self.is_busy = false;

        match result {
            Ok(()) => Some(Route::home()),
            Err(e) => {
                tracing::error!("Demo login failed: {}", e);
                self.error = Some(DEMO_LOGIN_FAILED.to_string());
                None
            }
        }
    }

    /// Finish a provider login. Claims without an email are refused. A sign-up
    /// first asks for a username, so it returns `None` and keeps the session
    /// pending.
    pub fn complete_provider_login(
        &mut self,
        auth: &mut AuthState,
        session: ProviderSession,
        is_signup: bool,
    ) -> Option<Route> {
        self.error = None;

        if session.claims.email.as_deref().unwrap_or_default().is_empty() {
            tracing::warn!("Provider login for {} has no email claim", session.claims.sub);
            self.error = Some(LOGIN_FAILED.to_string());
            return None;
        }

        if !is_signup {
            auth.start_provider(session);
            return Some(Route::home());
        }

        self.username.clear();
        self.pending_signup = Some(session);
        None
    }

    /// Validate the chosen username, sync the account, then start the
    /// provider session.
    pub async fn submit_username(
        &mut self,
        api: &ApiClient,
        auth: &mut AuthState,
    ) -> Option<Route> {
        let username = match validate_username(&self.username) {
            Ok(username) => username,
            Err(message) => {
                self.error = Some(message.to_string());
                return None;
            }
        };
        let Some(session) = self.pending_signup.clone() else {
            self.error = Some(LOGIN_FAILED.to_string());
            return None;
        };

        let claims = &session.claims;
        let data = UserCreate {
            auth0_id: claims.sub.clone(),
            email: claims.email.clone().unwrap_or_default(),
            first_name: claims.given_name.clone(),
            last_name: claims.family_name.clone(),
            username: Some(username),
        };

        self.is_busy = true;
        self.error = None;
        let result = api.users().sync(&session.access_token, &data).await;
        self.is_busy = false;

        match result {
            Ok(user) => {
                tracing::info!("Synced account {} for {}", user.id, claims.sub);
                self.pending_signup = None;
                auth.start_provider(session);
                Some(Route::home())
            }
            Err(e) => {
                tracing::error!("Account sync failed: {}", e);
                self.error = Some(sync_error_message(&e));
                None
            }
        }
    }

    pub fn cancel_signup(&mut self) {
        self.pending_signup = None;
        self.username.clear();
        self.error = None;
    }
}

fn sync_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Api {
            status: 409,
            detail,
            ..
        } => detail.clone().unwrap_or_else(|| ACCOUNT_EXISTS.to_string()),
        _ => SYNC_FAILED.to_string(),
    }
}
