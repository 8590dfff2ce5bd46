//! User and demo-login endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::errors::ClientResult;
use crate::models::{DemoLoginResponse, UserCreate, UserRecord};

pub struct UserService<'a> {
    pub(super) client: &'a ApiClient,
}

impl UserService<'_> {
    /// POST /auth/demo-login - Token and user record for the demo account.
    pub async fn demo_login(&self) -> ClientResult<DemoLoginResponse> {
        ApiClient::send_json(self.client.request(Method::POST, "/auth/demo-login")).await
    }

    /// POST /users/sync - Create or refresh the backend record for a provider user.
    pub async fn sync(&self, token: &str, data: &UserCreate) -> ClientResult<UserRecord> {
        let request = self
            .client
            .request_with_token(Method::POST, "/users/sync", token)
            .json(data);
        ApiClient::send_json(request).await
    }

    /// GET /users/me - Backend record of the token's owner.
    pub async fn profile(&self, token: &str) -> ClientResult<UserRecord> {
        let request = self
            .client
            .request_with_token(Method::GET, "/users/me", token);
        ApiClient::send_json(request).await
    }
}
