//! REST API client.
//!
//! One shared [`ApiClient`] attaches the current bearer credential to every
//! request; the per-resource services are thin typed pass-throughs on top.

mod answers;
mod questions;
mod topics;
mod uploads;
mod users;

pub use answers::*;
pub use questions::*;
pub use topics::*;
pub use uploads::*;
pub use users::*;

use reqwest::{header, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::auth::CredentialStore;
use crate::errors::{ClientError, ClientResult};

/// HTTP client for the Question Aura REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Create a client for `base_url` that reads tokens from `credentials`.
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credentials)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn questions(&self) -> QuestionService<'_> {
        QuestionService { client: self }
    }

    pub fn answers(&self) -> AnswerService<'_> {
        AnswerService { client: self }
    }

    pub fn topics(&self) -> TopicService<'_> {
        TopicService { client: self }
    }

    pub fn users(&self) -> UserService<'_> {
        UserService { client: self }
    }

    pub fn uploads(&self) -> UploadService<'_> {
        UploadService { client: self }
    }

    /// Start a request carrying the stored credential, if any.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method.clone(), self.url(path));
        tracing::debug!("{} {}", method, path);
        match self.credentials.current() {
            Some(credential) => builder.header(header::AUTHORIZATION, credential.header_value()),
            None => builder,
        }
    }

    /// Start a request carrying an explicit token instead of the stored one.
    pub(crate) fn request_with_token(
        &self,
        method: Method,
        path: &str,
        token: &str,
    ) -> RequestBuilder {
        tracing::debug!("{} {} (explicit token)", method, path);
        self.http
            .request(method, self.url(path))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- response helpers ----

    /// Send a request and decode its JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ClientResult<T> {
        let response = Self::ensure_success(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send a request and discard its body.
    pub(crate) async fn send_empty(builder: RequestBuilder) -> ClientResult<()> {
        Self::ensure_success(builder.send().await?).await?;
        Ok(())
    }

    /// Turn a non-2xx response into [`ClientError::Api`].
    async fn ensure_success(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::warn!("API request failed with {}: {}", status, body);
        Err(ClientError::from_response(status.as_u16(), body))
    }
}
