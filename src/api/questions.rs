//! Question endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::errors::ClientResult;
use crate::models::{Page, Question, QuestionCreate, QuestionQuery, QuestionUpdate};

pub struct QuestionService<'a> {
    pub(super) client: &'a ApiClient,
}

impl QuestionService<'_> {
    /// GET /questions - One page of questions, optionally filtered.
    pub async fn list(&self, query: &QuestionQuery) -> ClientResult<Page<Question>> {
        let request = self.client.request(Method::GET, "/questions").query(query);
        ApiClient::send_json(request).await
    }

    /// GET /questions/:id
    pub async fn get(&self, id: i64) -> ClientResult<Question> {
        let request = self
            .client
            .request(Method::GET, &format!("/questions/{}", id));
        ApiClient::send_json(request).await
    }

    /// POST /questions - The asker is taken from the bearer token.
    pub async fn create(&self, data: &QuestionCreate) -> ClientResult<Question> {
        let request = self.client.request(Method::POST, "/questions").json(data);
        ApiClient::send_json(request).await
    }

    /// PUT /questions/:id - Only the asker may update.
    pub async fn update(&self, id: i64, data: &QuestionUpdate) -> ClientResult<Question> {
        let request = self
            .client
            .request(Method::PUT, &format!("/questions/{}", id))
            .json(data);
        ApiClient::send_json(request).await
    }

    /// DELETE /questions/:id - Only the asker may delete.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/questions/{}", id));
        ApiClient::send_empty(request).await
    }
}
