//! Answer endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::errors::ClientResult;
use crate::models::{Answer, AnswerCreate, AnswerQuery, AnswerUpdate};

pub struct AnswerService<'a> {
    pub(super) client: &'a ApiClient,
}

impl AnswerService<'_> {
    /// GET /answers - All answers, optionally for one question.
    pub async fn list(&self, query: &AnswerQuery) -> ClientResult<Vec<Answer>> {
        let request = self.client.request(Method::GET, "/answers").query(query);
        ApiClient::send_json(request).await
    }

    /// Answers to a single question.
    pub async fn for_question(&self, question_id: i64) -> ClientResult<Vec<Answer>> {
        self.list(&AnswerQuery {
            question_id: Some(question_id),
        })
        .await
    }

    /// GET /answers/:id
    pub async fn get(&self, id: i64) -> ClientResult<Answer> {
        let request = self.client.request(Method::GET, &format!("/answers/{}", id));
        ApiClient::send_json(request).await
    }

    /// POST /answers - The responder is taken from the bearer token.
    pub async fn create(&self, data: &AnswerCreate) -> ClientResult<Answer> {
        let request = self.client.request(Method::POST, "/answers").json(data);
        ApiClient::send_json(request).await
    }

    /// PUT /answers/:id - Only the responder may update.
    pub async fn update(&self, id: i64, data: &AnswerUpdate) -> ClientResult<Answer> {
        let request = self
            .client
            .request(Method::PUT, &format!("/answers/{}", id))
            .json(data);
        ApiClient::send_json(request).await
    }

    /// DELETE /answers/:id - Only the responder may delete.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/answers/{}", id));
        ApiClient::send_empty(request).await
    }
}
