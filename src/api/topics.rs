//! Topic endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::errors::ClientResult;
use crate::models::{Topic, TopicCreate, TopicUpdate};

pub struct TopicService<'a> {
    pub(super) client: &'a ApiClient,
}

impl TopicService<'_> {
    /// GET /topics - List all topics.
    pub async fn list(&self) -> ClientResult<Vec<Topic>> {
        ApiClient::send_json(self.client.request(Method::GET, "/topics")).await
    }

    /// GET /topics/:id
    pub async fn get(&self, id: i64) -> ClientResult<Topic> {
        let request = self.client.request(Method::GET, &format!("/topics/{}", id));
        ApiClient::send_json(request).await
    }

    /// POST /topics
    pub async fn create(&self, data: &TopicCreate) -> ClientResult<Topic> {
        let request = self.client.request(Method::POST, "/topics").json(data);
        ApiClient::send_json(request).await
    }

    /// PUT /topics/:id
    pub async fn update(&self, id: i64, data: &TopicUpdate) -> ClientResult<Topic> {
        let request = self
            .client
            .request(Method::PUT, &format!("/topics/{}", id))
            .json(data);
        ApiClient::send_json(request).await
    }

    /// DELETE /topics/:id
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/topics/{}", id));
        ApiClient::send_empty(request).await
    }
}
