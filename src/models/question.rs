//! Question model matching the backend QuestionResponse schema.

use serde::{Deserialize, Serialize};

use super::{Topic, UserRecord};

/// A question asked under a topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub ask: String,
    pub topic_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub asker_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub topic: Topic,
    pub asker: UserRecord,
}

/// Request body for creating a new question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionCreate {
    pub topic_id: i64,
    pub ask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request body for updating an existing question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Query parameters for `GET /questions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asker_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl QuestionQuery {
    /// One page of questions under a topic.
    pub fn for_topic(topic_id: i64, page: u32, page_size: u32) -> Self {
        Self {
            topic_id: Some(topic_id),
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    /// One page of the unfiltered feed.
    pub fn feed(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    /// Free-text search.
    pub fn search(query: &str, page: u32, page_size: u32) -> Self {
        Self {
            search: Some(query.to_string()),
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_omits_absent_image() {
        let body = QuestionCreate {
            topic_id: 1,
            ask: "Why?".into(),
            image_url: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"topic_id": 1, "ask": "Why?"}));

        let with_image = QuestionCreate {
            image_url: Some("https://cdn.example.com/a.png".into()),
            ..body
        };
        let json = serde_json::to_value(&with_image).unwrap();
        assert_eq!(json["image_url"], "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_query_omits_unset_filters() {
        let query = serde_json::to_value(QuestionQuery::feed(2, 10)).unwrap();
        assert_eq!(query, serde_json::json!({"page": 2, "page_size": 10}));
    }
}
