//! Answer model matching the backend AnswerResponse schema.

use serde::{Deserialize, Serialize};

use super::UserRecord;

/// A response posted to a question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub responder_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub responder: UserRecord,
}

/// Request body for creating a new answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerCreate {
    pub question_id: i64,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request body for updating an existing answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Query parameters for `GET /answers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,
}
