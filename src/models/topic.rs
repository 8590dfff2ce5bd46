//! Topic model matching the backend TopicResponse schema.

use serde::{Deserialize, Serialize};

/// A named category under which questions are grouped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request body for creating a new topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCreate {
    pub name: String,
}

/// Request body for updating an existing topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
