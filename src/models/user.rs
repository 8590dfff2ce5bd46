//! User models matching the backend UserResponse schema and the demo login reply.

use serde::{Deserialize, Serialize};

/// A user record as stored by the backend.
///
/// Older records and the demo login reply omit some fields, so everything
/// but `id` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth0_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request body for `POST /users/sync`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub auth0_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Reply of `POST /auth/demo-login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoLoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserRecord,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}
