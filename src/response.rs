//! Response bodies shared by handlers and the client SDK.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// `{message}` or, for creates, `{message, id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyBody {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBody {
    pub name: String,
    pub version: String,
}

pub fn created(message: &str, id: i64) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::CREATED,
        Json(MessageBody {
            message: message.to_string(),
            id: Some(id),
        }),
    )
}

pub fn message_ok(message: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.to_string(),
            id: None,
        }),
    )
}
