use serde::{Deserialize, Serialize};

/// Body of both stream-monitor POSTs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorUserRequest {
    #[serde(deserialize_with = "super::null_as_default")]
    pub x_user_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamStatus {
    Success,
    Error,
}

/// `{ status, msg }` reply of the stream-monitor endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamResponse {
    pub status: StreamStatus,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub msg: String,
}

impl StreamResponse {
    pub fn is_success(&self) -> bool {
        self.status == StreamStatus::Success
    }
}
