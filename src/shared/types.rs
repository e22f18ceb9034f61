use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl ApiResponse {
    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message,
            errors,
        }
    }
}
