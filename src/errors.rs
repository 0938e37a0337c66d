// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;
use thiserror::Error;

use crate::models::{ContributionGuard, GoalConfirmationRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not logged in; run `spendwise login` first")]
    NotLoggedIn,

    #[error("Session expired or invalid; please log in again")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Confirmation required: {}", .0.message)]
    ConfirmationRequired(GoalConfirmationRequest),

    #[error("Permission required: {}", .0.message)]
    PermissionRequired(ContributionGuard),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl ApiError {
    /// Maps a non-success response to an error, recognising the structured
    /// confirmation payloads the backend sends for soft guardrails.
    pub fn classify(status: u16, body: &str) -> ApiError {
        let json: Option<Value> = serde_json::from_str(body).ok();
        let message = json
            .as_ref()
            .map(extract_message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            400 => {
                if let Some(v) = json {
                    if flag(&v, "requires_confirmation") {
                        if let Ok(req) = serde_json::from_value::<GoalConfirmationRequest>(v.clone()) {
                            return ApiError::ConfirmationRequired(req);
                        }
                    }
                    if flag(&v, "requires_permission") {
                        if let Ok(guard) = serde_json::from_value::<ContributionGuard>(v) {
                            return ApiError::PermissionRequired(guard);
                        }
                    }
                }
                ApiError::Validation(message)
            }
            _ => ApiError::Status { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

fn flag(v: &Value, key: &str) -> bool {
    v.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// `error`, then `message`, then field errors joined as `field: error; ...`.
fn extract_message(v: &Value) -> String {
    for key in ["error", "message", "detail"] {
        if let Some(s) = v.get(key).and_then(Value::as_str) {
            return s.to_string();
        }
    }
    let Some(obj) = v.as_object() else {
        return String::new();
    };
    let mut parts = Vec::new();
    for (field, errs) in obj {
        match errs {
            Value::Array(list) => {
                for e in list {
                    if let Some(s) = e.as_str() {
                        parts.push(format!("{}: {}", field, s));
                    }
                }
            }
            Value::String(s) => parts.push(format!("{}: {}", field, s)),
            _ => {}
        }
    }
    parts.join("; ")
}
