/// Request/response envelope exchanged between the popup and the background worker
use serde::{Deserialize, Serialize};

use crate::bookmark::Diff;
use crate::error::{ReplaceError, Result};
use crate::matcher::MatchMode;

/// Arguments of one replace run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReplaceRequest {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub mode: MatchMode,
}

impl ReplaceRequest {
    pub fn new(from: &str, to: &str, mode: MatchMode) -> ReplaceRequest {
        ReplaceRequest {
            from: from.to_string(),
            to: to.to_string(),
            mode,
        }
    }
}

/// Runtime messages understood by the background worker, keyed by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    #[serde(rename = "performReplace")]
    PerformReplace(ReplaceRequest),
}

impl Message {
    pub fn from_json(json: &str) -> Result<Message> {
        serde_json::from_str(json).map_err(|e| ReplaceError::Request(e.to_string()))
    }
}

/// `{ok: true, result}` on success, `{ok: false, error}` on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Diff>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReplaceResponse {
    pub fn success(diffs: Vec<Diff>) -> ReplaceResponse {
        ReplaceResponse {
            ok: true,
            result: Some(diffs),
            error: None,
        }
    }

    pub fn failure(error: &ReplaceError) -> ReplaceResponse {
        ReplaceResponse {
            ok: false,
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn into_result(self) -> std::result::Result<Vec<Diff>, String> {
        if self.ok {
            Ok(self.result.unwrap_or_default())
        } else {
            Err(self.error.unwrap_or_else(|| "unknown".to_string()))
        }
    }
}

impl From<Result<Vec<Diff>>> for ReplaceResponse {
    fn from(outcome: Result<Vec<Diff>>) -> Self {
        match outcome {
            Ok(diffs) => ReplaceResponse::success(diffs),
            Err(e) => ReplaceResponse::failure(&e),
        }
    }
}
