//! Wire DTOs for the backend endpoints (`/ask`, `/upload-docs`, `/health`).

use serde::{Deserialize, Serialize};

/// Answer the UI shows when the backend replies without an answer field.
pub const FALLBACK_ANSWER: &str = "No answer returned from server.";

/// Request body for `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
    pub mode: String,
}

impl AskRequest {
    /// The frontend always submits in `answer` mode; the backend routes the
    /// question itself.
    pub fn answer(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            mode: "answer".to_string(),
        }
    }
}

/// Response body of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

impl AskResponse {
    /// Answer text with the fallback substituted for a missing/empty field.
    pub fn answer_text(&self) -> String {
        if self.answer.is_empty() {
            FALLBACK_ANSWER.to_string()
        } else {
            self.answer.clone()
        }
    }
}

/// Response body of `POST /upload-docs`. `files` lists the saved filenames.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Reachability of the backend as shown in the header indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Unknown,
    Ok,
    Error,
}

impl BackendStatus {
    /// Map a health payload: `ok` iff the reported status is exactly "ok".
    pub fn from_health(response: &HealthResponse) -> Self {
        if response.status == "ok" {
            BackendStatus::Ok
        } else {
            BackendStatus::Error
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            BackendStatus::Ok => "Connected to backend",
            BackendStatus::Error => "Backend not reachable",
            BackendStatus::Unknown => "Checking backend…",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Ok => "status-dot status-ok",
            BackendStatus::Error => "status-dot status-error",
            BackendStatus::Unknown => "status-dot status-unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_fixed_mode() {
        let req = AskRequest::answer("What is BFS?");
        assert_eq!(req.query, "What is BFS?");
        assert_eq!(req.mode, "answer");
    }

    #[test]
    fn test_ask_response_defaults_when_fields_absent() {
        let resp: AskResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer.is_empty());
        assert!(resp.citations.is_empty());
        assert_eq!(resp.answer_text(), FALLBACK_ANSWER);
    }

    #[test]
    fn test_ask_response_full_payload() {
        let resp: AskResponse = serde_json::from_str(
            r#"{"mode":"answer","answer":"Breadth-first search...","citations":["slide12.pdf"]}"#,
        )
        .unwrap();
        assert_eq!(resp.answer_text(), "Breadth-first search...");
        assert_eq!(resp.citations, vec!["slide12.pdf"]);
    }

    #[test]
    fn test_upload_response_files_default() {
        let resp: UploadResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(resp.status, "ok");
        assert!(resp.files.is_empty());
    }

    #[test]
    fn test_backend_status_from_health() {
        let ok = HealthResponse {
            status: "ok".to_string(),
        };
        let degraded = HealthResponse {
            status: "starting".to_string(),
        };
        assert_eq!(BackendStatus::from_health(&ok), BackendStatus::Ok);
        assert_eq!(BackendStatus::from_health(&degraded), BackendStatus::Error);
    }
}
