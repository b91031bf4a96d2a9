//! Backend gateway client: the two copilot endpoints plus the health probe.
//!
//! No retries and no timeout beyond what the browser fetch gives us; every
//! call is a single shot whose failure is reported to the caller.

use contracts::api::{AskRequest, AskResponse, BackendStatus, HealthResponse, UploadResponse};
use gloo_net::http::Request;

use super::error::{AskError, UploadError};
use crate::shared::api_utils::api_url;

/// Submit a question to `POST /ask`.
pub async fn ask(query: &str) -> Result<AskResponse, AskError> {
    let body = AskRequest::answer(query);

    let response = Request::post(&api_url("/ask"))
        .json(&body)
        .map_err(|e| AskError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AskError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AskError::Http { status, body });
    }

    let data: AskResponse = response
        .json()
        .await
        .map_err(|e| AskError::Network(e.to_string()))?;

    Ok(data)
}

/// Upload course documents to `POST /upload-docs` as multipart form data.
///
/// An empty selection never touches the network and reports no files.
pub async fn upload_documents(files: Vec<web_sys::File>) -> Result<UploadResponse, UploadError> {
    if files.is_empty() {
        return Ok(UploadResponse::default());
    }

    let form_data =
        web_sys::FormData::new().map_err(|e| UploadError::Network(format!("{e:?}")))?;
    for file in &files {
        // The File carries its own filename into the part.
        form_data
            .append_with_blob("files", file)
            .map_err(|e| UploadError::Network(format!("{e:?}")))?;
    }

    let response = Request::post(&api_url("/upload-docs"))
        .body(form_data)
        .map_err(|e| UploadError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Http { status, body });
    }

    let data: UploadResponse = response
        .json()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    Ok(data)
}

/// Best-effort probe of `GET /health`. Any failure degrades to `Error`.
pub async fn check_health() -> BackendStatus {
    let response = match Request::get(&api_url("/health")).send().await {
        Ok(r) => r,
        Err(e) => {
            log::error!("Health check failed: {e}");
            return BackendStatus::Error;
        }
    };

    if !response.ok() {
        return BackendStatus::Error;
    }

    match response.json::<HealthResponse>().await {
        Ok(data) => BackendStatus::from_health(&data),
        Err(_) => BackendStatus::Error,
    }
}
