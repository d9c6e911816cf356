use std::time::Duration;

use serde::Deserialize;

use crate::{
    dto::image_to_text::ImageToTextRequest,
    error::{AppError, AppResult},
};

/// HTTP client for the external image-to-text recognition service.
///
/// The service accepts `{link, images}` and answers `{texts: [...]}`.
#[derive(Clone, Debug)]
pub struct ImageToTextClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    texts: Option<Vec<String>>,
}

impl ImageToTextClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single attempt, no retry.
    pub async fn process(&self, request: &ImageToTextRequest) -> AppResult<Vec<String>> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("unexpected status {status}")));
        }

        // A literal `null` body deserializes to None.
        let body: Option<ProcessResponse> = response.json().await?;
        body.and_then(|b| b.texts)
            .ok_or_else(|| AppError::Upstream("response is missing texts".to_string()))
    }
}
