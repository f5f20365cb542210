use reqwest::multipart;
use serde::Serialize;

use crate::error::AnalysisError;
use crate::input::UploadFile;
use crate::report::{AnalysisResult, HistoryEntry};

/// Where the service listens by default: FastAPI's default port, with the
/// prediction router mounted under `/api`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// HTTP client for the classification service.
///
/// One method per logical operation the workflow depends on. Timeout and
/// retry policy belong to the transport; nothing here retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /predict` with a JSON `{ "text": ... }` body.
    pub async fn predict_text(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&PredictRequest { text })
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// `POST /predict-file` as multipart form data, one part named `file`
    /// with the original filename preserved.
    pub async fn predict_file(&self, file: &UploadFile) -> Result<AnalysisResult, AnalysisError> {
        let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(format!("{}/predict-file", self.base_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// `GET /history`. The service represents "no data yet" as an empty
    /// array, never as an error.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, AnalysisError> {
        let response = self
            .client
            .get(format!("{}/history", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(ApiClient::default().base_url(), DEFAULT_BASE_URL);
    }
}
