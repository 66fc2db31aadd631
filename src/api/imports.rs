//! Brokerage report upload
//!
//! The client only ships the file; parsing and deduplication happen in the
//! backend's import pipeline.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tracing::info;

use super::models::ImportReport;
use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn import_report(&self, broker: &str, path: &Path) -> Result<ImportReport, ApiError> {
        info!("Uploading {} report: {}", broker, path.display());

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("report")
            .to_string();

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        self.post_multipart(&format!("/import/{}", broker), form)
            .await
    }
}
