//! HTTP client for the remote analysis service

use crate::api::response::OptimizeResponse;
use crate::error::{Result, ResumeOptimizerError};
use crate::input::manager::ResumeUpload;
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Base URL of the hosted analysis service. Fixed at compile time; there is
/// no runtime configuration surface for it.
pub const API_BASE_URL: &str = "https://jaykay73-resume-optimizer-api.hf.space";

const OPTIMIZE_ENDPOINT: &str = "/optimize";

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Self::with_base_url(API_BASE_URL.to_string(), timeout_secs)
    }

    pub fn with_base_url(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ResumeOptimizerError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Send the resume and job description for analysis.
    ///
    /// One multipart POST with fields `resume_file` (binary) and `jd_text`
    /// (UTF-8 text). Any non-2xx status or unparseable body is an error.
    pub async fn optimize(&self, resume: &ResumeUpload, jd_text: &str) -> Result<OptimizeResponse> {
        let url = format!("{}{}", self.base_url, OPTIMIZE_ENDPOINT);

        let resume_part = Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(resume.mime_type)
            .map_err(|e| ResumeOptimizerError::Network(format!("Failed to create multipart: {}", e)))?;

        let form = Form::new()
            .part("resume_file", resume_part)
            .text("jd_text", jd_text.to_string());

        info!("Calling analysis service: {}", url);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let response_text = response.text().await?;
            debug!("Raw analysis service response: {}", response_text);

            serde_json::from_str(&response_text).map_err(|e| {
                error!("Failed to parse analysis response: {}", e);
                ResumeOptimizerError::Api(format!("Unexpected response shape: {}", e))
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Analysis service error response: {}", error_text);
            Err(ResumeOptimizerError::Api(format!(
                "Service returned error status {}: {}",
                status, error_text
            )))
        }
    }
}
