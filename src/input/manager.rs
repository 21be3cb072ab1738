//! Input manager for loading the resume upload and job description text

use crate::error::{Result, ResumeOptimizerError};
use crate::input::file_detector::FileType;
use log::info;
use std::path::Path;
use tokio::fs;

/// A resume file loaded as an opaque binary blob. The analysis service does
/// all parsing; this side never inspects the bytes.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Load a resume file for upload, validating existence and extension only.
    pub async fn load_resume(&self, path: &Path) -> Result<ResumeUpload> {
        if !path.exists() {
            return Err(ResumeOptimizerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let mime_type = file_type.mime_type().ok_or_else(|| {
            ResumeOptimizerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))
        })?;

        info!("Loading resume file: {}", path.display());
        let bytes = fs::read(path).await?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume".to_string());

        Ok(ResumeUpload {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Load the job description text from a file.
    pub async fn load_job_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeOptimizerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading job description: {}", path.display());
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ResumeOptimizerError::InvalidInput(format!(
                "File has no extension: {}",
                path.display()
            ))
        })?;

        Ok(FileType::from_extension(extension))
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
