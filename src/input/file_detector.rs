//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    /// MIME type used for the multipart upload part
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            FileType::Pdf => Some("application/pdf"),
            FileType::Docx => {
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            }
            FileType::Text => Some("text/plain"),
            FileType::Unknown => None,
        }
    }
}
