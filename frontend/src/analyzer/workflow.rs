use crate::analyzer::models::AnalysisResult;
use crate::api_client::{ApiError, ValidationError};
use crate::request_sequence::{RequestSequence, RequestTicket};

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const UPLOAD_FIELD_NAME: &str = "file";
pub const UPLOAD_ERROR_MESSAGE: &str = "Failed to analyze screenshot. Please try again.";
pub const ACCEPT_ATTRIBUTE: &str = "image/png,image/jpeg,image/webp,.png,.jpg,.jpeg,.webp";
const ACCEPTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// What the workflow needs to know about a picked or dropped file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            mime_type: file.type_(),
        }
    }

    /// Drop-target filter: an image MIME type or a known image extension.
    pub fn is_accepted_image(&self) -> bool {
        if self.mime_type.starts_with("image/") {
            return true;
        }
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

pub fn validate_file(file: &FileMeta) -> Result<(), ValidationError> {
    if file.size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge {
            size: file.size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Validating,
    Uploading,
    Succeeded(AnalysisResult),
    Failed(String),
}

/// Lifecycle of the current screenshot submission. A new submission always
/// supersedes the previous one, including one still uploading.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnalysisWorkflow {
    status: AnalysisStatus,
    file: Option<FileMeta>,
    requests: RequestSequence,
}

impl AnalysisWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ticket of the upload to issue, or `None` when the file was
    /// rejected before reaching the network.
    pub fn submit(&mut self, file: FileMeta) -> Option<RequestTicket> {
        let ticket = self.requests.begin();
        self.status = AnalysisStatus::Validating;

        let validation = validate_file(&file);
        self.file = Some(file);

        match validation {
            Ok(()) => {
                self.status = AnalysisStatus::Uploading;
                Some(ticket)
            }
            Err(e) => {
                log::warn!("Rejected screenshot: {:?}", e);
                self.status = AnalysisStatus::Failed(e.to_string());
                None
            }
        }
    }

    /// Rejects a drop that could not become a single submission.
    pub fn reject(&mut self, error: ValidationError) {
        self.requests.begin();
        self.file = None;
        log::warn!("Rejected screenshot drop: {:?}", error);
        self.status = AnalysisStatus::Failed(error.to_string());
    }

    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult, ApiError>,
    ) -> bool {
        if !self.requests.accept(ticket, "screenshot analysis") {
            return false;
        }

        self.status = match outcome {
            Ok(result) => AnalysisStatus::Succeeded(result),
            Err(e) => {
                log::error!("Screenshot analysis failed: {}", e);
                AnalysisStatus::Failed(UPLOAD_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn status(&self) -> &AnalysisStatus {
        &self.status
    }

    pub fn file(&self) -> Option<&FileMeta> {
        self.file.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.status,
            AnalysisStatus::Validating | AnalysisStatus::Uploading
        )
    }
}
