use crate::analyzer::models::AnalysisResult;
use crate::analyzer::workflow::UPLOAD_FIELD_NAME;
use crate::api_client::{get_json, post_form, ApiError};
use web_sys::{File, FormData};

pub async fn upload_screenshot(file: &File) -> Result<AnalysisResult, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    post_form("/api/analysis/upload", form).await
}

pub async fn analysis_history(skip: u32, limit: u32) -> Result<Vec<AnalysisResult>, ApiError> {
    get_json(&format!("/api/analysis/history?skip={}&limit={}", skip, limit)).await
}
