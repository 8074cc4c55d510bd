use crate::api_client::{get_json, ApiError};
use crate::videos::models::{VideoBatch, VideoRecord};

pub async fn list_videos(skip: u32, limit: u32) -> Result<Vec<VideoRecord>, ApiError> {
    let path = format!("/api/videos?skip={}&limit={}", skip, limit);
    get_json::<VideoBatch>(&path).await.map(|batch| batch.0)
}
