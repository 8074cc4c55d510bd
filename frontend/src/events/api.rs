use crate::api_client::{get_json, ApiError};
use crate::events::models::Event;

pub async fn list_events(skip: u32, limit: u32) -> Result<Vec<Event>, ApiError> {
    get_json(&format!("/api/events?skip={}&limit={}", skip, limit)).await
}
