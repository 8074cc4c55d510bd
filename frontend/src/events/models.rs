use crate::api_client::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub summary: Option<String>,
    pub published_date: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub created_at: String,
}

impl Validate for Event {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
