use crate::api_client::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Subscription {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl Validate for Subscription {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NewSubscription {
    pub email: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SubscriptionUpdate {
    pub email: String,
    pub is_active: bool,
}
