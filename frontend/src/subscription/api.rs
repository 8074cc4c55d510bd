use crate::api_client::{delete, post_json, put_json, ApiError};
use crate::subscription::form::SubscriptionRequest;
use crate::subscription::models::{NewSubscription, Subscription, SubscriptionUpdate};

pub async fn create_subscription(email: &str) -> Result<Subscription, ApiError> {
    let body = NewSubscription {
        email: email.to_string(),
    };
    post_json("/api/subscriptions/", &body).await
}

pub async fn update_subscription(
    current: &str,
    email: &str,
    is_active: bool,
) -> Result<Subscription, ApiError> {
    let body = SubscriptionUpdate {
        email: email.to_string(),
        is_active,
    };
    put_json(&format!("/api/subscriptions/{}", urlencoding::encode(current)), &body).await
}

pub async fn delete_subscription(email: &str) -> Result<(), ApiError> {
    delete(&format!("/api/subscriptions/{}", urlencoding::encode(email))).await
}

/// Issues the request a form transition asked for.
pub async fn send(request: &SubscriptionRequest) -> Result<(), ApiError> {
    match request {
        SubscriptionRequest::Create { email } => create_subscription(email).await.map(|_| ()),
        SubscriptionRequest::Update { current, email } => {
            update_subscription(current, email, true).await.map(|_| ())
        }
        SubscriptionRequest::Delete { email } => delete_subscription(email).await,
    }
}
