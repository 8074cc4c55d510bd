use crate::env_variable_utils::api_url;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

/// Failures between issuing a request and holding a well-typed response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client-side rejections; these never reach the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("File size must be less than 10MB")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Please drop a single screenshot")]
    MultipleFiles,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Structural checks applied to every decoded response body.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| item.validate().map_err(|e| format!("item {index}: {e}")))
    }
}

pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_url(), path)
}

/// Decodes and validates a response body, failing closed on anything unexpected.
pub fn decode<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    value.validate().map_err(ApiError::Malformed)?;
    Ok(value)
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    if response.ok() {
        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

async fn read_json<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let body = read_body(response).await?;
    decode(&body)
}

pub async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let response = Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned + Validate,
{
    let response = Request::post(&endpoint(path))
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned + Validate,
{
    let response = Request::put(&endpoint(path))
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

// The browser sets the multipart boundary, so no Content-Type header here.
pub async fn post_form<T>(path: &str, form: FormData) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let response = Request::post(&endpoint(path))
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&endpoint(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Level {
        value: i32,
    }

    impl Validate for Level {
        fn validate(&self) -> Result<(), String> {
            if (0..=15).contains(&self.value) {
                Ok(())
            } else {
                Err(format!("value {} out of range", self.value))
            }
        }
    }

    #[test]
    fn decode_accepts_well_formed_body() {
        let levels: Vec<Level> = decode(r#"[{"value": 3}, {"value": 15}]"#).unwrap();
        assert_eq!(levels, vec![Level { value: 3 }, Level { value: 15 }]);
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let result: Result<Level, _> = decode("<html>502</html>");
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let result: Result<Level, _> = decode(r#"{"value": "three"}"#);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn decode_rejects_failed_validation_with_item_index() {
        let result: Result<Vec<Level>, _> = decode(r#"[{"value": 1}, {"value": 99}]"#);
        match result {
            Err(ApiError::Malformed(message)) => assert!(message.starts_with("item 1:")),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn status_is_exposed_only_for_http_errors() {
        let http = ApiError::Status {
            status: 400,
            body: String::new(),
        };
        assert_eq!(http.status(), Some(400));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
