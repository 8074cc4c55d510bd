use crate::api_client::{ApiError, ValidationError};
use crate::request_sequence::{RequestSequence, RequestTicket};

pub const SUBSCRIBED_MESSAGE: &str = "✅ Subscribed! New event news will arrive by email.";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "This email is already subscribed";
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Subscription failed. Please try again";
pub const UPDATED_MESSAGE: &str = "✅ Email address updated";
pub const UPDATE_FAILED_MESSAGE: &str = "Update failed. Please try again";
pub const UNSUBSCRIBED_MESSAGE: &str = "You have been unsubscribed";
pub const UNSUBSCRIBE_FAILED_MESSAGE: &str = "Unsubscribe failed. Please try again";

pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let email = input.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionRequest {
    Create { email: String },
    Update { current: String, email: String },
    Delete { email: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    fn success(text: &str) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.to_string(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Email subscription form state.
///
/// The form shows either the email input (nothing subscribed yet, or editing)
/// or the current subscription with change and unsubscribe actions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscriptionForm {
    input: String,
    current_email: Option<String>,
    editing: bool,
    message: Option<FormMessage>,
    pending: Option<SubscriptionRequest>,
    requests: RequestSequence,
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn begin_subscribe(&mut self, input: &str) -> Option<(RequestTicket, SubscriptionRequest)> {
        let email = self.checked_email(input)?;
        Some(self.begin(SubscriptionRequest::Create { email }))
    }

    /// Only valid while editing an existing subscription.
    pub fn begin_update(&mut self, input: &str) -> Option<(RequestTicket, SubscriptionRequest)> {
        let current = match (&self.current_email, self.editing) {
            (Some(current), true) => current.clone(),
            _ => {
                log::debug!("Ignoring update outside of editing");
                return None;
            }
        };
        let email = self.checked_email(input)?;
        Some(self.begin(SubscriptionRequest::Update { current, email }))
    }

    /// Picks create or update from the current mode.
    pub fn begin_submit(&mut self, input: &str) -> Option<(RequestTicket, SubscriptionRequest)> {
        if self.editing && self.current_email.is_some() {
            self.begin_update(input)
        } else {
            self.begin_subscribe(input)
        }
    }

    pub fn begin_unsubscribe(&mut self) -> Option<(RequestTicket, SubscriptionRequest)> {
        let email = self.current_email.clone()?;
        Some(self.begin(SubscriptionRequest::Delete { email }))
    }

    fn checked_email(&mut self, input: &str) -> Option<String> {
        match validate_email(input) {
            Ok(email) => Some(email),
            Err(e) => {
                log::warn!("Rejected email input: {:?}", e);
                self.message = Some(FormMessage::error(e.to_string()));
                None
            }
        }
    }

    fn begin(&mut self, request: SubscriptionRequest) -> (RequestTicket, SubscriptionRequest) {
        self.pending = Some(request.clone());
        (self.requests.begin(), request)
    }

    pub fn finish(&mut self, ticket: RequestTicket, outcome: Result<(), ApiError>) -> bool {
        if !self.requests.accept(ticket, "subscription") {
            return false;
        }
        let Some(request) = self.pending.take() else {
            return false;
        };

        match (request, outcome) {
            (SubscriptionRequest::Create { email }, Ok(())) => {
                self.subscribed(email, SUBSCRIBED_MESSAGE);
            }
            (SubscriptionRequest::Create { .. }, Err(e)) => {
                log::error!("Subscription failed: {}", e);
                self.message = Some(FormMessage::error(if e.status() == Some(400) {
                    ALREADY_SUBSCRIBED_MESSAGE
                } else {
                    SUBSCRIBE_FAILED_MESSAGE
                }));
            }
            (SubscriptionRequest::Update { email, .. }, Ok(())) => {
                self.subscribed(email, UPDATED_MESSAGE);
            }
            (SubscriptionRequest::Update { .. }, Err(e)) => {
                log::error!("Subscription update failed: {}", e);
                self.message = Some(FormMessage::error(UPDATE_FAILED_MESSAGE));
            }
            (SubscriptionRequest::Delete { .. }, Ok(())) => {
                self.current_email = None;
                self.editing = false;
                self.message = Some(FormMessage::success(UNSUBSCRIBED_MESSAGE));
            }
            (SubscriptionRequest::Delete { .. }, Err(e)) => {
                log::error!("Unsubscribe failed: {}", e);
                self.message = Some(FormMessage::error(UNSUBSCRIBE_FAILED_MESSAGE));
            }
        }
        true
    }

    fn subscribed(&mut self, email: String, message: &str) {
        self.current_email = Some(email);
        self.input.clear();
        self.editing = false;
        self.message = Some(FormMessage::success(message));
    }

    pub fn start_editing(&mut self) {
        if self.current_email.is_some() {
            self.editing = true;
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.input.clear();
        self.message = None;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn current_email(&self) -> Option<&str> {
        self.current_email.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn shows_input(&self) -> bool {
        self.current_email.is_none() || self.editing
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}
