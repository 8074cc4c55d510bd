use crate::api_client::ApiError;
use crate::events::models::Event;
use crate::request_sequence::{RequestSequence, RequestTicket};

pub const EVENT_PAGE_SIZE: u32 = 20;
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load events. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub enum EventFeedView<'a> {
    Loading,
    Failed(&'a str),
    NoEvents,
    Events(&'a [Event]),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventFeed {
    events: Vec<Event>,
    loading: bool,
    error: Option<String>,
    requests: RequestSequence,
}

impl EventFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> RequestTicket {
        self.loading = true;
        self.requests.begin()
    }

    pub fn finish_load(&mut self, ticket: RequestTicket, outcome: Result<Vec<Event>, ApiError>) -> bool {
        if !self.requests.accept(ticket, "event list") {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(events) => {
                self.events = events;
                self.error = None;
            }
            Err(e) => {
                log::error!("Failed to load events: {}", e);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// An error wins over the empty state but not over events loaded earlier.
    pub fn view(&self) -> EventFeedView<'_> {
        if self.loading {
            EventFeedView::Loading
        } else if !self.events.is_empty() {
            EventFeedView::Events(&self.events)
        } else if let Some(error) = &self.error {
            EventFeedView::Failed(error)
        } else {
            EventFeedView::NoEvents
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            url: "https://pokemongolive.com/news".to_string(),
            summary: None,
            published_date: None,
            image_url: None,
            category: None,
            created_at: "2024-05-20T12:00:00".to_string(),
        }
    }

    #[test]
    fn loading_until_first_response() {
        let mut feed = EventFeed::new();
        feed.begin_load();
        assert_eq!(feed.view(), EventFeedView::Loading);
    }

    #[test]
    fn empty_page_is_not_an_error() {
        let mut feed = EventFeed::new();
        let ticket = feed.begin_load();
        feed.finish_load(ticket, Ok(Vec::new()));
        assert_eq!(feed.view(), EventFeedView::NoEvents);
    }

    #[test]
    fn failure_shows_generic_message() {
        let mut feed = EventFeed::new();
        let ticket = feed.begin_load();
        feed.finish_load(
            ticket,
            Err(ApiError::Status {
                status: 503,
                body: "crawler down".to_string(),
            }),
        );
        assert_eq!(feed.view(), EventFeedView::Failed(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn failed_reload_keeps_events() {
        let mut feed = EventFeed::new();
        let ticket = feed.begin_load();
        feed.finish_load(ticket, Ok(vec![event(1), event(2)]));

        let ticket = feed.begin_load();
        feed.finish_load(ticket, Err(ApiError::Network("offline".to_string())));
        assert!(matches!(feed.view(), EventFeedView::Events(events) if events.len() == 2));
        assert_eq!(feed.error(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut feed = EventFeed::new();
        let first = feed.begin_load();
        let second = feed.begin_load();
        feed.finish_load(second, Ok(vec![event(2)]));
        assert!(!feed.finish_load(first, Ok(vec![event(1), event(3)])));
        assert!(matches!(feed.view(), EventFeedView::Events(events) if events[0].id == 2));
    }
}
