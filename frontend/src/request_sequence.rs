/// Identifies one initiated request. Only the most recently issued ticket of a
/// sequence may commit its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Returns `true` when the ticket may commit; logs and returns `false` otherwise.
    pub fn accept(&self, ticket: RequestTicket, what: &str) -> bool {
        if self.is_current(ticket) {
            true
        } else {
            log::debug!(
                "Discarding stale {} response (generation {}, current {})",
                what,
                ticket.generation(),
                self.latest
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase_monotonically() {
        let mut sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();
        assert!(second > first);
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
        assert!(!sequence.accept(first, "test"));
        assert!(sequence.accept(second, "test"));
    }
}
