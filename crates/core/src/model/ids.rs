use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one load request.
///
/// Tickets are handed out in increasing order; a fetch response is only applied
/// while the quiz is still waiting on the ticket it was issued for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Creates a new `LoadTicket`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the ticket issued after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Debug for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoadTicket({})", self.0)
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let first = LoadTicket::new(1);
        assert!(first.next() > first);
        assert_eq!(first.next().value(), 2);
    }
}
