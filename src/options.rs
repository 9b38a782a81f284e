//! Session configuration options.

use crate::bankroll::INITIAL_CASH;

/// Configuration options for a player session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack21::SessionOptions;
///
/// let options = SessionOptions::default().with_starting_cash(1_000);
/// assert_eq!(options.starting_cash, 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionOptions {
    /// Cash a new player starts with.
    pub starting_cash: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_cash: INITIAL_CASH,
        }
    }
}

impl SessionOptions {
    /// Sets the starting cash.
    #[must_use]
    pub const fn with_starting_cash(mut self, cash: usize) -> Self {
        self.starting_cash = cash;
        self
    }
}
