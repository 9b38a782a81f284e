//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate models one round as an explicit state machine, [`Round`], that
//! owns its deck and both hands and moves through
//! [`Phase`]s: the deal, the player's hits and stand, the dealer's draws to
//! 17, and the comparison that settles the wager against a [`Bankroll`].
//! [`Session`] ties a named player's bankroll to the current round.
//!
//! Every state type is a plain value; with the `serde` feature it can be
//! stored by the host between actions.
//!
//! # Example
//!
//! ```
//! use blackjack21::{Phase, Session, SessionOptions};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut session = Session::new("Ada", SessionOptions::default()).unwrap();
//!
//! session.place_bet("25", &mut rng).unwrap();
//! if session.phase() == Phase::PlayerTurn {
//!     session.player_stand().unwrap();
//!     session.play_dealer().unwrap();
//! }
//! assert_eq!(session.phase(), Phase::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod session;

// Re-export main types
pub use bankroll::{Bankroll, INITIAL_CASH};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    BetError, DeckExhausted, DuplicateCard, InvalidRoundState, RoundError, SessionError,
};
pub use hand::{BLACKJACK, Hand};
pub use options::SessionOptions;
pub use result::{Outcome, SettleReason, Settlement};
pub use round::{Action, DEALER_STANDS_AT, Phase, Round};
pub use session::Session;
