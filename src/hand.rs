//! Player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The total that wins outright and the bust threshold.
pub const BLACKJACK: u16 = 21;

/// Totals the cards with aces as 11, then takes back 10 points once if the
/// total is over 21 and any ace is present. Returns the total and whether an
/// ace is still counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u16::from(card.rank.points()));
    }

    let mut reduced = false;
    if value > BLACKJACK && aces > 0 {
        value -= 10;
        reduced = true;
    }

    // With one reduction, a second ace keeps its 11.
    let soft = aces > usize::from(reduced);
    (value, soft)
}

/// The cards held by one party in a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHand"))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces count 11. If that puts the hand over 21, a single 10 is
    /// subtracted no matter how many aces are held, so `[A, A, 9]` is 21 and
    /// `[A, A, A, 9]` is 32.
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a blackjack (two cards totalling 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Stored form of a [`Hand`]; a hand never holds the same card twice.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHand {
    cards: Vec<Card>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHand> for Hand {
    type Error = crate::error::DuplicateCard;

    fn try_from(raw: RawHand) -> Result<Self, Self::Error> {
        crate::deck::ensure_unique(&raw.cards)?;
        Ok(Self { cards: raw.cards })
    }
}
