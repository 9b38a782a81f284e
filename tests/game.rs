//! Round integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use blackjack21::{
    Action, Bankroll, BetError, Card, DECK_SIZE, Deck, DeckExhausted, DuplicateCard, Hand,
    Outcome, Phase, Rank, Round, RoundError, SettleReason, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand(ranks: &[Rank]) -> Hand {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| card(suit, rank))
        .collect()
}

fn stacked(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.iter().copied()).unwrap()
}

#[test]
fn hand_values_follow_single_ace_reduction() {
    assert_eq!(hand(&[Rank::Ace, Rank::Nine]).value(), 20);
    assert_eq!(hand(&[Rank::Ace, Rank::Ace]).value(), 12);
    assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);
    assert_eq!(hand(&[Rank::King, Rank::Queen, Rank::Two]).value(), 22);

    // Only one ace is ever taken down to 1.
    let three_aces = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(three_aces.value(), 32);
    assert!(three_aces.is_bust());
}

#[test]
fn hand_blackjack_soft_and_bust() {
    let natural = hand(&[Rank::Ace, Rank::King]);
    assert!(natural.is_blackjack());
    assert!(natural.is_soft());
    assert!(!natural.is_bust());

    let drawn_21 = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(drawn_21.value(), 21);
    assert!(!drawn_21.is_blackjack());

    let hard = hand(&[Rank::Ace, Rank::King, Rank::Five]);
    assert_eq!(hard.value(), 16);
    assert!(!hard.is_soft());

    let bust = hand(&[Rank::Ten, Rank::Nine, Rank::Five]);
    assert_eq!(bust.value(), 24);
    assert!(bust.is_bust());

    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn hand_value_does_not_clamp_large_totals() {
    let whole_deck: Hand = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| card(suit, rank)))
        .collect();
    assert_eq!(whole_deck.len(), DECK_SIZE);
    assert_eq!(whole_deck.value(), 370);
}

#[test]
fn fresh_decks_hold_52_unique_cards() {
    for seed in 0..20 {
        let deck = Deck::from_seed(seed);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
    }
    assert_ne!(Deck::from_seed(1), Deck::from_seed(2));
}

#[test]
fn deck_draws_in_order_until_exhausted() {
    let mut deck = stacked(&[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Ace)]);
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.draw(), Ok(card(Suit::Clubs, Rank::Ace)));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckExhausted));
}

#[test]
fn stacked_deck_rejects_duplicates() {
    let twice = card(Suit::Spades, Rank::Queen);
    assert_eq!(
        Deck::from_cards([twice, card(Suit::Hearts, Rank::Two), twice]).unwrap_err(),
        DuplicateCard(twice)
    );
}

#[test]
fn bankroll_bets_and_settles() {
    let mut bankroll = Bankroll::new();
    assert_eq!(bankroll.cash(), 500);
    assert!(bankroll.can_bet(1));
    assert!(bankroll.can_bet(500));
    assert!(!bankroll.can_bet(0));
    assert!(!bankroll.can_bet(501));

    assert_eq!(bankroll.parse_bet("0"), Err(BetError::NotPositive));
    assert_eq!(bankroll.parse_bet("-20"), Err(BetError::NotPositive));
    assert_eq!(bankroll.parse_bet("12.5"), Err(BetError::NotANumber));
    assert_eq!(bankroll.parse_bet(""), Err(BetError::NotANumber));
    assert_eq!(bankroll.parse_bet("-"), Err(BetError::NotANumber));
    assert_eq!(bankroll.parse_bet("+25"), Ok(25));
    assert_eq!(
        bankroll.parse_bet("1234567890123456789012345678901234567890"),
        Err(BetError::InsufficientFunds { cash: 500 })
    );
    assert_eq!(
        bankroll.parse_bet("-1234567890123456789012345678901234567890"),
        Err(BetError::NotPositive)
    );
    assert_eq!(
        bankroll.parse_bet("501"),
        Err(BetError::InsufficientFunds { cash: 500 })
    );

    bankroll.settle(Outcome::Win, 100);
    assert_eq!(bankroll.cash(), 600);
    bankroll.settle(Outcome::Tie, 100);
    assert_eq!(bankroll.cash(), 600);
    bankroll.settle(Outcome::Loss, 600);
    assert_eq!(bankroll.cash(), 0);
    assert!(bankroll.is_broke());
}

#[test]
fn start_rejects_invalid_bets() {
    let mut bankroll = Bankroll::new();
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    assert_eq!(
        Round::start(&mut bankroll, 0, &mut rng).unwrap_err(),
        RoundError::InvalidBet(BetError::NotPositive)
    );
    assert_eq!(
        Round::start(&mut bankroll, 501, &mut rng).unwrap_err(),
        RoundError::InvalidBet(BetError::InsufficientFunds { cash: 500 })
    );
    assert_eq!(bankroll.cash(), 500);
}

#[test]
fn short_deck_fails_the_deal() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    assert_eq!(
        Round::start_with_deck(&mut bankroll, 10, deck).unwrap_err(),
        RoundError::DeckExhausted
    );
    assert_eq!(bankroll.cash(), 500);
}

#[test]
fn player_blackjack_wins_before_dealer_acts() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ace),   // player
        card(Suit::Spades, Rank::King),  // player
        card(Suit::Clubs, Rank::Six),    // dealer
        card(Suit::Diamonds, Rank::Ten), // dealer
        card(Suit::Hearts, Rank::Five),
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 100, deck).unwrap();
    assert_eq!(round.phase(), Phase::Settled);
    assert_eq!(round.outcome(), Some(Outcome::Win));
    assert_eq!(
        round.settlement().map(|s| s.reason),
        Some(SettleReason::PlayerBlackjack)
    );
    assert_eq!(round.bet(), None);
    assert_eq!(bankroll.cash(), 600);

    assert_eq!(
        round.dealer_hit(&mut bankroll).unwrap_err(),
        RoundError::IllegalAction {
            action: Action::DealerHit,
            phase: Phase::Settled,
        }
    );
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn both_blackjacks_go_to_the_player() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Diamonds, Rank::Jack),
    ]);

    let round = Round::start_with_deck(&mut bankroll, 50, deck).unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Win));
    assert_eq!(bankroll.cash(), 550);
}

#[test]
fn dealer_blackjack_loses_the_deal() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Diamonds, Rank::King),
    ]);

    let round = Round::start_with_deck(&mut bankroll, 50, deck).unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Loss));
    assert_eq!(
        round.settlement().map(|s| s.reason),
        Some(SettleReason::DealerBlackjack)
    );
    assert_eq!(bankroll.cash(), 450);
}

#[test]
fn player_stands_and_dealer_busts() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Spades, Rank::Nine),  // player
        card(Suit::Clubs, Rank::Ten),    // dealer
        card(Suit::Diamonds, Rank::Six), // dealer
        card(Suit::Hearts, Rank::King),  // dealer hit
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 100, deck).unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_hand().value(), 19);
    assert_eq!(round.dealer_up_card(), Some(&card(Suit::Clubs, Rank::Ten)));

    assert_eq!(round.stand(&mut bankroll), Ok(Phase::DealerTurn));
    let drawn = round.dealer_hit(&mut bankroll).unwrap();
    assert_eq!(drawn.rank, Rank::King);

    assert_eq!(round.dealer_hand().value(), 26);
    assert_eq!(round.outcome(), Some(Outcome::Win));
    assert_eq!(
        round.settlement().map(|s| s.reason),
        Some(SettleReason::DealerBust)
    );
    assert_eq!(bankroll.cash(), 600);
}

#[test]
fn player_hits_into_bust_without_dealer_turn() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Hearts, Rank::Five), // player hit
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 100, deck).unwrap();
    round.hit(&mut bankroll).unwrap();

    assert_eq!(round.player_hand().value(), 24);
    assert_eq!(round.phase(), Phase::Settled);
    assert_eq!(
        round.settlement().map(|s| s.reason),
        Some(SettleReason::PlayerBust)
    );
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(bankroll.cash(), 400);
}

#[test]
fn player_hits_to_21_and_wins() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Hearts, Rank::Queen), // player hit
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 40, deck).unwrap();
    round.hit(&mut bankroll).unwrap();

    assert_eq!(
        round.settlement().map(|s| s.reason),
        Some(SettleReason::PlayerTwentyOne)
    );
    assert_eq!(bankroll.cash(), 540);
}

#[test]
fn dealer_drawing_to_21_beats_the_player() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Hearts, Rank::Queen), // dealer hit
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 100, deck).unwrap();
    assert_eq!(round.stand(&mut bankroll), Ok(Phase::DealerTurn));
    let drawn = round.play_dealer(&mut bankroll).unwrap();

    assert_eq!(drawn, vec![card(Suit::Hearts, Rank::Queen)]);
    assert_eq!(
        round.settlement().map(|s| s.reason),
        Some(SettleReason::DealerTwentyOne)
    );
    assert_eq!(bankroll.cash(), 400);
}

#[test]
fn comparing_settles_tie_and_loss() {
    let mut bankroll = Bankroll::new();
    let tie = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Nine),
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 100, tie).unwrap();
    assert_eq!(round.stand(&mut bankroll), Ok(Phase::Comparing));
    let settlement = round.compare(&mut bankroll).unwrap();
    assert_eq!(settlement.outcome, Outcome::Tie);
    assert_eq!(settlement.net(), 0);
    assert_eq!(bankroll.cash(), 500);

    let loss = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Eight),
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 100, loss).unwrap();
    round.stand(&mut bankroll).unwrap();
    let settlement = round.compare(&mut bankroll).unwrap();
    assert_eq!(settlement.outcome, Outcome::Loss);
    assert_eq!(
        settlement.reason,
        SettleReason::Stood {
            player: 17,
            dealer: 18
        }
    );
    assert_eq!(settlement.cash_after, 400);
    assert_eq!(bankroll.cash(), 400);
}

#[test]
fn illegal_actions_leave_the_round_untouched() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Two),
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 100, deck).unwrap();
    assert_eq!(
        round.compare(&mut bankroll).unwrap_err(),
        RoundError::IllegalAction {
            action: Action::Compare,
            phase: Phase::PlayerTurn,
        }
    );
    assert!(round.dealer_hit(&mut bankroll).is_err());

    round.stand(&mut bankroll).unwrap();
    let before = round.clone();

    assert_eq!(
        round.hit(&mut bankroll).unwrap_err(),
        RoundError::IllegalAction {
            action: Action::Hit,
            phase: Phase::DealerTurn,
        }
    );
    assert!(round.stand(&mut bankroll).is_err());
    assert_eq!(round, before);
    assert_eq!(bankroll.cash(), 500);

    // 15 + 2 = 17: the dealer stands.
    round.dealer_hit(&mut bankroll).unwrap();
    assert_eq!(round.phase(), Phase::Comparing);
    assert_eq!(
        round.dealer_hit(&mut bankroll).unwrap_err(),
        RoundError::IllegalAction {
            action: Action::DealerHit,
            phase: Phase::Comparing,
        }
    );
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut bankroll = Bankroll::new();
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    let mut round = Round::start_with_deck(&mut bankroll, 10, deck).unwrap();
    let before = round.clone();

    assert_eq!(
        round.hit(&mut bankroll).unwrap_err(),
        RoundError::DeckExhausted
    );
    assert_eq!(round, before);
}
