//! CLI blackjack demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack21::{Card, Hand, Outcome, Phase, Round, Session, SessionError, SessionOptions, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut session = loop {
        let name = prompt_raw("What's your name? ");
        if name.eq_ignore_ascii_case("q") {
            return;
        }
        match Session::new(&name, SessionOptions::default()) {
            Ok(session) => break session,
            Err(err) => println!("{err}"),
        }
    };

    loop {
        let cash = session.bankroll().cash();
        let input = prompt_line(&format!(
            "{} has ${cash}. Bet amount (1-{cash}): ",
            session.player()
        ));
        if input == "q" {
            break;
        }

        if let Err(err) = session.place_bet(&input, &mut rng) {
            println!("{err}");
            continue;
        }

        while session.phase() == Phase::PlayerTurn {
            print_table(&session);
            let result = match prompt_line("[h]it or [s]tay: ").as_str() {
                "h" | "hit" => session.player_hit().map(|_| ()),
                "s" | "stay" | "stand" => session.player_stand().map(|_| ()),
                "q" | "quit" => {
                    finish(session);
                    return;
                }
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        while session.phase() == Phase::DealerTurn {
            match session.dealer_hit() {
                Ok(card) => println!("Dealer draws {}.", format_card(&card)),
                Err(err) => {
                    println!("Dealer error: {err}");
                    break;
                }
            }
        }

        if session.phase() == Phase::Comparing {
            if let Err(err) = session.compare() {
                println!("Compare error: {err}");
            }
        }

        print_result(&session);

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => match session.play_again() {
                Ok(()) => {}
                Err(SessionError::Broke) => {
                    println!("{} is broke.", session.player());
                    break;
                }
                Err(err) => println!("{err}"),
            },
            _ => break,
        }
    }

    finish(session);
}

fn finish(session: Session) {
    let player = session.player().to_string();
    let cash = session.finish();
    println!("Game over. {player} leaves with ${cash}.");
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn print_table(session: &Session) {
    let Some(round) = session.round() else {
        return;
    };

    println!("\nDealer: {}", format_dealer(round));
    println!(
        "{}: {} (value {})\n",
        session.player(),
        format_hand(round.player_hand()),
        round.player_hand().value()
    );
}

fn print_result(session: &Session) {
    let Some(round) = session.round() else {
        return;
    };
    let Some(settlement) = round.settlement() else {
        return;
    };

    println!(
        "\nDealer: {} (value {})",
        format_hand(round.dealer_hand()),
        settlement.dealer_value
    );
    println!(
        "{}: {} (value {})",
        session.player(),
        format_hand(round.player_hand()),
        settlement.player_value
    );

    let verdict = match settlement.outcome {
        Outcome::Win => colorize("won", "32"),
        Outcome::Loss => colorize("lost", "31"),
        Outcome::Tie => colorize("tied", "33"),
    };
    println!(
        "{} {verdict}: {}. {} now has ${}.",
        session.player(),
        settlement.reason,
        session.player(),
        settlement.cash_after
    );
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(round: &Round) -> String {
    let Some(up) = round.dealer_up_card() else {
        return "(no cards)".to_string();
    };

    let mut parts = vec![format_card(up)];
    parts.extend(round.dealer_hand().cards().iter().skip(1).map(|_| "??".to_string()));
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
