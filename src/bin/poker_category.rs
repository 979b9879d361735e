use anyhow::{bail, Result};
use clap::Parser;
use poker_category::deck::Deck;
use poker_category::hand::Hand;

/// Classify seven-card poker hands.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Seven cards, e.g. `As 2s 3s 4s 5s 9d Kc` or `A♠,K♥,...`.
    cards: Vec<String>,
    /// Deal random hands from a deck shuffled with this seed.
    #[clap(long, short, conflicts_with = "cards")]
    seed: Option<u64>,
    /// Number of hands to deal with --seed (at most 7 per deck).
    #[clap(long, short, default_value_t = 1, requires = "seed")]
    count: usize,
    /// Log the detected patterns of each hand.
    #[clap(long, short)]
    verbose: bool,
}

fn show(hand: &Hand) -> Result<()> {
    let category = hand.show_hand()?;
    let cards: Vec<String> = hand.as_slice().iter().map(|c| format!("{c:#}")).collect();
    println!("{:<20} {category}", cards.join(" "));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(seed) = cli.seed {
        let mut deck = Deck::seeded(seed);
        if cli.count > deck.hands_left() {
            bail!("a deck holds only {} hands, asked for {}", deck.hands_left(), cli.count);
        }
        for _ in 0..cli.count {
            let Some(cards) = deck.deal_seven() else {
                bail!("deck exhausted");
            };
            show(&Hand::from_iter(cards))?;
        }
        return Ok(());
    }

    if cli.cards.is_empty() {
        bail!("no cards given; pass seven cards or --seed");
    }
    let hand: Hand = cli.cards.join(" ").parse()?;
    show(&hand)
}
