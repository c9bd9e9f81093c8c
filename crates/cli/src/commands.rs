// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use anyhow::{Context, Result, bail};
use crossterm::style::Stylize;
use log::{debug, error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::{Card, Deck, HandCategory, Outcome, Showdown, Suit, evaluate, parse_cards};

/// The players names used in the showdown summary.
#[derive(Debug)]
pub struct Players {
    /// The first player name.
    pub name_a: String,
    /// The second player name.
    pub name_b: String,
}

/// Configuration for the stats command.
#[derive(Debug)]
pub struct StatsConfig {
    /// The number of parallel sampling tasks.
    pub tasks: usize,
    /// The number of hands each task samples.
    pub samples_per_task: usize,
    /// Evaluates every hand of the deck instead of sampling.
    pub exhaustive: bool,
}

/// Hands count indexed by category rank, slot 0 is unused.
type CategoryCounts = [u64; 11];

/// Evaluates a 7 cards hand and prints its category and tie-break key.
pub fn eval(cards: &str) -> Result<()> {
    let cards = parse_cards(cards)?;
    let hand = evaluate(&cards)?;

    println!("Cards:       {}", pretty(&cards));
    println!("Category:    {} ({})", hand.category(), hand.category_rank());
    println!("Tie-break:   {:?}", hand.tie_break().key());
    println!("Description: {hand}");

    Ok(())
}

/// Resolves a showdown between two players on the given board.
pub fn showdown(players: &Players, hole_a: &str, hole_b: &str, board: &str) -> Result<()> {
    let hole_a = parse_cards(hole_a).context("first player hole cards")?;
    let hole_b = parse_cards(hole_b).context("second player hole cards")?;
    let board = parse_cards(board).context("board cards")?;

    print_showdown(players, &hole_a, &hole_b, &board)
}

/// Deals showdowns from a shuffled deck.
pub fn deal(players: &Players, seed: Option<u64>, rounds: usize) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for round in 0..rounds {
        debug!("Dealing round {}", round + 1);

        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hole_a = deck.deal_many(2).context("deck has no cards left")?;
        let hole_b = deck.deal_many(2).context("deck has no cards left")?;
        let board = deck.deal_many(5).context("deck has no cards left")?;

        if round > 0 {
            println!();
        }

        print_showdown(players, &hole_a, &hole_b, &board)?;
    }

    Ok(())
}

fn print_showdown(players: &Players, hole_a: &[Card], hole_b: &[Card], board: &[Card]) -> Result<()> {
    let sd = Showdown::new(hole_a, hole_b, board)?;

    println!("{:<12} {}", players.name_a, pretty(hole_a));
    println!("{:<12} {}", players.name_b, pretty(hole_b));
    println!("{:<12} {}", "Board", pretty(board));

    let summary = sd.summary(&players.name_a, &players.name_b);
    match sd.outcome() {
        Outcome::Split => println!("{}", summary.yellow()),
        _ => println!("{}", summary.green()),
    }

    Ok(())
}

/// Counts how often each hand category shows up, either sampling random
/// hands from parallel tasks or going through all the 7 cards hands.
pub fn stats(config: &StatsConfig) -> Result<()> {
    let deck = Deck::default();

    let now = Instant::now();
    let counts = if config.exhaustive {
        info!("Evaluating all 7 cards hands of a {} cards deck", deck.count());
        exhaustive_counts(&deck)?
    } else {
        sampled_counts(&deck, config)?
    };
    let elapsed = now.elapsed().as_secs_f64();

    let total = counts.iter().sum::<u64>();
    info!(
        "Evaluated {total} hands in {elapsed:.3}s ({:.0} hands/sec)",
        total as f64 / elapsed
    );

    for category in HandCategory::categories() {
        let count = counts[category.rank() as usize];
        println!(
            "{:<16} {:>10} {:>8.4}%",
            category.to_string(),
            count,
            count as f64 * 100.0 / total.max(1) as f64
        );
    }

    Ok(())
}

/// Evaluates every 7 cards hand of the deck.
fn exhaustive_counts(deck: &Deck) -> Result<CategoryCounts> {
    let mut counts = CategoryCounts::default();
    let mut failure = None;

    deck.for_each(7, |cards| match evaluate(cards) {
        Ok(hand) => counts[hand.category_rank() as usize] += 1,
        Err(e) => {
            failure.get_or_insert(e);
        }
    });

    match failure {
        Some(e) => Err(e).context("hand evaluation failed"),
        None => Ok(counts),
    }
}

/// Evaluates random hands from parallel tasks.
fn sampled_counts(deck: &Deck, config: &StatsConfig) -> Result<CategoryCounts> {
    if config.tasks == 0 || config.samples_per_task == 0 {
        bail!("tasks and samples must be greater than zero");
    }

    // Per task counters indexed by category rank to avoid contention.
    let task_counters = (0..config.tasks)
        .map(|_| (0..=10).map(|_| AtomicU64::new(0)).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let failures = AtomicU64::new(0);

    info!(
        "Sampling {} hands with {} tasks",
        config.tasks * config.samples_per_task,
        config.tasks
    );

    deck.par_sample(config.tasks, config.samples_per_task, 7, |task_id, cards| {
        match evaluate(cards) {
            Ok(hand) => {
                task_counters[task_id][hand.category_rank() as usize]
                    .fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error!("Task {task_id} failed to evaluate {cards:?}: {e}");
                failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    let failures = failures.into_inner();
    if failures > 0 {
        bail!("{failures} sampled hands failed to evaluate");
    }

    let mut counts = CategoryCounts::default();
    for (rank, count) in counts.iter_mut().enumerate() {
        *count = task_counters
            .iter()
            .map(|counters| counters[rank].load(Ordering::Relaxed))
            .sum();
    }

    Ok(counts)
}

/// Formats cards with the suit symbols, hearts and diamonds in red.
fn pretty(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| {
            let text = format!("{}{}", c.rank(), c.suit().symbol());
            match c.suit() {
                Suit::Hearts | Suit::Diamonds => text.red().to_string(),
                Suit::Clubs | Suit::Spades => text.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
