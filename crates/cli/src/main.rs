// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, evaluates and compares poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand, value_parser};
use log::error;

pub mod commands;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// The first player name.
    #[clap(long, global = true, default_value = "Player A")]
    name_a: String,
    /// The second player name.
    #[clap(long, global = true, default_value = "Player B")]
    name_b: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a 7 cards hand.
    Eval {
        /// The hand cards, e.g. Ah Kd 10c Js 9h 2c 3d.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compares two players hands on a board.
    Showdown {
        /// The first player hole cards, e.g. "Ah Kh".
        #[clap(long)]
        hole_a: String,
        /// The second player hole cards.
        #[clap(long)]
        hole_b: String,
        /// The 5 board cards.
        #[clap(long, short)]
        board: String,
    },
    /// Deals two players hands and a board from a shuffled deck.
    Deal {
        /// Seed for the deck shuffle.
        #[clap(long, short)]
        seed: Option<u64>,
        /// The number of showdowns to deal.
        #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u32).range(1..=1000))]
        rounds: u32,
    },
    /// Samples random 7 cards hands and prints the categories frequencies.
    Stats {
        /// The number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u16).range(1..=64))]
        tasks: u16,
        /// The number of hands sampled by each task.
        #[clap(long, short, default_value_t = 250_000)]
        samples: usize,
        /// Evaluates every 7 cards hand instead of sampling.
        #[clap(long, short)]
        exhaustive: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let players = commands::Players {
        name_a: cli.name_a,
        name_b: cli.name_b,
    };

    let res = match cli.command {
        Command::Eval { cards } => commands::eval(&cards.join(" ")),
        Command::Showdown {
            hole_a,
            hole_b,
            board,
        } => commands::showdown(&players, &hole_a, &hole_b, &board),
        Command::Deal { seed, rounds } => commands::deal(&players, seed, rounds as usize),
        Command::Stats {
            tasks,
            samples,
            exhaustive,
        } => commands::stats(&commands::StatsConfig {
            tasks: tasks as usize,
            samples_per_task: samples,
            exhaustive,
        }),
    };

    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}
