//! Simulate Binary
//!
//! Plays Hanabi deals with a chosen agent. One seed plays on the main
//! thread, optionally one turn at a time. More seeds go to the pool.
//!
//! Seeds come from `--seed`, `--seeds <file>`, or `1..=--count`.

use clap::Parser;
use hanabi::MAX_PLAYERS;
use hanabi::agents::AgentKind;
use hanabi::game::Nature;
use hanabi::play::Executor;
use hanabi::play::Pool;
use hanabi::seer::SeerConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// play this seed, repeatable
    #[arg(long)]
    seed: Vec<u32>,
    /// newline-delimited seeds, ending at EOF or a 0
    #[arg(long)]
    seeds: Option<PathBuf>,
    /// play seeds 1..=count when no other seeds are given
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long, default_value_t = 4)]
    players: usize,
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,
    #[arg(long, value_enum, default_value_t = AgentKind::Seer)]
    agent: AgentKind,
    /// log games scoring at or below this
    #[arg(long, default_value_t = 0)]
    record_score: u8,
    /// log games taking at least this many seconds
    #[arg(long, default_value_t = 60.0)]
    record_time: f64,
    /// pause between turns of a single game
    #[arg(long)]
    interactive: bool,
    /// rank imperfect endgames by score alone
    #[arg(long)]
    ignore_perfect: bool,
    /// solve exactly only while a perfect game is in reach
    #[arg(long)]
    only_when_winnable: bool,
    /// weigh the hands risky discards come from
    #[arg(long)]
    track_hand_weight: bool,
    /// allow hint hoarding
    #[arg(long)]
    no_magic: bool,
}

impl Args {
    fn config(&self) -> SeerConfig {
        SeerConfig {
            optimize_for_perfect: !self.ignore_perfect,
            always_brute_force: !self.only_when_winnable,
            track_hand_weight: self.track_hand_weight,
            allow_magic: !self.no_magic,
        }
    }

    fn seeds(&self) -> anyhow::Result<Vec<u32>> {
        let mut seeds = self.seed.clone();
        if let Some(path) = self.seeds.as_deref() {
            seeds.extend(hanabi::play::load(path)?);
        }
        if seeds.is_empty() {
            seeds = hanabi::play::range(1, self.count);
        }
        Ok(seeds)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    hanabi::log()?;
    anyhow::ensure!(
        (2..=MAX_PLAYERS).contains(&args.players),
        "hanabi takes 2 to {} players, not {}",
        MAX_PLAYERS,
        args.players
    );
    anyhow::ensure!(args.record_time >= 0.0, "record time must not be negative");
    hanabi::cards::init(args.players < 4);
    let config = args.config();
    match args.seeds()?.as_slice() {
        [] => anyhow::bail!("no seeds to play"),
        [seed] => {
            let nature = Nature::new(args.players, *seed);
            let mut executor = Executor::new(nature, args.agent.build(config));
            let score = executor.play(args.interactive);
            log::info!("seed {} scored {}", seed, score);
            if args.interactive {
                println!("{}", executor.nature());
            }
        }
        seeds => {
            let pool = Pool {
                players: args.players,
                agent: args.agent,
                config,
                threads: args.threads.max(1),
                record_score: args.record_score,
                record_time: Duration::from_secs_f64(args.record_time),
            };
            let summary = pool.run(seeds)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
