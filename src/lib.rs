//! Seer agents for cooperative Hanabi.
//!
//! The crate is organized bottom-up:
//!
//! - [`cards`]: one-byte cards, bit-set card sets, table-indexed hands, seeded decks
//! - [`game`]: public counters, hands, and the full simulation with a live deck
//! - [`seer`]: canonical endgame states, the memoized exact solver,
//!   the no-draw planner, and translation back to legal moves
//! - [`agents`]: the decision makers the executor consults every turn
//! - [`play`]: the turn loop, seed loading, and the parallel game pool
pub mod agents;
pub mod cards;
pub mod game;
pub mod play;
pub mod seer;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Card value, 1 through 5. Zero only ever appears as "nothing played yet".
pub type Value = u8;
/// Seat index around the table.
pub type Position = usize;
/// Final game score, 0 through 25.
pub type Score = u8;
/// Expected score of a search line.
pub type Utility = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and fixtures.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of colours on the table.
pub const N_COLOURS: usize = 5;
/// Number of distinct (colour, value) cards.
pub const N_UNIQUE: usize = 25;
/// Physical cards in a fresh deck.
pub const DECK_SIZE: usize = 50;
/// Seats reserved in every state, used or not.
pub const MAX_PLAYERS: usize = 5;
/// Most cards any hand may hold.
pub const MAX_HAND: usize = 5;
/// Hint token cap.
pub const MAX_HINTS: u8 = 8;
/// Bombs available at the start of a game.
pub const MAX_BOMBS: u8 = 3;
/// Perfect score.
pub const MAX_SCORE: Score = 25;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Largest remaining deck the exact solver accepts.
pub const ENDGAME_DECK: usize = 5;
/// Divisor applied to imperfect terminal scores when optimizing for 25.
pub const PERFECT_SCALE: Utility = 10_000.0;
/// Loose upper bound on total discards that still permits a perfect game.
pub const WINNABLE_DISCARDS: i8 = 13;
/// Hints the planner may hold in reserve before hoarding is penalized.
pub const HINT_RESERVE: i8 = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
