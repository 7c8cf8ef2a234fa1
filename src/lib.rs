//! # rust-arcade
//!
//! A small prompt-driven arcade with three games:
//!
//! - **Guessing game**: guess a secret number between 1 and 10
//! - **Magic eight ball**: ask a question, get one of twenty answers
//! - **Bear, ninja, hunter**: a three-way cyclic duel against the computer
//!
//! ## Design Principles
//!
//! 1. **Ports, not dialogs**: games only talk to the player through the
//!    `Port` trait, so a scripted responder can drive them in tests.
//!
//! 2. **Explicit state**: `ArcadeState` is passed into every game call.
//!    There is exactly one active game at a time.
//!
//! 3. **Deterministic**: all randomness comes from a seeded `ArcadeRng`,
//!    with one independent stream per game.
//!
//! ## Modules
//!
//! - `core`: state, game ids, RNG, configuration, errors
//! - `io`: dialog port and render sink, scripted and terminal adapters
//! - `session`: confirmation loop, session lifecycle, medals
//! - `games`: the three games
//! - `arcade`: game selection menu and reload

pub mod arcade;
pub mod core;
pub mod games;
pub mod io;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ArcadeConfig, ArcadeError, ArcadeRng, ArcadeState, GameId, InputError, PortError, Result,
};

pub use crate::io::{Host, Port, RecordingSink, Region, RenderSink, ScriptedPort, TerminalPort, TerminalSink};

pub use crate::session::{confirm, end_session, start_session, Answer, Medal, SessionSummary};

pub use crate::games::{
    Choice, DuelGame, Game, GuessingGame, MatchHistory, OracleGame, RoundOutcome, RoundResult,
};

pub use crate::arcade::Arcade;
