//! Session scaffolding shared by every game.
//!
//! - `confirm`: yes/no confirmation loop
//! - `lifecycle`: name acquisition, game activation, end-of-session results
//! - `medal`: medal tiers by win percentage

pub mod confirm;
pub mod lifecycle;
pub mod medal;

pub use confirm::{confirm, Answer};
pub use lifecycle::{end_session, keep_playing, start_session, SessionSummary};
pub use medal::{Medal, MEDAL_THRESHOLDS};
