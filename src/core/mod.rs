//! Core arcade types: state, game ids, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::ArcadeConfig;
pub use error::{ArcadeError, InputError, PortError, Result};
pub use rng::ArcadeRng;
pub use state::{ArcadeState, GameId};
