pub mod dto;
pub mod error;
pub mod generator;
pub mod models;
pub mod scoring;
pub mod services;

pub use error::{EngineError, Result};
pub use generator::{generate, generate_with_rng};
pub use models::{Combination, Draw, FixedNumbers, PrizeTier, Strategy};
pub use scoring::{ScoredCombination, count_hits, prize_for};
