//! Letter-guessing strategies
//!
//! Strategies only ever see the masked word; the candidate filter infers
//! hits and misses from how it changes between turns.

pub mod candidates;
mod engine;
pub mod frequency;
pub mod predictor;
pub mod routing;
pub mod strategy;

pub use candidates::CandidateFilter;
pub use engine::Solver;
pub use frequency::FrequencyStrategy;
pub use predictor::{FnPredictor, LetterPredictor, NgramPredictor, PredictorConfig};
pub use routing::{GuessSource, RoutingStrategy};
pub use strategy::{GuessStrategy, StrategyKind, StrategyType};
