pub mod engine;
pub mod error;
pub mod evaluator;
pub mod frequency;
pub mod generator;
pub mod models;
pub mod parser;
pub mod scorer;
pub mod tiers;

pub use engine::Engine;
pub use error::EngineError;
