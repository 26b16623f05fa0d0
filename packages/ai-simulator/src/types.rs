//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, one per line
    Jsonl,
    /// A single JSON array written when the run finishes
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Random,
    Borked,
}

impl AiType {
    /// Name understood by `loveletter::create_ai`.
    pub fn factory_name(self) -> &'static str {
        match self {
            AiType::Random => "random",
            AiType::Borked => "borked",
        }
    }
}
