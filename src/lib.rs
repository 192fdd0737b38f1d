pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HuggingFaceClient, LocalImageStore, SeededRandom, ThreadRandom};
pub use api::{build_router, AppState};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{
    card_repository::CardRepository,
    narrative::NarrativeGenerator,
    reading::{DrawOutcome, ReadingOrchestrator},
};
pub use utils::error::{Result, TarotError};
