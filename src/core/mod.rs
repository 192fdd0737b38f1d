pub mod card_repository;
pub mod narrative;
pub mod reading;

pub use crate::domain::model::{Card, DrawResponse, Reading};
pub use crate::domain::ports::{CompletionClient, ConfigProvider, ImageStore, RandomSource};
pub use crate::utils::error::Result;
