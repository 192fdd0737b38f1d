use crate::adapters::{HuggingFaceClient, LocalImageStore, SeededRandom, ThreadRandom};
use crate::core::card_repository::CardRepository;
use crate::core::narrative::NarrativeGenerator;
use crate::domain::model::{Card, DrawResponse, Reading};
use crate::domain::ports::{ConfigProvider, ImageStore, RandomSource};
use crate::utils::error::{ErrorCategory, Result, TarotError};
use axum::http::StatusCode;
use std::sync::Arc;

pub const DEFAULT_DRAW_COUNT: usize = 3;
pub const FALLBACK_PROPHECY: &str = "The oracle is silent... (AI error)";

/// Status code plus JSON body for one `/draw_cards` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub status: StatusCode,
    pub body: DrawResponse,
}

impl DrawOutcome {
    fn success(reading: Reading) -> Self {
        Self {
            status: StatusCode::OK,
            body: DrawResponse::Reading(reading),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: DrawResponse::Error { error: message },
        }
    }
}

/// Draw → decorate → narrate → assemble, once per request. Holds no
/// per-request state.
pub struct ReadingOrchestrator<S: ImageStore> {
    cards: CardRepository<S>,
    narrator: NarrativeGenerator,
}

impl<S: ImageStore> ReadingOrchestrator<S> {
    pub fn new(cards: CardRepository<S>, narrator: NarrativeGenerator) -> Self {
        Self { cards, narrator }
    }

    pub async fn draw_reading(&self) -> Result<Reading> {
        let cards = self.cards.draw(DEFAULT_DRAW_COUNT).await?;
        let decorative_image = self.cards.pick_decorative_image().await;

        let descriptions: Vec<String> = cards.iter().map(Card::description).collect();

        match self.narrator.generate(&descriptions).await {
            Ok(narrative) => Ok(Reading {
                cards,
                decorative_image,
                narrative,
            }),
            Err(TarotError::NarrativeGeneration { source }) => {
                // 失敗時重新抽牌，不沿用原本的牌組
                tracing::warn!("Using fallback prophecy after AI failure: {}", source);
                let cards = self.cards.draw(DEFAULT_DRAW_COUNT).await?;
                let decorative_image = self.cards.pick_decorative_image().await;

                Ok(Reading {
                    cards,
                    decorative_image,
                    narrative: FALLBACK_PROPHECY.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Runs one reading and maps any error to a 500 body. Never panics on a
    /// failed draw.
    pub async fn respond(&self) -> DrawOutcome {
        match self.draw_reading().await {
            Ok(reading) => DrawOutcome::success(reading),
            Err(e) => match e.category() {
                ErrorCategory::InsufficientResources => DrawOutcome::failure(e.to_string()),
                _ if e.is_domain_error() => {
                    tracing::error!("Reading failed: {}", e);
                    DrawOutcome::failure(e.to_string())
                }
                _ => {
                    tracing::error!("Unexpected error while drawing cards: {}", e);
                    DrawOutcome::failure(format!("Unexpected error: {}", e))
                }
            },
        }
    }
}

impl ReadingOrchestrator<LocalImageStore> {
    /// Wires the production adapters from validated configuration.
    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        let token = config
            .hf_token()
            .ok_or_else(|| TarotError::MissingConfigError {
                field: "HF_TOKEN".to_string(),
            })?;

        let random: Arc<dyn RandomSource> = match config.seed() {
            Some(seed) => {
                tracing::info!("Using seeded random source ({})", seed);
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };

        let cards = CardRepository::new(
            LocalImageStore::new(),
            random,
            config.cards_folder(),
            config.images_folder(),
        )
        .with_card_extension(config.card_extension())
        .with_static_root(config.static_dir());

        let client = HuggingFaceClient::new(
            config.inference_endpoint(),
            token,
            config.request_timeout(),
        )?;
        tracing::info!(
            "Narrative generator using model {} at {}",
            config.model(),
            client.endpoint()
        );
        let narrator = NarrativeGenerator::new(Arc::new(client), config.model());

        Ok(Self::new(cards, narrator))
    }
}
