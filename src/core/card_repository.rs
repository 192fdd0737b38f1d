use crate::domain::model::{image_reference, public_base, Card};
use crate::domain::ports::{ImageStore, RandomSource};
use crate::utils::error::{Result, TarotError};
use std::io::ErrorKind;
use std::sync::Arc;

pub const DEFAULT_CARD_EXTENSION: &str = "jpg";
const DECORATIVE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Lists the card folder and draws random, non-repeating cards from it.
pub struct CardRepository<S: ImageStore> {
    store: S,
    random: Arc<dyn RandomSource>,
    cards_folder: String,
    images_folder: String,
    cards_base: String,
    images_base: String,
    card_extension: String,
}

impl<S: ImageStore> CardRepository<S> {
    pub fn new(
        store: S,
        random: Arc<dyn RandomSource>,
        cards_folder: impl Into<String>,
        images_folder: impl Into<String>,
    ) -> Self {
        let cards_folder = cards_folder.into();
        tracing::info!("CardRepository initialized with cards folder: {}", cards_folder);

        let images_folder = images_folder.into();
        Self {
            store,
            random,
            cards_base: cards_folder.clone(),
            images_base: images_folder.clone(),
            cards_folder,
            images_folder,
            card_extension: DEFAULT_CARD_EXTENSION.to_string(),
        }
    }

    /// Card file extension, with or without the leading dot.
    pub fn with_card_extension(mut self, extension: &str) -> Self {
        self.card_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Builds image links relative to the directory served at `/static`.
    pub fn with_static_root(mut self, static_root: &str) -> Self {
        self.cards_base = public_base(&self.cards_folder, static_root);
        self.images_base = public_base(&self.images_folder, static_root);
        tracing::debug!(
            "Image links: cards under {}, images under {}",
            self.cards_base,
            self.images_base
        );
        self
    }

    /// Card file names in the cards folder, sorted. A missing folder is an
    /// empty deck rather than an error.
    pub async fn list_available(&self) -> Result<Vec<String>> {
        let suffix = format!(".{}", self.card_extension);

        let files = match self.store.list_files(&self.cards_folder).await {
            Ok(files) => files,
            Err(TarotError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Cards folder does not exist: {}", self.cards_folder);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut card_files: Vec<String> = files
            .into_iter()
            .filter(|name| name.ends_with(&suffix))
            .collect();
        card_files.sort();

        tracing::debug!("Found {} card files", card_files.len());
        Ok(card_files)
    }

    /// Draws `count` distinct cards in selection order.
    pub async fn draw(&self, count: usize) -> Result<Vec<Card>> {
        let card_files = self.list_available().await?;

        if card_files.len() < count {
            tracing::error!(
                "Insufficient cards: need {}, have {}",
                count,
                card_files.len()
            );
            return Err(TarotError::InsufficientResources {
                requested: count,
                available: card_files.len(),
            });
        }

        let cards: Vec<Card> = self
            .random
            .sample_indices(card_files.len(), count)
            .into_iter()
            .map(|i| Card::from_file_name(&self.cards_base, &card_files[i]))
            .collect();

        tracing::info!(
            "Drew {} cards: {:?}",
            count,
            cards.iter().map(|c| c.identifier.as_str()).collect::<Vec<_>>()
        );
        Ok(cards)
    }

    /// One random image from the decorative pool, or `None` when the pool is
    /// empty or unreadable. Never fails the request.
    pub async fn pick_decorative_image(&self) -> Option<String> {
        let files = match self.store.list_files(&self.images_folder).await {
            Ok(files) => files,
            Err(TarotError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Images folder does not exist: {}", self.images_folder);
                return None;
            }
            Err(e) => {
                tracing::warn!("Could not list images folder {}: {}", self.images_folder, e);
                return None;
            }
        };

        let mut images: Vec<String> = files
            .into_iter()
            .filter(|name| is_decorative_image(name))
            .collect();
        if images.is_empty() {
            return None;
        }
        images.sort();

        let picked = &images[self.random.pick_index(images.len())];
        Some(image_reference(&self.images_base, picked))
    }
}

fn is_decorative_image(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => DECORATIVE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        _ => false,
    }
}
