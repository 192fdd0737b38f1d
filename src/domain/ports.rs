use crate::utils::error::{NarrativeFailure, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Read-only view of the folders holding card and decorative images.
pub trait ImageStore: Send + Sync {
    /// File names (not paths) directly inside `dir`. A missing directory is
    /// reported as an `IoError` of kind `NotFound`.
    fn list_files(&self, dir: &str) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

/// Randomness provider. Implementations must be usable from concurrent
/// requests.
pub trait RandomSource: Send + Sync {
    /// `amount` distinct indices from `0..len`, in selection order.
    /// Callers guarantee `amount <= len`.
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize>;

    /// One index from `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Single-turn completion of `request.prompt`; returns the raw text.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<String, NarrativeFailure>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn cards_folder(&self) -> &str;
    fn images_folder(&self) -> &str;
    fn static_dir(&self) -> &str;
    fn card_extension(&self) -> &str;
    fn hf_token(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn inference_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn seed(&self) -> Option<u64>;
}
