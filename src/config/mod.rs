pub mod toml_config;

use crate::adapters::http::{DEFAULT_INFERENCE_ENDPOINT, DEFAULT_MODEL};
use crate::core::card_repository::DEFAULT_CARD_EXTENSION;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_provider, Validate};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CARDS_FOLDER: &str = "static/cards";
pub const DEFAULT_IMAGES_FOLDER: &str = "static/images";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Parser)]
#[command(name = "tarot-oracle")]
#[command(about = "Draws three tarot cards and asks an AI oracle for a prophecy")]
pub struct CliConfig {
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "CARDS_FOLDER", default_value = DEFAULT_CARDS_FOLDER)]
    pub cards_folder: String,

    #[arg(long, env = "IMAGES_FOLDER", default_value = DEFAULT_IMAGES_FOLDER)]
    pub images_folder: String,

    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: String,

    #[arg(long, env = "CARD_EXTENSION", default_value = DEFAULT_CARD_EXTENSION)]
    pub card_extension: String,

    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub hf_token: Option<String>,

    #[arg(long, env = "HF_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, env = "HF_INFERENCE_ENDPOINT", default_value = DEFAULT_INFERENCE_ENDPOINT)]
    pub inference_endpoint: String,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, env = "TAROT_SEED", help = "Seed for reproducible draws")]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Load settings from a TOML file instead")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cards_folder: DEFAULT_CARDS_FOLDER.to_string(),
            images_folder: DEFAULT_IMAGES_FOLDER.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            card_extension: DEFAULT_CARD_EXTENSION.to_string(),
            hf_token: None,
            model: DEFAULT_MODEL.to_string(),
            inference_endpoint: DEFAULT_INFERENCE_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            seed: None,
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

// 權杖不可出現在日誌中
impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cards_folder", &self.cards_folder)
            .field("images_folder", &self.images_folder)
            .field("static_dir", &self.static_dir)
            .field("card_extension", &self.card_extension)
            .field("hf_token", &self.hf_token.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("inference_endpoint", &self.inference_endpoint)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("seed", &self.seed)
            .field("config", &self.config)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn cards_folder(&self) -> &str {
        &self.cards_folder
    }

    fn images_folder(&self) -> &str {
        &self.images_folder
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }

    fn card_extension(&self) -> &str {
        &self.card_extension
    }

    fn hf_token(&self) -> Option<&str> {
        self.hf_token.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn inference_endpoint(&self) -> &str {
        &self.inference_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
