use crate::adapters::http::{DEFAULT_INFERENCE_ENDPOINT, DEFAULT_MODEL};
use crate::config::{
    DEFAULT_CARDS_FOLDER, DEFAULT_HOST, DEFAULT_IMAGES_FOLDER, DEFAULT_PORT, DEFAULT_STATIC_DIR,
    DEFAULT_TIMEOUT_SECS,
};
use crate::core::card_repository::DEFAULT_CARD_EXTENSION;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TarotError};
use crate::utils::validation::{validate_provider, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cards: CardsConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardsConfig {
    pub cards_folder: Option<String>,
    pub images_folder: Option<String>,
    pub card_extension: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    pub hf_token: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TarotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TarotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HF_TOKEN})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TarotError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    fn cards_folder(&self) -> &str {
        self.cards
            .cards_folder
            .as_deref()
            .unwrap_or(DEFAULT_CARDS_FOLDER)
    }

    fn images_folder(&self) -> &str {
        self.cards
            .images_folder
            .as_deref()
            .unwrap_or(DEFAULT_IMAGES_FOLDER)
    }

    fn static_dir(&self) -> &str {
        self.server.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)
    }

    fn card_extension(&self) -> &str {
        self.cards
            .card_extension
            .as_deref()
            .unwrap_or(DEFAULT_CARD_EXTENSION)
    }

    fn hf_token(&self) -> Option<&str> {
        // 未被替換的 ${VAR} 視為未設定
        self.oracle
            .hf_token
            .as_deref()
            .filter(|token| !token.starts_with("${"))
    }

    fn model(&self) -> &str {
        self.oracle.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    fn inference_endpoint(&self) -> &str {
        self.oracle
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_INFERENCE_ENDPOINT)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.oracle.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    fn seed(&self) -> Option<u64> {
        self.cards.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080
static_dir = "public"

[cards]
cards_folder = "public/cards"
images_folder = "public/images"
card_extension = "png"
seed = 42

[oracle]
hf_token = "hf_abc"
model = "mistralai/Mistral-7B-Instruct-v0.3"
endpoint = "https://inference.example.com/v1/chat/completions"
timeout_seconds = 10
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.static_dir(), "public");
        assert_eq!(config.cards_folder(), "public/cards");
        assert_eq!(config.images_folder(), "public/images");
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.card_extension(), "png");
        assert_eq!(config.hf_token(), Some("hf_abc"));
        assert_eq!(config.model(), "mistralai/Mistral-7B-Instruct-v0.3");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_defaults_for_missing_tables() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.cards_folder(), "static/cards");
        assert_eq!(config.card_extension(), "jpg");
        assert_eq!(config.model(), "HuggingFaceH4/zephyr-7b-alpha");
        assert_eq!(config.hf_token(), None);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TAROT_TEST_TOKEN", "hf_from_env");

        let toml_content = r#"
[oracle]
hf_token = "${TAROT_TEST_TOKEN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.hf_token(), Some("hf_from_env"));

        std::env::remove_var("TAROT_TEST_TOKEN");
    }

    #[test]
    fn test_unresolved_placeholder_counts_as_missing() {
        let toml_content = r#"
[oracle]
hf_token = "${TAROT_TEST_TOKEN_NEVER_SET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.hf_token(), None);
        assert!(matches!(
            config.validate(),
            Err(TarotError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, TarotError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let cards = TempDir::new().unwrap();
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = format!(
            r#"
[cards]
cards_folder = "{}"

[oracle]
hf_token = "hf_file"
"#,
            cards.path().to_str().unwrap().replace('\\', "/")
        );
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.hf_token(), Some("hf_file"));
        assert!(config.validate().is_ok());
    }
}
