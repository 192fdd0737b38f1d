use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TarotError};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TarotError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 卡牌資料夾必須在啟動時存在
pub fn validate_cards_folder(path: &str) -> Result<()> {
    validate_path("cards_folder", path)?;

    if !Path::new(path).is_dir() {
        return Err(TarotError::ConfigError {
            message: format!("Cards folder '{}' does not exist", path),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Startup checks shared by every configuration source. Runs once before the
/// server binds; requests never re-validate.
pub fn validate_provider(config: &dyn ConfigProvider) -> Result<()> {
    match config.hf_token() {
        Some(token) if !token.trim().is_empty() => {}
        _ => {
            return Err(TarotError::MissingConfigError {
                field: "HF_TOKEN".to_string(),
            })
        }
    }

    validate_cards_folder(config.cards_folder())?;
    validate_path("images_folder", config.images_folder())?;
    validate_path("static_dir", config.static_dir())?;
    validate_non_empty_string(
        "card_extension",
        config.card_extension().trim_start_matches('.'),
    )?;

    validate_non_empty_string("model", config.model())?;
    validate_url("inference_endpoint", config.inference_endpoint())?;

    validate_range("port", config.port(), 1, u16::MAX)?;
    validate_range(
        "request_timeout_secs",
        config.request_timeout().as_secs(),
        1,
        300,
    )?;

    tracing::debug!("Configuration validation passed");
    Ok(())
}
