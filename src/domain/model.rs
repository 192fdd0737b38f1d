use crate::domain::meanings::meaning_for;
use serde::{Serialize, Serializer};
use std::path::Path;

/// Route the static directory is mounted under.
pub const STATIC_ROUTE: &str = "/static";

/// One drawn card. Serializes to the `{"image", "name", "meaning"}` shape the
/// landing page expects; the identifier stays server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    #[serde(skip)]
    pub identifier: String,
    #[serde(rename = "image")]
    pub image_reference: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub meaning: String,
}

impl Card {
    /// Builds a card from a file name reachable under the URL base `url_base`.
    pub fn from_file_name(url_base: &str, file_name: &str) -> Self {
        let identifier = card_identifier(file_name);
        let display_name = display_name(&identifier);
        let meaning = meaning_for(&identifier).to_string();

        Self {
            identifier,
            image_reference: image_reference(url_base, file_name),
            display_name,
            meaning,
        }
    }

    /// `"{name}: {meaning}"`, the line fed to the prompt.
    pub fn description(&self) -> String {
        format!("{}: {}", self.display_name, self.meaning)
    }
}

/// 每次請求重新建立，序列化後即丟棄
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub cards: Vec<Card>,
    #[serde(rename = "random_image", serialize_with = "empty_when_absent")]
    pub decorative_image: Option<String>,
    #[serde(rename = "prophecy")]
    pub narrative: String,
}

/// Body of a `/draw_cards` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DrawResponse {
    Reading(Reading),
    Error { error: String },
}

fn empty_when_absent<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

/// Strips the extension and normalizes separators: `The-Magician.jpg` →
/// `the_magician`.
pub fn card_identifier(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };

    stem.to_lowercase()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// `wheel_of_fortune` → `Wheel Of Fortune`.
pub fn display_name(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Locator the browser uses to fetch `file_name` under `url_base`.
pub fn image_reference(url_base: &str, file_name: &str) -> String {
    let base = url_base.trim_matches('/');
    if base.is_empty() {
        format!("/{}", file_name)
    } else {
        format!("/{}/{}", base, file_name)
    }
}

/// URL base of `folder` when `static_root` is served at [`STATIC_ROUTE`].
/// Folders outside the static root keep their own path.
pub fn public_base(folder: &str, static_root: &str) -> String {
    let folder_path = Path::new(folder);
    let relative = match folder_path.strip_prefix(static_root) {
        Ok(relative) => relative,
        Err(_) => return folder.replace('\\', "/"),
    };

    let relative = relative.to_string_lossy().replace('\\', "/");
    let relative = relative.trim_matches('/');
    if relative.is_empty() {
        STATIC_ROUTE.to_string()
    } else {
        format!("{}/{}", STATIC_ROUTE, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("the_magician"), "The Magician");
        assert_eq!(display_name("wheel_of_fortune"), "Wheel Of Fortune");
        assert_eq!(display_name("death"), "Death");
        assert_eq!(display_name("the__fool_"), "The Fool");
    }

    #[test]
    fn test_card_identifier_normalizes_file_name() {
        assert_eq!(card_identifier("the_magician.jpg"), "the_magician");
        assert_eq!(card_identifier("Wheel-Of Fortune.jpg"), "wheel_of_fortune");
        assert_eq!(card_identifier("justice"), "justice");
    }

    #[test]
    fn test_card_from_file_name() {
        let card = Card::from_file_name("static/cards", "the_magician.jpg");

        assert_eq!(card.identifier, "the_magician");
        assert_eq!(card.display_name, "The Magician");
        assert_eq!(
            card.meaning,
            "Creator, leader, initiative, fulfillment of hopes, great potential."
        );
        assert_eq!(card.image_reference, "/static/cards/the_magician.jpg");
        assert_eq!(
            card.description(),
            "The Magician: Creator, leader, initiative, fulfillment of hopes, great potential."
        );
    }

    #[test]
    fn test_unknown_card_meaning() {
        let card = Card::from_file_name("/test/cards/", "unknown_card.jpg");
        assert_eq!(card.display_name, "Unknown Card");
        assert_eq!(card.meaning, "Unknown meaning");
        assert_eq!(card.image_reference, "/test/cards/unknown_card.jpg");
    }

    #[test]
    fn test_public_base_maps_static_root() {
        assert_eq!(public_base("static/cards", "static"), "/static/cards");
        assert_eq!(public_base("public/cards", "public"), "/static/cards");
        assert_eq!(public_base("public/art/deck", "public/"), "/static/art/deck");
        assert_eq!(public_base("/srv/www/cards", "/srv/www"), "/static/cards");
        assert_eq!(public_base("public", "public"), "/static");
    }

    #[test]
    fn test_public_base_outside_static_root() {
        assert_eq!(public_base("deck", "public"), "deck");
        assert_eq!(public_base("publicity/cards", "public"), "publicity/cards");
    }

    #[test]
    fn test_card_reference_follows_public_base() {
        let card = Card::from_file_name(&public_base("public/cards", "public"), "the_fool.jpg");
        assert_eq!(card.image_reference, "/static/cards/the_fool.jpg");
    }

    #[test]
    fn test_reading_serialization() {
        let reading = Reading {
            cards: vec![Card::from_file_name("static/cards", "the_empress.jpg")],
            decorative_image: None,
            narrative: "A quiet year.".to_string(),
        };

        let json = serde_json::to_value(DrawResponse::Reading(reading)).unwrap();
        assert_eq!(json["random_image"], "");
        assert_eq!(json["prophecy"], "A quiet year.");
        assert_eq!(json["cards"][0]["name"], "The Empress");
        assert_eq!(json["cards"][0]["image"], "/static/cards/the_empress.jpg");
        assert!(json["cards"][0].get("identifier").is_none());

        let error = serde_json::to_value(DrawResponse::Error {
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(error, serde_json::json!({"error": "boom"}));
    }
}
