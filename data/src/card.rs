use serde::{Deserialize, Serialize};

pub mod fallback;

/// A product card as it appears in the `cards` array of the input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub button1_text: String,
}

impl Card {
    /// Category tag, the first word of the subtitle.
    pub fn category(&self) -> &str {
        self.subtitle.split_whitespace().next().unwrap_or_default()
    }

    /// Price label, the last word of the primary button text.
    pub fn price(&self) -> &str {
        self.button1_text
            .split_whitespace()
            .next_back()
            .unwrap_or_default()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::Card;

    fn card(subtitle: &str, button1_text: &str) -> Card {
        Card {
            title: "MacBook Pro".to_string(),
            subtitle: subtitle.to_string(),
            description: "Mind-blowing. Head-turning.".to_string(),
            image_url: None,
            button1_text: button1_text.to_string(),
        }
    }

    #[test]
    fn category_is_first_word_of_subtitle() {
        assert_eq!(card("Pro Laptop", "Buy for $999").category(), "Pro");
        assert_eq!(card("  Studio   Display ", "").category(), "Studio");
        assert_eq!(card("Watch", "").category(), "Watch");
    }

    #[test]
    fn price_is_last_word_of_button_text() {
        assert_eq!(card("Pro Laptop", "Buy for $999").price(), "$999");
        assert_eq!(card("", "$1,299 ").price(), "$1,299");
    }

    #[test]
    fn empty_text_yields_empty_derived_values() {
        let card = card("   ", "");

        assert_eq!(card.category(), "");
        assert_eq!(card.price(), "");
    }

    #[test]
    fn blank_image_url_is_treated_as_missing() {
        let mut card = card("Pro Laptop", "Buy for $999");
        assert_eq!(card.image_url(), None);

        card.image_url = Some("  ".to_string());
        assert_eq!(card.image_url(), None);

        card.image_url = Some("https://example.com/a.jpg".to_string());
        assert_eq!(card.image_url(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "title": "iPhone 15",
            "subtitle": "New Phone",
            "description": "Titanium.",
            "imageUrl": "https://example.com/phone.jpg",
            "button1Text": "Buy from $799",
            "button2Text": "Learn More"
        }"#;

        let card: Card = serde_json::from_str(json).expect("valid card");

        assert_eq!(card.title, "iPhone 15");
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://example.com/phone.jpg")
        );
        assert_eq!(card.price(), "$799");
    }

    #[test]
    fn image_url_is_optional() {
        let json = r#"{
            "title": "AirPods",
            "subtitle": "Audio Gear",
            "description": "Magic.",
            "button1Text": "Buy for $179"
        }"#;

        let card: Card = serde_json::from_str(json).expect("valid card");

        assert!(card.image_url.is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{ "title": "AirPods", "subtitle": "Audio Gear" }"#;

        assert!(serde_json::from_str::<Card>(json).is_err());
    }
}
