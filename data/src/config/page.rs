use serde::Deserialize;

pub const DEFAULT_CONTAINER_ID: &str = "cards-container";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Page {
    /// `id` of the element the cards are rendered into
    pub container_id: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}
