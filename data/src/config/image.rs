use std::sync::LazyLock;

use serde::Deserialize;
use url::Url;

static PLACEHOLDER: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(
        "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=400&h=300&fit=crop",
    )
    .expect("valid placeholder url")
});

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Image shown when a card has no image or its image fails to load
    pub placeholder: Url,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

pub fn default_placeholder() -> Url {
    PLACEHOLDER.clone()
}
