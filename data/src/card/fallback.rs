//! Sample cards shown when the card document can't be loaded.
use super::Card;

const SAMPLES: &[Sample] = &[
    Sample {
        title: "MacBook Pro",
        subtitle: "Pro Laptop",
        description: "The most powerful MacBook Pro ever, with a stunning Liquid Retina XDR display and all-day battery life.",
        image_url: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&h=300&fit=crop",
        button1_text: "Buy for $1999",
    },
    Sample {
        title: "iPhone 15",
        subtitle: "Smart Phone",
        description: "A total powerhouse with a durable titanium design and the most advanced camera system yet.",
        image_url: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400&h=300&fit=crop",
        button1_text: "Buy for $799",
    },
    Sample {
        title: "Apple Watch",
        subtitle: "Smart Watch",
        description: "Your essential companion for a healthy life, now with a brighter display and faster chip.",
        image_url: "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=400&h=300&fit=crop",
        button1_text: "Buy for $399",
    },
];

struct Sample {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    image_url: &'static str,
    button1_text: &'static str,
}

impl From<&Sample> for Card {
    fn from(sample: &Sample) -> Self {
        Card {
            title: sample.title.to_string(),
            subtitle: sample.subtitle.to_string(),
            description: sample.description.to_string(),
            image_url: Some(sample.image_url.to_string()),
            button1_text: sample.button1_text.to_string(),
        }
    }
}

pub fn cards() -> Vec<Card> {
    SAMPLES.iter().map(Card::from).collect()
}
