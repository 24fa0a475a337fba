use html_escape::{encode_double_quoted_attribute, encode_text};
use url::Url;

use crate::card::Card;

const PRIMARY_ACTION: &str = "Buy Now";
const SECONDARY_ACTION: &str = "Learn More";

const CARD_CLASS: &str = "apple-card group cursor-pointer rounded-xl overflow-hidden transition-all duration-300 hover:-translate-y-2 hover:shadow-2xl";

const HEART_PATH: &str = "M3.172 5.172a4 4 0 015.656 0L10 6.343l1.172-1.171a4 4 0 115.656 5.656L10 17.657l-6.828-6.829a4 4 0 010-5.656z";
const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";
const ARROW_PATH: &str = "M17 8l4 4m0 0l-4 4m4-4H3";
const INFO_PATH: &str = "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

/// Display values for a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub image: Image,
    pub rating: Rating,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    /// Swapped in when `src` fails to load
    pub placeholder: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub stars: usize,
    pub label: &'static str,
}

impl Rating {
    /// Every card shows the same rating.
    pub const FIXED: Rating = Rating {
        stars: 5,
        label: "4.8",
    };
}

impl Fragment {
    pub fn new(card: &Card, placeholder: &Url) -> Self {
        let src = card
            .image_url()
            .map_or_else(|| placeholder.to_string(), str::to_string);

        Self {
            title: card.title.clone(),
            subtitle: card.subtitle.clone(),
            category: card.category().to_string(),
            description: card.description.clone(),
            price: card.price().to_string(),
            image: Image {
                src,
                placeholder: placeholder.clone(),
            },
            rating: Rating::FIXED,
            primary_action: PRIMARY_ACTION,
            secondary_action: SECONDARY_ACTION,
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="{CARD_CLASS}">
{image}
    <div class="p-6">
        <div class="flex items-center justify-between mb-3">
            <h1 class="text-2xl font-bold text-gray-900 tracking-tight leading-tight">{title}</h1>
            <span class="text-sm text-gray-500 bg-gray-100 px-3 py-1 rounded-full font-medium">{category}</span>
        </div>
        <h2 class="text-lg font-semibold text-blue-600 mb-3 leading-snug">{subtitle}</h2>
        <p class="text-gray-600 mb-6 leading-relaxed font-normal">{description}</p>
{price}
{actions}
    </div>
</div>
"#,
            image = self.image_html(),
            title = encode_text(&self.title),
            category = encode_text(&self.category),
            subtitle = encode_text(&self.subtitle),
            description = encode_text(&self.description),
            price = self.price_html(),
            actions = self.actions_html(),
        )
    }

    fn image_html(&self) -> String {
        // Quotes are percent-encoded so the url can sit inside the handler's
        // single-quoted string literal
        let placeholder = self.image.placeholder.as_str().replace('\'', "%27");
        let onerror = format!("this.onerror=null;this.src='{placeholder}'");

        format!(
            r#"    <div class="relative overflow-hidden rounded-t-xl">
        <img src="{src}" alt="{alt}"
             class="w-full h-64 object-cover object-center transition-transform duration-700 group-hover:scale-110"
             onerror="{onerror}">
        <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
        <div class="absolute top-4 right-4 apple-glass rounded-full p-2 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
            <svg class="w-5 h-5 text-white" fill="currentColor" viewBox="0 0 20 20">
                <path d="{HEART_PATH}"/>
            </svg>
        </div>
    </div>"#,
            src = encode_double_quoted_attribute(&self.image.src),
            alt = encode_double_quoted_attribute(&self.title),
            onerror = encode_double_quoted_attribute(&onerror),
        )
    }

    fn price_html(&self) -> String {
        let star = format!(
            r#"
                <svg class="w-4 h-4 text-yellow-400" fill="currentColor" viewBox="0 0 20 20">
                    <path d="{STAR_PATH}"/>
                </svg>"#
        );
        let stars = star.repeat(self.rating.stars);

        format!(
            r#"        <div class="flex items-center justify-between mb-6">
            <div class="flex items-center space-x-2">
                <span class="text-2xl font-bold text-gray-900 tracking-tight">{price}</span>
                <span class="text-sm text-gray-500 font-normal">starting at</span>
            </div>
            <div class="flex items-center space-x-1">{stars}
                <span class="text-sm text-gray-500 ml-1 font-normal">{label}</span>
            </div>
        </div>"#,
            price = encode_text(&self.price),
            label = self.rating.label,
        )
    }

    fn actions_html(&self) -> String {
        format!(
            r#"        <div class="flex flex-col sm:flex-row gap-3">
            <button class="flex-1 bg-blue-600 text-white rounded-xl px-6 py-3 font-semibold text-base transition-all duration-200 hover:bg-blue-700 active:translate-y-1 transform hover:shadow-lg flex items-center justify-center space-x-2">
                <span>{primary}</span>
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{ARROW_PATH}"/>
                </svg>
            </button>
            <button class="flex-1 border-2 border-blue-600 text-blue-600 bg-white rounded-xl px-6 py-3 font-semibold text-base transition-all duration-200 hover:bg-blue-50 active:translate-y-1 transform hover:shadow-lg flex items-center justify-center space-x-2">
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{INFO_PATH}"/>
                </svg>
                <span>{secondary}</span>
            </button>
        </div>"#,
            primary = self.primary_action,
            secondary = self.secondary_action,
        )
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{Fragment, Rating};
    use crate::card::Card;
    use crate::config::image::default_placeholder;

    fn laptop() -> Card {
        Card {
            title: "MacBook Pro".to_string(),
            subtitle: "Pro Laptop".to_string(),
            description: "Mind-blowing.".to_string(),
            image_url: Some("https://example.com/mbp.jpg".to_string()),
            button1_text: "Buy for $999".to_string(),
        }
    }

    #[test]
    fn derives_category_and_price() {
        let fragment = Fragment::new(&laptop(), &default_placeholder());

        assert_eq!(fragment.category, "Pro");
        assert_eq!(fragment.price, "$999");
        assert_eq!(fragment.image.src, "https://example.com/mbp.jpg");
        assert_eq!(fragment.rating, Rating::FIXED);
    }

    #[test]
    fn rating_is_fixed_for_every_card() {
        let mut other = laptop();
        other.title = "Studio Display".to_string();
        other.button1_text = "$1599".to_string();

        let placeholder = default_placeholder();
        let first = Fragment::new(&laptop(), &placeholder);
        let second = Fragment::new(&other, &placeholder);

        assert_eq!(first.rating, second.rating);

        let html = first.to_html();
        assert_eq!(html.matches("text-yellow-400").count(), 5);
        assert!(html.contains(">4.8</span>"));
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let mut card = laptop();
        card.image_url = None;

        let placeholder = default_placeholder();
        let fragment = Fragment::new(&card, &placeholder);

        assert_eq!(fragment.image.src, placeholder.as_str());
    }

    #[test]
    fn failed_image_load_swaps_to_placeholder() {
        let placeholder: Url =
            "https://cdn.example.com/placeholder.png".parse().expect("url");
        let html = Fragment::new(&laptop(), &placeholder).to_html();

        assert!(html.contains(r#"src="https://example.com/mbp.jpg""#));
        assert!(html.contains(
            "onerror=\"this.onerror=null;this.src='https://cdn.example.com/placeholder.png'\""
        ));
    }

    #[test]
    fn renders_text_content() {
        let html = Fragment::new(&laptop(), &default_placeholder()).to_html();

        assert!(html.contains(">MacBook Pro</h1>"));
        assert!(html.contains(">Pro</span>"));
        assert!(html.contains(">Pro Laptop</h2>"));
        assert!(html.contains(">Mind-blowing.</p>"));
        assert!(html.contains(">$999</span>"));
        assert!(html.contains("<span>Buy Now</span>"));
        assert!(html.contains("<span>Learn More</span>"));
    }

    #[test]
    fn escapes_markup_in_card_text() {
        let mut card = laptop();
        card.title = "<script>alert(1)</script>".to_string();
        card.description = "Fast & \"light\"".to_string();

        let html = Fragment::new(&card, &default_placeholder()).to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;</h1>"));
        assert!(html.contains("Fast &amp; \"light\"</p>"));
    }

    #[test]
    fn markup_is_one_balanced_card_element() {
        let html = Fragment::new(&laptop(), &default_placeholder()).to_html();

        assert!(html.starts_with(r#"<div class="apple-card group"#));
        assert!(html.ends_with("</div>\n"));
        assert_eq!(
            html.matches("<div").count(),
            html.matches("</div>").count()
        );
        // heart, five stars and one icon per button
        assert_eq!(html.matches("<svg").count(), 8);
        assert_eq!(html.matches("</svg>").count(), 8);
    }
}
