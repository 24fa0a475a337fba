//! Rendering of cards into anything that can hold fragments.
use url::Url;

use crate::card::Card;
use crate::fragment::Fragment;

pub trait View {
    /// Removes everything currently shown.
    fn clear(&mut self);

    fn append(&mut self, fragment: Fragment);
}

impl View for Vec<Fragment> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, fragment: Fragment) {
        self.push(fragment);
    }
}

/// Replaces the contents of `view` with one fragment per card, in order.
pub fn render<V: View + ?Sized>(
    view: &mut V,
    cards: &[Card],
    placeholder: &Url,
) {
    view.clear();

    for card in cards {
        view.append(Fragment::new(card, placeholder));
    }

    log::debug!("rendered {} cards", cards.len());
}
