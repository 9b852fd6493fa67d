//! Result list: cards, hover-linked highlighting and scroll state.
//!
//! The list never owns the hover decision; the page root applies the
//! shared hovered id and the list restyles its cards. Hover and select
//! events on a card flow upward through the page root.

pub mod card;
pub mod scroll;

pub use card::HikeCard;
pub use scroll::ScrollGuard;

use std::time::Instant;

use crate::api::types::Trail;
use crate::list::scroll::center_scroll_offset;

/// Placeholder shown when a search returns no trail.
pub const EMPTY_RESULTS_TEXT: &str = "Aucune randonnée trouvée pour cette recherche.";

/// Height of one card in the scrollable panel, in pixels.
const CARD_HEIGHT_PX: f64 = 132.0;

/// Scrollable result panel state.
#[derive(Debug)]
pub struct ResultList {
    cards: Vec<HikeCard>,
    viewport_height_px: f64,
    scroll_top: f64,
    guard: ScrollGuard,
}

impl ResultList {
    /// Create an empty list with the given panel height.
    #[must_use]
    pub const fn new(viewport_height_px: f64) -> Self {
        Self {
            cards: Vec::new(),
            viewport_height_px,
            scroll_top: 0.0,
            guard: ScrollGuard::new(),
        }
    }

    /// Cards in result order.
    #[must_use]
    pub fn cards(&self) -> &[HikeCard] {
        &self.cards
    }

    /// Current vertical scroll offset of the panel.
    #[must_use]
    pub const fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Placeholder text when the list is empty, `None` otherwise.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(EMPTY_RESULTS_TEXT)
    }

    /// Rebuild the cards wholesale from a new result set, preserving the
    /// highlight for the given hovered id.
    pub fn set_results(&mut self, trails: &[Trail], hovered_id: Option<&str>) {
        self.cards = trails.iter().map(HikeCard::from_trail).collect();
        self.scroll_top = 0.0;
        self.apply_hover(hovered_id);
    }

    /// Restyle cards for a new shared hovered id. At most one card is
    /// highlighted afterwards.
    pub fn apply_hover(&mut self, hovered_id: Option<&str>) {
        for card in &mut self.cards {
            card.highlighted = hovered_id.is_some_and(|id| id == card.id);
        }
    }

    /// Toggle description expansion for one card.
    pub fn toggle_expanded(&mut self, id: &str) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.toggle_expanded();
        }
    }

    /// Record a manual scroll of the panel.
    pub fn note_user_scroll(&mut self, now: Instant, scroll_top: f64) {
        self.guard.note_user_scroll(now);
        self.scroll_top = scroll_top;
    }

    /// Smooth-scroll the card with the given id to the vertical center of
    /// the panel. Best-effort: silently does nothing when the id is
    /// unknown or the visitor scrolled manually within the cooldown.
    pub fn scroll_to_card(&mut self, id: &str, now: Instant) {
        if self.guard.is_suppressed(now) {
            return;
        }
        let Some(index) = self.cards.iter().position(|c| c.id == id) else {
            return;
        };

        #[allow(clippy::cast_precision_loss)]
        let element_top = index as f64 * CARD_HEIGHT_PX;
        #[allow(clippy::cast_precision_loss)]
        let content_height = self.cards.len() as f64 * CARD_HEIGHT_PX;
        self.scroll_top = center_scroll_offset(
            element_top,
            CARD_HEIGHT_PX,
            self.viewport_height_px,
            content_height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn trails(n: usize) -> Vec<Trail> {
        (0..n)
            .map(|i| Trail::minimal(format!("T-{i}"), format!("Sentier {i}"), vec![[3.5, 44.1]]))
            .collect()
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut list = ResultList::new(400.0);
        list.set_results(&[], None);
        assert_eq!(list.placeholder(), Some(EMPTY_RESULTS_TEXT));
        list.set_results(&trails(1), None);
        assert!(list.placeholder().is_none());
    }

    #[test]
    fn test_hover_highlights_exactly_one_card() {
        let mut list = ResultList::new(400.0);
        list.set_results(&trails(5), Some("T-3"));
        let highlighted: Vec<_> = list.cards().iter().filter(|c| c.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].id, "T-3");

        list.apply_hover(None);
        assert!(list.cards().iter().all(|c| !c.highlighted));

        list.apply_hover(Some("T-999"));
        assert!(list.cards().iter().all(|c| !c.highlighted));
    }

    #[test]
    fn test_scroll_to_card_centers_it() {
        let mut list = ResultList::new(400.0);
        list.set_results(&trails(20), None);
        list.scroll_to_card("T-10", Instant::now());
        // Element top 1320, centered in a 400px viewport.
        assert!((list.scroll_top() - 1186.0).abs() < 1.0);
    }

    #[test]
    fn test_scroll_to_unknown_card_is_silent() {
        let mut list = ResultList::new(400.0);
        list.set_results(&trails(3), None);
        list.scroll_to_card("T-404", Instant::now());
        assert_eq!(list.scroll_top(), 0.0);
    }

    #[test]
    fn test_manual_scroll_suppresses_programmatic_scroll() {
        let mut list = ResultList::new(400.0);
        list.set_results(&trails(20), None);
        let start = Instant::now();
        list.note_user_scroll(start, 600.0);

        list.scroll_to_card("T-10", start + Duration::from_millis(200));
        assert_eq!(list.scroll_top(), 600.0);

        list.scroll_to_card("T-10", start + Duration::from_millis(1500));
        assert!((list.scroll_top() - 1186.0).abs() < 1.0);
    }

    #[test]
    fn test_new_results_replace_cards_wholesale() {
        let mut list = ResultList::new(400.0);
        list.set_results(&trails(5), None);
        list.set_results(&trails(2), None);
        assert_eq!(list.cards().len(), 2);
        assert_eq!(list.scroll_top(), 0.0);
    }
}
