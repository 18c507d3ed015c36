//! Deck, hand and discard zones of one participant.
//!
//! A card instance is in exactly one zone at a time and the total across all
//! three never changes; cards only move between zones.

use crate::card::{Card, CardId};
use crate::env::{RngOracle, shuffle};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Draw pile; the last element is the top.
    draw_pile: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
}

impl Deck {
    /// Creates a deck with every card in the draw pile.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards,
            hand: Vec::new(),
            discard: Vec::new(),
        }
    }

    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Cards across all three zones.
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard.len()
    }

    pub fn hand_card(&self, id: &CardId) -> Option<&Card> {
        self.hand.iter().find(|card| &card.id == id)
    }

    /// Shuffles the draw pile in place.
    pub fn shuffle_draw_pile(&mut self, rng: &(impl RngOracle + ?Sized), seed: u64) {
        shuffle(rng, seed, &mut self.draw_pile);
    }

    /// Moves up to `count` cards from the top of the draw pile into the hand.
    /// Returns how many were drawn.
    pub fn draw(&mut self, count: usize) -> usize {
        let take = count.min(self.draw_pile.len());
        let split = self.draw_pile.len() - take;
        let drawn = self.draw_pile.split_off(split);
        // Top card first.
        self.hand.extend(drawn.into_iter().rev());
        take
    }

    /// Moves the first hand card with `id` to the discard pile.
    pub fn play(&mut self, id: &CardId) -> Option<&Card> {
        let index = self.hand.iter().position(|card| &card.id == id)?;
        let card = self.hand.remove(index);
        self.discard.push(card);
        self.discard.last()
    }

    /// Moves the whole hand to the discard pile.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        self.discard.append(&mut self.hand);
        count
    }

    /// Draws until the hand holds `hand_size` cards, reshuffling the discard
    /// pile into the draw pile once when it runs dry. Returns cards drawn.
    pub fn refill_hand(
        &mut self,
        hand_size: usize,
        rng: &(impl RngOracle + ?Sized),
        seed: u64,
    ) -> usize {
        let wanted = hand_size.saturating_sub(self.hand.len());
        let mut drawn = self.draw(wanted);
        if drawn < wanted && !self.discard.is_empty() {
            self.draw_pile.append(&mut self.discard);
            self.shuffle_draw_pile(rng, seed);
            drawn += self.draw(wanted - drawn);
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardFactory, ScalingRules};
    use crate::config::CombatConfig;
    use crate::env::PcgRng;
    use crate::rank::MoveDirection;

    fn deck_of(size: usize) -> Deck {
        let factory = CardFactory::new(ScalingRules::default(), &CombatConfig::default());
        let cards = (0..size)
            .map(|i| {
                let mut card = factory.synthesize_move(MoveDirection::Advance);
                card.id = CardId::new(format!("card-{i}"));
                card
            })
            .collect();
        Deck::new(cards)
    }

    #[test]
    fn draw_takes_from_top() {
        let mut deck = deck_of(4);
        assert_eq!(deck.draw(2), 2);
        let ids: Vec<_> = deck.hand().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["card-3", "card-2"]);
        assert_eq!(deck.draw(10), 2);
        assert_eq!(deck.draw(1), 0);
    }

    #[test]
    fn play_moves_hand_to_discard() {
        let mut deck = deck_of(3);
        deck.draw(3);
        let played = deck.play(&CardId::new("card-1")).map(|c| c.id.clone());
        assert_eq!(played, Some(CardId::new("card-1")));
        assert_eq!(deck.hand().len(), 2);
        assert_eq!(deck.discard_pile().len(), 1);
        assert!(deck.play(&CardId::new("card-1")).is_none());
    }

    #[test]
    fn total_is_conserved() {
        let rng = PcgRng;
        let mut deck = deck_of(7);
        deck.shuffle_draw_pile(&rng, 11);
        for round in 0..20u64 {
            deck.refill_hand(3, &rng, round);
            assert_eq!(deck.total(), 7);
            if let Some(id) = deck.hand().first().map(|c| c.id.clone()) {
                deck.play(&id);
            }
            assert_eq!(deck.total(), 7);
            if round % 3 == 0 {
                deck.discard_hand();
            }
            assert_eq!(deck.total(), 7);
        }
    }

    #[test]
    fn refill_recycles_discard() {
        let rng = PcgRng;
        let mut deck = deck_of(4);
        deck.draw(4);
        deck.discard_hand();
        assert_eq!(deck.refill_hand(3, &rng, 1), 3);
        assert_eq!(deck.hand().len(), 3);
        assert_eq!(deck.draw_pile().len(), 1);
        assert!(deck.discard_pile().is_empty());
    }
}
