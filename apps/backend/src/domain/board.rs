//! Per-player play areas.

use std::collections::BTreeMap;

use crate::domain::state::PlayerId;
use crate::domain::Card;

/// One player's play area: a stack of cards plus a visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    cards: Vec<Card>,
    face_up: bool,
}

impl Slot {
    pub fn new(face_up: bool) -> Self {
        Self {
            cards: Vec::new(),
            face_up,
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Top card, visible only when the slot is face up or `force` is set.
    pub fn peek(&self, force: bool) -> Option<Card> {
        if self.face_up || force {
            self.cards.last().copied()
        } else {
            None
        }
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    slots: BTreeMap<PlayerId, Slot>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_slot(&mut self, id: PlayerId, slot: Slot) {
        self.slots.insert(id, slot);
    }

    pub fn slot(&self, id: PlayerId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    pub fn slot_mut(&mut self, id: PlayerId) -> Option<&mut Slot> {
        self.slots.get_mut(&id)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&PlayerId, &Slot)> {
        self.slots.iter()
    }

    pub fn clear(&mut self) {
        for slot in self.slots.values_mut() {
            slot.clear();
        }
    }

    /// Total cards currently on the board.
    pub fn card_count(&self) -> usize {
        self.slots.values().map(Slot::len).sum()
    }
}
