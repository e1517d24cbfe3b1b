//! Card flip presenter.
//!
//! The card shows its back while the CVV input has focus and its front
//! otherwise. Transitions are immediate; the animation lives in CSS.

use crate::field::Field;

/// Which side of the card is visible.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    /// Returns the CSS class for the card container
    pub fn class(&self) -> &'static str {
        match self {
            CardFace::Front => "credit-card",
            CardFace::Back => "credit-card flipped",
        }
    }
}

/// Focus change on one of the form inputs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusEvent {
    Focus(Field),
    Blur(Field),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CardFlip {
    face: CardFace,
}

impl CardFlip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == CardFace::Back
    }

    /// Apply a focus event. Only the CVV field moves the card.
    pub fn handle(&mut self, event: FocusEvent) -> CardFace {
        let next = match event {
            FocusEvent::Focus(Field::Cvv) => CardFace::Back,
            FocusEvent::Blur(Field::Cvv) => CardFace::Front,
            _ => self.face,
        };
        if next != self.face {
            tracing::trace!(?next, "card flipped");
            self.face = next;
        }
        self.face
    }
}
