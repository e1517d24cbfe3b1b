//! The three inputs of the payment form.

use std::fmt;

/// One of the payment form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    CardNumber,
    Expiration,
    Cvv,
}

impl Field {
    /// All fields in display (and validation) order.
    pub const ALL: [Field; 3] = [Field::CardNumber, Field::Expiration, Field::Cvv];

    /// DOM id and form name of the input.
    pub fn id(&self) -> &'static str {
        match self {
            Field::CardNumber => "cardNumber",
            Field::Expiration => "expiration",
            Field::Cvv => "cvv",
        }
    }

    /// Id of the paragraph carrying this field's error message.
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id())
    }

    /// Visible label text.
    pub fn label(&self) -> &'static str {
        match self {
            Field::CardNumber => "Card Number",
            Field::Expiration => "Expiration",
            Field::Cvv => "CVV/CVC",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::CardNumber => "Card Number",
            Field::Expiration => "MM/YYYY",
            Field::Cvv => "\u{2014}",
        }
    }

    /// Input boundary in characters, separators included.
    pub fn max_len(&self) -> usize {
        match self {
            Field::CardNumber => 19,
            Field::Expiration => 7,
            Field::Cvv => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
