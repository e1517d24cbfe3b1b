//! Form state context for the payment page.
//!
//! All interactive state lives in three signals created once by the root
//! component and shared with every child via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_form_state();
//!
//! // In child components
//! let state = use_form_state();
//! let enabled = state.form.read().can_submit(reference_month());
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;
use payform_core::{Accordion, CardFlip, PaymentForm, YearMonth};

/// Fixed "current month" for expiry checks, set once from the command line
static AS_OF: OnceLock<YearMonth> = OnceLock::new();

/// Signals backing the payment page.
#[derive(Clone, Copy, PartialEq)]
pub struct FormState {
    /// Field values and submit errors
    pub form: Signal<PaymentForm>,
    /// Card face, driven by CVV focus
    pub flip: Signal<CardFlip>,
    /// Open disclosure panels
    pub accordion: Signal<Accordion>,
}

/// Create the form signals and provide them to all children.
pub fn provide_form_state() -> FormState {
    let state = FormState {
        form: use_signal(PaymentForm::new),
        flip: use_signal(CardFlip::new),
        accordion: use_signal(Accordion::new),
    };
    use_context_provider(|| state)
}

/// Hook to access the form state from context.
pub fn use_form_state() -> FormState {
    use_context::<FormState>()
}

/// Pin the month expiration dates are compared against.
///
/// Only the first call takes effect; later calls hand the rejected month back.
pub fn set_reference_month(month: YearMonth) -> Result<(), YearMonth> {
    AS_OF.set(month)
}

/// Month that expiration dates are compared against (fixed or local clock).
pub fn reference_month() -> YearMonth {
    AS_OF.get().copied().unwrap_or_else(YearMonth::current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_month_is_pinned_once() {
        let pinned = YearMonth::new(2027, 3).unwrap();
        let other = YearMonth::new(2030, 1).unwrap();

        assert_eq!(set_reference_month(pinned), Ok(()));
        assert_eq!(reference_month(), pinned);

        assert_eq!(set_reference_month(other), Err(other));
        assert_eq!(reference_month(), pinned);
    }
}
