//! Payform Core Library
//!
//! Field formatting, validation and interaction state for a single-page
//! payment information form.
//!
//! ## Overview
//!
//! Everything in this crate is pure and synchronous. The desktop app owns the
//! state in Dioxus signals and forwards UI events into it:
//!
//! - **Formatters** turn raw keystrokes into display text ([`format`])
//! - **Validators** decide whether a displayed value is acceptable ([`validate`])
//! - **[`PaymentForm`]** stores values and errors, handles input and submit
//! - **[`CardFlip`]** shows the card back while the CVV field has focus
//! - **[`Accordion`]** tracks which disclosure panels are open
//!
//! ## Quick Start
//!
//! ```
//! use payform_core::{Field, PaymentForm, SubmitOutcome, YearMonth};
//!
//! let today = YearMonth::new(2026, 10).unwrap();
//! let mut form = PaymentForm::new();
//!
//! form.input(Field::CardNumber, "4111111111111111");
//! form.input(Field::Expiration, "122030");
//! form.input(Field::Cvv, "123");
//!
//! assert_eq!(form.value(Field::CardNumber), "4111 1111 1111 1111");
//! assert!(form.can_submit(today));
//! assert!(matches!(form.submit(today), SubmitOutcome::Submitted(_)));
//! ```

pub mod calendar;
pub mod disclosure;
pub mod error;
pub mod field;
pub mod flip;
pub mod form;
pub mod format;
pub mod logging;
pub mod validate;

// Re-exports
pub use calendar::YearMonth;
pub use disclosure::Accordion;
pub use error::{FieldError, PayformError, PayformResult};
pub use field::Field;
pub use flip::{CardFace, CardFlip, FocusEvent};
pub use form::{FormData, FormErrors, PaymentForm, SubmitOutcome, Submission};
pub use logging::LoggingBuilder;
