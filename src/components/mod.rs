//! UI Components for the payment page.

mod card_details_form;
mod credit_card;
mod faq;
mod progress_steps;

pub use card_details_form::CardDetailsForm;
pub use credit_card::CreditCard;
pub use faq::FaqAccordion;
pub use progress_steps::{ProgressSteps, Step};
