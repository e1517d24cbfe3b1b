//! Reusable form components
//!
//! - [`Button`]: submit and secondary actions
//! - [`TextField`]: labelled input with inline error message
//! - [`DisclosurePanel`]: collapsible section with a keyboard-operable header

mod button;
mod disclosure_panel;
mod text_field;

pub use button::*;
pub use disclosure_panel::*;
pub use text_field::*;
