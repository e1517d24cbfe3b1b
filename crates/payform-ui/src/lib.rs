//! Payform UI Components
//!
//! Dioxus components for the payment form. They are stateless: values,
//! errors and open/closed state come in as props and changes go out through
//! event handlers, so the page owns all state in its signals.
//!
//! Styling is class based; the class names match the global stylesheet
//! shipped by the desktop app.

pub mod components;

pub use components::*;
