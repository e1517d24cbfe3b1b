use dioxus::prelude::*;

use crate::context::provide_form_state;
use crate::pages::Payment;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the form state context.
#[component]
pub fn App() -> Element {
    provide_form_state();

    rsx! {
        style { {GLOBAL_STYLES} }
        Payment {}
    }
}
