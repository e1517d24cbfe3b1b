//! Payment page - card preview on the left, details form on the right.

use dioxus::prelude::*;

use crate::components::{CardDetailsForm, CreditCard, FaqAccordion, ProgressSteps, Step};
use crate::context::use_form_state;

#[component]
pub fn Payment() -> Element {
    let flip = use_form_state().flip;
    let face = flip.read().face();

    rsx! {
        main { class: "payment-page",
            div { class: "payment-grid",
                section { class: "payment-card-column",
                    CreditCard { face }
                    div { class: "payment-caption",
                        span { class: "gradient-text", "To confirm your appointment please" }
                        span { class: "gradient-text", "provide some additional information" }
                    }
                }

                section { class: "payment-form-column",
                    h1 { class: "gradient-text payment-title", "Payment Information" }
                    CardDetailsForm {}
                    FaqAccordion {}
                }
            }

            ProgressSteps { current: Step::Payment }
        }
    }
}
