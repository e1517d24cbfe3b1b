//! Booking progress indicator pinned to the bottom of the page.

use dioxus::prelude::*;

/// Steps of the booking flow
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Appointment,
    Payment,
    Confirmation,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Appointment, Step::Payment, Step::Confirmation];

    /// Caption under the dot; the final step has none
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Step::Appointment => Some("Appointment"),
            Step::Payment => Some("Payment"),
            Step::Confirmation => None,
        }
    }

    pub fn class(&self, current: Step) -> String {
        let name = match self {
            Step::Appointment => "appointment",
            Step::Payment => "payment",
            Step::Confirmation => "confirmation",
        };
        if *self == current {
            format!("progress-circle progress-circle-{} current", name)
        } else {
            format!("progress-circle progress-circle-{}", name)
        }
    }
}

#[component]
pub fn ProgressSteps(current: Step) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-line" }
            div { class: "progress-steps",
                for step in Step::ALL {
                    div { class: "progress-step",
                        div { class: step.class(current) }
                        if let Some(label) = step.label() {
                            span { class: "progress-text", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
