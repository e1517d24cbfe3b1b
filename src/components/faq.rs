//! "Why do you need my card?" style disclosure panels below the form.

use dioxus::prelude::*;
use payform_ui::DisclosurePanel;

use crate::context::use_form_state;

/// One static question/answer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 2] = [
    FaqEntry {
        id: "why-card",
        question: "Why do you need my card?",
        answer: "We require your card information to secure your appointment. In case of late \
                 cancellation or no-show, a fee may be charged. Your card will not be charged \
                 unless you miss your appointment or cancel with less than 24 hours notice.",
    },
    FaqEntry {
        id: "future-use",
        question: "How might you use my card in the future?",
        answer: "Your card information may be used for future appointments, services, or \
                 products you request. We will always notify you before any charges are made. \
                 Your card details are securely stored and encrypted according to PCI DSS \
                 standards.",
    },
];

#[component]
pub fn FaqAccordion() -> Element {
    let mut accordion = use_form_state().accordion;

    rsx! {
        div { class: "accordion",
            for entry in FAQ_ENTRIES {
                DisclosurePanel {
                    key: "{entry.id}",
                    id: entry.id.to_string(),
                    title: entry.question.to_string(),
                    expanded: accordion.read().is_expanded(entry.id),
                    on_toggle: move |id: String| {
                        accordion.write().toggle(&id);
                    },
                    p { "{entry.answer}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_are_unique() {
        assert_ne!(FAQ_ENTRIES[0].id, FAQ_ENTRIES[1].id);
    }
}
