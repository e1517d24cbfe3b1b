//! Card details form.
//!
//! Card number on its own row, expiration and CVV side by side, and the
//! "Continue" button. Every keystroke goes through the form controller so the
//! inputs always show formatted text; the button stays disabled until all
//! three fields validate.

use dioxus::prelude::*;
use payform_core::{Field, FocusEvent};
use payform_ui::{Button, TextField};

use crate::context::{reference_month, use_form_state};

/// Props-free: reads and writes the shared form state.
#[component]
pub fn CardDetailsForm() -> Element {
    let state = use_form_state();
    let mut form = state.form;
    let mut flip = state.flip;

    let can_submit = form.read().can_submit(reference_month());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        form.write().submit(reference_month());
    };

    let data = form.read().data().clone();
    let errors = *form.read().errors();
    let error = |field: Field| errors.get(field).map(|e| e.to_string());

    rsx! {
        form { class: "payment-form", onsubmit: on_submit,
            TextField {
                field: Field::CardNumber,
                value: data.card_number.clone(),
                error: error(Field::CardNumber),
                oninput: move |raw: String| {
                    form.write().input(Field::CardNumber, &raw);
                },
            }

            div { class: "form-row",
                TextField {
                    field: Field::Expiration,
                    value: data.expiration.clone(),
                    error: error(Field::Expiration),
                    oninput: move |raw: String| {
                        form.write().input(Field::Expiration, &raw);
                    },
                }
                TextField {
                    field: Field::Cvv,
                    value: data.cvv.clone(),
                    error: error(Field::Cvv),
                    oninput: move |raw: String| {
                        form.write().input(Field::Cvv, &raw);
                    },
                    onfocus: move |_| {
                        flip.write().handle(FocusEvent::Focus(Field::Cvv));
                    },
                    onblur: move |_| {
                        flip.write().handle(FocusEvent::Blur(Field::Cvv));
                    },
                }
            }

            div { class: "form-actions",
                Button {
                    button_type: "submit".to_string(),
                    disabled: !can_submit,
                    "Continue"
                }
            }
        }
    }
}
