//! Text Field Component
//!
//! Labelled input for one payment [`Field`], with the field's validation
//! message rendered beneath it. The input is marked `aria-invalid` and
//! points at the message while an error is shown.

use dioxus::prelude::*;
use payform_core::Field;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Which payment field this input edits (id, label, placeholder, length)
    pub field: Field,
    /// Current display value
    pub value: String,
    /// Message shown beneath the input, if invalid
    #[props(default)]
    pub error: Option<String>,
    /// Handler called with the raw input text on every change
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
}

/// CSS class for the input element.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "payment-form-input payment-form-input-error"
    } else {
        "payment-form-input"
    }
}

/// Labelled payment input with inline error
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         field: Field::Cvv,
///         value: form.read().value(Field::Cvv).to_string(),
///         error: form.read().error(Field::Cvv).map(|e| e.to_string()),
///         oninput: move |raw: String| { form.write().input(Field::Cvv, &raw); },
///         onfocus: move |_| flip.write().handle(FocusEvent::Focus(Field::Cvv)),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let field = props.field;
    let id = field.id();
    let error_id = field.error_id();
    let has_error = props.error.is_some();
    let class = input_class(has_error);
    let described_by = has_error.then(|| error_id.clone());
    let label_text = field.label();
    let max_len = field.max_len();

    rsx! {
        div { class: "form-field",
            label {
                class: "payment-form-label",
                r#for: "{id}",
                "{label_text}"
            }
            input {
                id: "{id}",
                name: "{id}",
                class: "{class}",
                r#type: "text",
                autocomplete: "off",
                value: "{props.value}",
                placeholder: field.placeholder(),
                maxlength: "{max_len}",
                "aria-invalid": if has_error { "true" } else { "false" },
                "aria-describedby": described_by,
                oninput: move |e| props.oninput.call(e.value()),
                onfocus: move |_| {
                    if let Some(handler) = &props.onfocus {
                        handler.call(());
                    }
                },
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(message) = &props.error {
                p { id: "{error_id}", class: "field-error", "{message}" }
            }
        }
    }
}
