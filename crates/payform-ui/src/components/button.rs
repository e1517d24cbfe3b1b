//! Button Component
//!
//! The gradient "Continue" pill that submits the form, dimmed while disabled.

use dioxus::prelude::*;

/// CSS class shared by every button
pub const BUTTON_CLASS: &str = "payment-form-button";

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         disabled: !form.read().can_submit(today),
///         "Continue"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: BUTTON_CLASS,
            r#type: "{props.button_type}",
            disabled: props.disabled,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_class_matches_stylesheet_rule() {
        assert_eq!(BUTTON_CLASS, "payment-form-button");
    }
}
