//! Disclosure Panel Component
//!
//! A header row that toggles a body section. The header behaves as a button:
//! it is focusable, reports `aria-expanded`, and toggles on click, Enter or
//! Space.

use dioxus::prelude::*;
use payform_core::disclosure::is_toggle_key;

/// Properties for the DisclosurePanel component
#[derive(Clone, PartialEq, Props)]
pub struct DisclosurePanelProps {
    /// Panel id, passed back through `on_toggle`
    pub id: String,
    /// Header text
    pub title: String,
    /// Whether the body is shown
    pub expanded: bool,
    /// Handler called with the panel id when the header is activated
    pub on_toggle: EventHandler<String>,
    /// Body content
    pub children: Element,
}

/// CSS classes for the header row and its chevron.
pub fn header_classes(expanded: bool) -> (&'static str, &'static str) {
    if expanded {
        ("accordion-header expanded", "accordion-chevron open")
    } else {
        ("accordion-header", "accordion-chevron")
    }
}

/// Collapsible section
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DisclosurePanel {
///         id: "why-card".to_string(),
///         title: "Why do you need my card?".to_string(),
///         expanded: accordion.read().is_expanded("why-card"),
///         on_toggle: move |id: String| { accordion.write().toggle(&id); },
///         p { "We require your card information to secure your appointment." }
///     }
/// }
/// ```
#[component]
pub fn DisclosurePanel(props: DisclosurePanelProps) -> Element {
    let (header_class, chevron_class) = header_classes(props.expanded);
    let click_id = props.id.clone();
    let key_id = props.id.clone();
    let on_toggle = props.on_toggle;

    rsx! {
        div { class: "accordion-item",
            div {
                class: "{header_class}",
                role: "button",
                tabindex: "0",
                "aria-expanded": if props.expanded { "true" } else { "false" },
                onclick: move |_| on_toggle.call(click_id.clone()),
                onkeydown: move |evt: KeyboardEvent| {
                    if is_toggle_key(&evt.key().to_string()) {
                        evt.prevent_default();
                        on_toggle.call(key_id.clone());
                    }
                },
                span { class: "payment-form-accordion-text", "{props.title}" }
                span { class: "{chevron_class}", "aria-hidden": "true", "\u{2304}" }
            }
            if props.expanded {
                div { class: "accordion-body", {props.children} }
            }
        }
    }
}
