//! Credit card visual with a 3D flip.
//!
//! Both faces are always rendered; the container class rotates the card so
//! the back face shows while the CVV field has focus.

use dioxus::prelude::*;
use payform_core::CardFace;

/// Card artwork, 195x128 logical pixels.
#[component]
pub fn CreditCard(face: CardFace) -> Element {
    let class = face.class();

    rsx! {
        div { class: "card-perspective",
            div {
                class: "{class}",
                "aria-label": if face == CardFace::Back { "Card back" } else { "Card front" },

                // Front: chip, placeholder number and brand mark
                div { class: "card-face card-front",
                    div { class: "card-chip" }
                    div { class: "card-number-preview", "\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022}" }
                    div { class: "card-brand", "VISA" }
                }

                // Back: stripe, signature strip with CVV slot, hint text
                div { class: "card-face card-back",
                    div { class: "card-stripe" }
                    div { class: "card-signature",
                        span { class: "card-cvv-label", "CVV" }
                    }
                    p { class: "card-back-hint",
                        "The 3 or 4 digit security code on the back of your card"
                    }
                }
            }
        }
    }
}
