use dioxus::prelude::*;

use crate::theme::AppColors;

/// Inline validation message under a field.
#[component]
pub fn FieldMessage(is_dark: bool, #[props(!optional)] message: Option<String>) -> Element {
    let color = AppColors::error(is_dark);
    match message {
        Some(text) => rsx! {
            p { style: "color: {color}; font-size: 0.8rem; margin: 4px 0 0;", "{text}" }
        },
        None => VNode::empty(),
    }
}
