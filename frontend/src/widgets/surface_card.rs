use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn SurfaceCard(
    is_dark: bool,
    #[props(default)] highlighted: bool,
    children: Element,
) -> Element {
    let surface = AppColors::surface(is_dark);
    let ring = if highlighted {
        format!("0 0 0 3px {}", AppColors::primary(is_dark))
    } else {
        "0 2px 10px rgba(0,0,0,0.08)".to_string()
    };
    rsx! {
        div {
            style: "background: {surface}; border-radius: 14px; padding: {spacing::CARD_PADDING}; box-shadow: {ring};",
            {children}
        }
    }
}
