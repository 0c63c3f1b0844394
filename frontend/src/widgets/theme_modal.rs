use dioxus::prelude::*;
use journey_core::{rich_text, Theme};

use crate::theme::{spacing, AppColors};

/// Read-only detail view of one theme.
#[component]
pub fn ThemeModal(is_dark: bool, theme: Theme, on_close: EventHandler<()>) -> Element {
    let surface = AppColors::surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let muted = AppColors::muted(is_dark);
    let body = rich_text::to_html(theme.full);

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.55); display: flex; align-items: center; justify-content: center; z-index: 50;",
            onclick: move |_| on_close.call(()),
            div {
                style: "background: {surface}; max-width: 680px; width: calc(100% - 32px); max-height: 90vh; overflow: auto; border-radius: 18px;",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { style: "position: relative;",
                    img {
                        src: "{theme.image_large}",
                        alt: "",
                        style: "width: 100%; height: 240px; object-fit: cover; display: block;",
                    }
                    button {
                        onclick: move |_| on_close.call(()),
                        title: "Close",
                        style: "position: absolute; top: 12px; right: 12px; border-radius: 50%; border: none; width: 36px; height: 36px; background: rgba(0,0,0,0.35); color: white; cursor: pointer;",
                        "✕"
                    }
                    h2 {
                        style: "position: absolute; left: 0; right: 0; bottom: 0; margin: 0; padding: {spacing::LG}; color: white; font-family: Georgia, serif; background: linear-gradient(to top, rgba(0,0,0,0.6), transparent);",
                        "{theme.title}"
                    }
                }
                div { style: "padding: {spacing::LG};",
                    p { style: "color: {primary}; font-size: 1.1rem; font-weight: 500;", "{theme.short}" }
                    div { style: "color: {muted}; line-height: 1.6;", dangerous_inner_html: "{body}" }
                }
            }
        }
    }
}
