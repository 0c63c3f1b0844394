use dioxus::prelude::*;
use chrono::Datelike;

use crate::context::use_app_state;
use crate::theme::{spacing, AppColors};
use crate::view;

/// Page frame: language and dark-mode toggles on top, footer below.
#[component]
pub fn Layout(children: Element) -> Element {
    let mut app = use_app_state();
    let (language, is_dark) = {
        let state = app.read();
        (state.language(), state.dark_mode())
    };
    let background = AppColors::background(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let badge = view::language_badge(language);
    let footer = view::footer_text(chrono::Local::now().year());
    let scheme_icon = if is_dark { "☀" } else { "☾" };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; background: {background}; color: {on_surface}; font-family: system-ui, sans-serif;",
            header {
                style: "display: flex; justify-content: flex-end; gap: {spacing::SM}; padding: {spacing::MD} {spacing::LG};",
                button {
                    onclick: move |_| {
                        let next = language.toggled();
                        app.write().set_language(next);
                    },
                    title: "Switch language",
                    style: "padding: 6px 14px; border-radius: 999px; border: 1px solid {muted}; background: transparent; color: {muted}; cursor: pointer;",
                    "🌐 {badge}"
                }
                button {
                    onclick: move |_| app.write().toggle_dark_mode(),
                    title: "Toggle dark mode",
                    style: "padding: 6px 14px; border-radius: 999px; border: 1px solid {muted}; background: transparent; color: {muted}; cursor: pointer;",
                    "{scheme_icon}"
                }
            }
            main { style: "flex: 1; display: flex; flex-direction: column;",
                {children}
            }
            footer { style: "padding: {spacing::XL} 0; text-align: center; font-size: 0.85rem; color: {muted};",
                "{footer}"
            }
        }
    }
}
