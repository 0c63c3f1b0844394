use dioxus::prelude::*;
use journey_core::{catalog, Route, Theme};

use crate::context::{use_app_state, use_route};
use crate::theme::{spacing, AppColors};
use crate::view;
use crate::widgets::{ThemeCard, ThemeModal};

#[component]
pub fn GalleryScreen() -> Element {
    let mut app = use_app_state();
    let mut route = use_route();
    let mut detail = use_signal(|| None::<Theme>);

    let (is_dark, can_continue, count) = {
        let state = app.read();
        (
            state.dark_mode(),
            view::continue_enabled(state.selection()),
            state.selection().len(),
        )
    };
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let muted = AppColors::muted(is_dark);
    let (button_opacity, button_cursor) = if can_continue {
        ("1", "pointer")
    } else {
        ("0.5", "not-allowed")
    };

    rsx! {
        div { style: "max-width: {spacing::CONTENT_MAX_WIDTH}; width: 100%; margin: 0 auto; padding: {spacing::SCREEN_PADDING}; box-sizing: border-box;",
            section { style: "text-align: center; margin-bottom: {spacing::XL};",
                h1 { style: "font-family: Georgia, serif; font-size: 2.4rem; margin: 0 0 {spacing::MD};",
                    "Your Menopause Wellness Journey"
                }
                p { style: "color: {muted}; max-width: 640px; margin: 0 auto; line-height: 1.6;",
                    "Choose the themes that matter most to you. Select as many as you like, then continue to tell us a little about yourself."
                }
            }
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: {spacing::LG};",
                for theme in catalog::themes().iter().copied() {
                    ThemeCard {
                        key: "{theme.id}",
                        is_dark,
                        theme,
                        is_selected: app.read().is_selected(theme.id),
                        on_toggle: move |id: String| app.write().toggle(&id),
                        on_read_more: move |t: Theme| detail.set(Some(t)),
                    }
                }
            }
            div { style: "display: flex; flex-direction: column; align-items: center; gap: {spacing::SM}; margin-top: {spacing::XL};",
                button {
                    disabled: !can_continue,
                    onclick: move |_| {
                        if view::continue_enabled(app.read().selection()) {
                            route.set(Route::Form);
                        }
                    },
                    style: "padding: 14px 32px; border-radius: 999px; border: none; font-size: 1rem; background: {primary}; color: {on_primary}; opacity: {button_opacity}; cursor: {button_cursor};",
                    "Continue"
                }
                if count > 0 {
                    span { style: "color: {muted}; font-size: 0.85rem;", "{count} selected" }
                }
            }
        }
        if let Some(theme) = detail() {
            ThemeModal { is_dark, theme, on_close: move |_| detail.set(None) }
        }
    }
}
