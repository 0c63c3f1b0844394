use dioxus::prelude::*;
use journey_core::Theme;

use crate::theme::{spacing, AppColors};
use crate::view;
use crate::widgets::SurfaceCard;

/// Gallery card. Clicking the card toggles selection; "Read more" opens the
/// detail view without touching the selection.
#[component]
pub fn ThemeCard(
    is_dark: bool,
    theme: Theme,
    is_selected: bool,
    on_toggle: EventHandler<String>,
    on_read_more: EventHandler<Theme>,
) -> Element {
    let primary = AppColors::primary(is_dark);
    let muted = AppColors::muted(is_dark);
    let mark_bg = if is_selected { primary } else { "transparent" };
    let label = view::select_label(is_selected);
    let id = theme.id.to_string();

    rsx! {
        div {
            style: "cursor: pointer; height: 100%;",
            onclick: move |_| on_toggle.call(id.clone()),
            SurfaceCard { is_dark, highlighted: is_selected,
                img {
                    src: "{theme.image}",
                    alt: "{theme.title}",
                    style: "width: 100%; aspect-ratio: 4 / 3; object-fit: cover; border-radius: 10px;",
                }
                h3 { style: "font-family: Georgia, serif; margin: {spacing::MD} 0 {spacing::SM};", "{theme.title}" }
                p { style: "color: {muted}; font-size: 0.9rem; line-height: 1.5;", "{theme.short}" }
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: {spacing::MD};",
                    div { style: "display: flex; align-items: center; gap: {spacing::SM};",
                        span { style: "width: 18px; height: 18px; border-radius: 50%; border: 1px solid {muted}; background: {mark_bg}; display: inline-block;" }
                        span { style: "font-size: 0.8rem; color: {muted};", "{label}" }
                    }
                    button {
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_read_more.call(theme);
                        },
                        style: "background: none; border: none; color: {primary}; cursor: pointer; font-size: 0.85rem;",
                        "ⓘ Read more"
                    }
                }
            }
        }
    }
}
