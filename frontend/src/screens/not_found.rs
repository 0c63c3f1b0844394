use dioxus::prelude::*;
use journey_core::Route;

use crate::context::{use_app_state, use_route};
use crate::theme::{spacing, AppColors};

#[component]
pub fn NotFoundScreen() -> Element {
    let app = use_app_state();
    let mut route = use_route();
    let is_dark = app.read().dark_mode();
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let muted = AppColors::muted(is_dark);

    rsx! {
        div { style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: {spacing::MD}; padding: {spacing::SCREEN_PADDING};",
            h1 { style: "font-size: 3rem; margin: 0;", "404" }
            p { style: "color: {muted};", "Oops! Page not found" }
            button {
                onclick: move |_| route.set(Route::Gallery),
                style: "padding: 10px 20px; border-radius: 999px; border: none; background: {primary}; color: {on_primary}; cursor: pointer;",
                "Return to Home"
            }
        }
    }
}
