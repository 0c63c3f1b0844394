use dioxus::prelude::*;
use journey_core::validation::Field;
use journey_core::{ContactMethod, Direction, FormFlow, Route, SubmitBlocked, TimeSinceMenopause};

use crate::context::{use_app_state, use_config, use_relay, use_route};
use crate::platform;
use crate::theme::{spacing, AppColors};
use crate::view::{self, Banner};
use crate::widgets::{FieldMessage, SurfaceCard};

#[component]
pub fn FormScreen() -> Element {
    let mut app = use_app_state();
    let mut route = use_route();
    let config = use_config();
    let relay = use_relay();
    let mut flow = use_signal(|| FormFlow::new(config.schema));
    let timeout = config.timeout;

    let (is_dark, language, themes) = {
        let state = app.read();
        (state.dark_mode(), state.language(), state.selected_themes())
    };
    let variant = flow.read().variant();
    let ranked = variant.ranks_themes();
    let last_index = themes.len().saturating_sub(1);

    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let muted = AppColors::muted(is_dark);
    let surface = AppColors::surface(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    let (fields, submitting, submit_label, banner) = {
        let current = flow.read();
        (
            current.fields().clone(),
            current.is_submitting(),
            view::submit_label(current.state()),
            view::banner(current.state(), language),
        )
    };
    let message = move |field: Field| view::field_message(&flow.read(), field);

    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 10px 12px; border-radius: 8px; border: 1px solid {}; background: {}; color: {};",
        muted, surface, on_surface
    );
    let submit_opacity = if submitting { "0.6" } else { "1" };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match flow.write().begin_submit(&app.read()) {
            Ok(payload) => payload,
            Err(SubmitBlocked::NoThemes) => {
                route.set(Route::Gallery);
                return;
            }
            Err(SubmitBlocked::InFlight) | Err(SubmitBlocked::Invalid) => return,
        };
        let relay = relay.clone();
        let deadline = platform::submission_deadline(timeout);
        spawn(async move {
            let result = match relay.0.as_ref() {
                Ok(client) => client.submit_before(&payload, deadline).await,
                Err(e) => Err(e.clone()),
            };
            flow.write().finish(result);
        });
    };

    let age_options: Vec<(String, String)> = variant
        .age_groups()
        .iter()
        .map(|age| (age.to_string(), view::age_label(age)))
        .collect();
    let since_options: Vec<(String, String)> = TimeSinceMenopause::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), view::since_label(*t)))
        .collect();
    let contact_options: Vec<(String, String)> = ContactMethod::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), view::contact_label(*c).to_string()))
        .collect();
    let contact_heading = if variant.requires_contact() {
        "Preferred contact method"
    } else {
        "Preferred contact method (optional)"
    };

    rsx! {
        div { style: "max-width: 960px; width: 100%; margin: 0 auto; padding: {spacing::SCREEN_PADDING}; box-sizing: border-box;",
            button {
                onclick: move |_| route.set(Route::Gallery),
                style: "background: none; border: none; color: {muted}; cursor: pointer; padding: 0; margin-bottom: {spacing::LG};",
                "← Back to themes"
            }
            div { style: "display: flex; flex-wrap: wrap; gap: {spacing::LG}; align-items: flex-start;",
                div { style: "flex: 1 1 260px;",
                    SurfaceCard { is_dark,
                        h2 { style: "font-family: Georgia, serif; color: {primary}; margin-top: 0;",
                            if ranked { "Your themes by priority" } else { "Selected themes" }
                        }
                        for (index, theme) in themes.iter().copied().enumerate() {
                            div {
                                key: "{theme.id}",
                                style: "display: flex; gap: {spacing::SM}; align-items: center; padding: {spacing::SM} 0;",
                                img { src: "{theme.image}", alt: "", style: "width: 44px; height: 44px; border-radius: 8px; object-fit: cover;" }
                                div { style: "flex: 1;",
                                    p { style: "margin: 0; font-size: 0.9rem; font-weight: 500;",
                                        if ranked { "{index + 1}. " }
                                        "{theme.title}"
                                    }
                                    button {
                                        r#type: "button",
                                        onclick: move |_| {
                                            app.write().toggle(theme.id);
                                            if app.read().selection().is_empty() {
                                                route.set(Route::Gallery);
                                            }
                                        },
                                        style: "background: none; border: none; padding: 0; color: {muted}; font-size: 0.75rem; cursor: pointer; text-decoration: underline;",
                                        "Remove"
                                    }
                                }
                                if ranked {
                                    div { style: "display: flex; flex-direction: column;",
                                        button {
                                            r#type: "button",
                                            disabled: index == 0,
                                            title: "Move up",
                                            onclick: move |_| app.write().move_at(index, Direction::Up),
                                            style: "background: none; border: none; color: {muted}; cursor: pointer;",
                                            "▲"
                                        }
                                        button {
                                            r#type: "button",
                                            disabled: index == last_index,
                                            title: "Move down",
                                            onclick: move |_| app.write().move_at(index, Direction::Down),
                                            style: "background: none; border: none; color: {muted}; cursor: pointer;",
                                            "▼"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { style: "margin-top: {spacing::LG};",
                        h2 { style: "font-family: Georgia, serif; color: {primary}; font-size: 1.2rem;", "Your voice matters" }
                        p { style: "color: {muted}; font-size: 0.85rem; line-height: 1.6;",
                            "Your answers help us shape programmes around what women in menopause actually need. We only use your details to follow up on this survey and never share them with third parties."
                        }
                    }
                }
                form {
                    style: "flex: 2 1 420px; display: flex; flex-direction: column; gap: {spacing::LG};",
                    onsubmit: on_submit,
                    SurfaceCard { is_dark,
                        div { style: "display: flex; flex-direction: column; gap: {spacing::MD};",
                            label { style: "display: flex; flex-direction: column; gap: {spacing::XS};",
                                span { "Name" }
                                input {
                                    r#type: "text",
                                    value: "{fields.name}",
                                    placeholder: "Your name",
                                    oninput: move |evt: FormEvent| flow.write().edit(|f| f.name = evt.value()),
                                    style: "{input_style}",
                                }
                                FieldMessage { is_dark, message: message(Field::Name) }
                            }
                            label { style: "display: flex; flex-direction: column; gap: {spacing::XS};",
                                span { "Email" }
                                input {
                                    r#type: "email",
                                    value: "{fields.email}",
                                    placeholder: "you@example.com",
                                    oninput: move |evt: FormEvent| flow.write().edit(|f| f.email = evt.value()),
                                    style: "{input_style}",
                                }
                                FieldMessage { is_dark, message: message(Field::Email) }
                            }
                        }
                    }
                    SurfaceCard { is_dark,
                        ChoiceGroup {
                            is_dark,
                            name: "ageGroup",
                            heading: "Age group",
                            options: age_options,
                            selected: fields.age_group.clone(),
                            error: message(Field::AgeGroup),
                            on_select: move |value: String| flow.write().edit(|f| f.age_group = Some(value)),
                        }
                    }
                    if variant.asks_time_since_menopause() {
                        SurfaceCard { is_dark,
                            ChoiceGroup {
                                is_dark,
                                name: "timeSinceMenopause",
                                heading: "Time since menopause",
                                options: since_options,
                                selected: fields.time_since_menopause.clone(),
                                error: message(Field::TimeSinceMenopause),
                                on_select: move |value: String| flow.write().edit(|f| f.time_since_menopause = Some(value)),
                            }
                        }
                    }
                    SurfaceCard { is_dark,
                        ChoiceGroup {
                            is_dark,
                            name: "extraChoice",
                            heading: contact_heading,
                            options: contact_options,
                            selected: fields.extra_choice.clone(),
                            error: message(Field::ExtraChoice),
                            on_select: move |value: String| flow.write().edit(|f| f.extra_choice = Some(value)),
                        }
                    }
                    SurfaceCard { is_dark,
                        label { style: "display: flex; gap: {spacing::SM}; align-items: flex-start; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: fields.consent,
                                onchange: move |evt: FormEvent| {
                                    let checked = evt.checked();
                                    flow.write().edit(|f| f.consent = checked);
                                },
                            }
                            div {
                                span { "I consent to my answers being stored and used to contact me about this programme." }
                                p { style: "color: {muted}; font-size: 0.75rem; margin: 4px 0 0;",
                                    "You can withdraw consent at any time by contacting us."
                                }
                            }
                        }
                        FieldMessage { is_dark, message: message(Field::Consent) }
                    }
                    button {
                        r#type: "submit",
                        disabled: submitting,
                        style: "padding: 14px; border-radius: 999px; border: none; font-size: 1rem; background: {primary}; color: {on_primary}; opacity: {submit_opacity}; cursor: pointer;",
                        "{submit_label}"
                    }
                    {banner.map(|b| rsx! { BannerView { is_dark, banner: b } })}
                }
            }
        }
    }
}

#[component]
fn ChoiceGroup(
    is_dark: bool,
    name: &'static str,
    heading: &'static str,
    options: Vec<(String, String)>,
    #[props(!optional)] selected: Option<String>,
    #[props(!optional)] error: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let primary = AppColors::primary(is_dark);
    let muted = AppColors::muted(is_dark);
    let items: Vec<(String, String, bool, &str, String)> = options
        .into_iter()
        .map(|(value, label)| {
            let checked = selected.as_deref() == Some(value.as_str());
            let border = if checked { primary } else { muted };
            let picked = value.clone();
            (value, label, checked, border, picked)
        })
        .collect();

    rsx! {
        fieldset { style: "border: none; margin: 0; padding: 0;",
            legend { style: "margin-bottom: {spacing::SM};", "{heading}" }
            div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM};",
                for (value, label, checked, border, picked) in items {
                    label {
                        key: "{value}",
                        style: "display: flex; gap: 6px; align-items: center; padding: 8px 14px; border-radius: 8px; border: 2px solid {border}; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{value}",
                            checked,
                            onchange: move |_| on_select.call(picked.clone()),
                        }
                        "{label}"
                    }
                }
            }
            FieldMessage { is_dark, message: error }
        }
    }
}

#[component]
fn BannerView(is_dark: bool, banner: Banner) -> Element {
    let (title, description, color) = match &banner {
        Banner::Success { title, description } => (title, description, AppColors::success(is_dark)),
        Banner::Failure { title, description } => (title, description, AppColors::error(is_dark)),
    };
    rsx! {
        div {
            role: "status",
            style: "border-left: 4px solid {color}; padding: {spacing::MD}; border-radius: 8px; background: rgba(0,0,0,0.03);",
            strong { style: "color: {color};", "{title}" }
            p { style: "margin: 4px 0 0;", "{description}" }
        }
    }
}
