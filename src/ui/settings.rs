use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    AppSettings, Route,
    app_settings::ShortcutSettings,
    identity::Profile,
    storage::save_app_settings,
};

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() { None } else { Some(s) }
}

#[component]
pub fn Settings() -> Element {
    let mut settings_ctx = use_context::<Signal<Option<AppSettings>>>();
    let current = settings_ctx().unwrap_or_default();

    let mut api_url = use_signal(|| current.shortcut.api_url.clone());
    let mut api_token = use_signal(|| current.shortcut.api_token.clone());
    let mut display_name = use_signal(|| current.profile.display_name.clone().unwrap_or_default());
    let mut email = use_signal(|| current.profile.email.clone().unwrap_or_default());
    let mut status: Signal<Option<String>> = use_signal(|| None);

    let save = move |_e: Event<MouseData>| async move {
        let s = AppSettings {
            id: Some(1),
            shortcut: ShortcutSettings {
                api_url: api_url().trim().to_string(),
                api_token: api_token().trim().to_string(),
            },
            profile: Profile {
                email: non_empty(email()),
                display_name: non_empty(display_name()),
            },
        };
        match save_app_settings(&s).await {
            Ok(()) => status.set(Some("Saved.".to_string())),
            Err(e) => {
                warn!("Could not save settings: {e:?}");
                status.set(Some(format!("Could not save settings: {e}")));
            }
        }
        settings_ctx.set(Some(s));
    };

    rsx! {
        div { class: "page settings",
            div { class: "page-header",
                h3 { style: "margin: 0;", "Settings" }
                Link { to: Route::Home {}, "Back" }
            }
            hr { style: "margin-bottom: 1rem;" }

            h4 { style: "margin: 0 0 1rem 0;", "Shortcut API" }
            label { "API endpoint" }
            input {
                value: api_url(),
                oninput: move |e: Event<FormData>| api_url.set(e.value()),
            }
            label { "API token" }
            input {
                r#type: "password",
                value: api_token(),
                oninput: move |e: Event<FormData>| api_token.set(e.value()),
            }

            h4 { style: "margin: 2rem 0 1rem 0;", "Profile" }
            label { "Display name" }
            input {
                value: display_name(),
                oninput: move |e: Event<FormData>| display_name.set(e.value()),
            }
            label { "Email" }
            input {
                r#type: "email",
                value: email(),
                oninput: move |e: Event<FormData>| email.set(e.value()),
            }

            div { style: "margin-top: 1.5rem;",
                button { onclick: save, "Save" }
                if let Some(msg) = status() {
                    span { class: "status", style: "margin-left: 1em;", "{msg}" }
                }
            }
        }
    }
}
