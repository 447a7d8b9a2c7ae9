use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    AppSettings, Route,
    api::{ShortcutApi, ShortcutClient},
    identity::{IdentityApi, SettingsIdentity},
    ui::stories_card::StoriesCard,
};

/// Landing page hosting the stories card.
#[component]
pub fn Home() -> Element {
    let settings_ctx = use_context::<Signal<Option<AppSettings>>>();
    let Some(settings) = settings_ctx() else {
        return rsx! { "Loading..." };
    };
    let settings = settings.effective();
    let configured = settings.shortcut.is_configured();
    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Shortcut" }
                Link { to: Route::Settings {}, "Settings" }
            }
            if !configured {
                p { class: "hint", "No Shortcut API token configured yet." }
            }
            StoriesProvider { settings }
        }
    }
}

/// Provides the card's collaborators, built from the current settings.
#[component]
fn StoriesProvider(settings: AppSettings) -> Element {
    let shortcut = settings.shortcut.clone();
    use_context_provider(move || -> Rc<dyn ShortcutApi> {
        Rc::new(ShortcutClient::new(
            shortcut.api_url.clone(),
            shortcut.get_api_token(),
        ))
    });
    let profile = settings.profile.clone();
    use_context_provider(move || -> Rc<dyn IdentityApi> {
        Rc::new(SettingsIdentity::new(profile))
    });
    rsx! {
        StoriesCard {}
    }
}
