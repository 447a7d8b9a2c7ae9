//! The "Shortcut stories" card.
//!
//! [`StoriesCard`] pulls its collaborators from context and drives one load per
//! mount. [`StoriesCardView`] renders a [`LoadState`] and holds no state of its
//! own, so the same state always renders the same markup.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    api::ShortcutApi,
    identity::IdentityApi,
    loader::{LoadState, StoriesData, load_state},
    ui::story_item::StoryItem,
};

pub const CARD_TITLE: &str = "Shortcut stories";
pub const SIGN_IN_MESSAGE: &str =
    "Hey, looks like you are not signed in. Please sign in in order to get your stories.";

/// Expects `Rc<dyn IdentityApi>` and `Rc<dyn ShortcutApi>` in context.
#[component]
pub fn StoriesCard() -> Element {
    let identity = use_context::<Rc<dyn IdentityApi>>();
    let api = use_context::<Rc<dyn ShortcutApi>>();
    // Dropped with the scope, so a late result never lands after unmount.
    let stories = use_resource(move || {
        let identity = identity.clone();
        let api = api.clone();
        async move { load_state(identity.as_ref(), api.as_ref()).await }
    });
    let state = match &*stories.read() {
        Some(state) => state.clone(),
        None => LoadState::Loading,
    };
    rsx! {
        StoriesCardView { state }
    }
}

#[component]
pub fn StoriesCardView(state: LoadState) -> Element {
    match state {
        LoadState::Loading => rsx! {
            Progress {}
        },
        LoadState::Failed(message) => rsx! {
            div { class: "alert alert-error", role: "alert", "{message}" }
        },
        LoadState::Loaded(data) => rsx! {
            InfoCard { title: CARD_TITLE,
                if data.logged_user.is_some() {
                    StoryList { data }
                } else {
                    div { class: "stories-container",
                        p { class: "sign-in", "{SIGN_IN_MESSAGE}" }
                    }
                }
            }
        },
    }
}

#[component]
fn StoryList(data: StoriesData) -> Element {
    let name = data
        .profile
        .display_name
        .clone()
        .unwrap_or_else(|| "there".to_string());
    rsx! {
        p { class: "greeting", "Hey {name}! 😃 Here are your stories:" }
        div { class: "stories-container",
            for story in data.stories {
                StoryItem { key: "{story.id}", story: story.clone() }
            }
        }
    }
}

#[component]
pub fn InfoCard(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        div { class: "info-card",
            h3 { class: "info-card-title", "{title}" }
            div { class: "info-card-content", {children} }
        }
    }
}

#[component]
pub fn Progress() -> Element {
    rsx! {
        div { class: "progress", role: "progressbar",
            div { class: "progress-bar" }
        }
    }
}
