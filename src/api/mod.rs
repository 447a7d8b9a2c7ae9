//! Shortcut API surface consumed by the stories card.
//!
//! The card only talks to [`ShortcutApi`]; [`client::ShortcutClient`] is the
//! HTTP implementation used by the app.

use async_trait::async_trait;

pub mod client;
mod types;

pub use client::ShortcutClient;
pub use types::{Member, MemberProfile, Story, StorySearchResponse, StoryType};

/// Filter for [`ShortcutApi::fetch_stories`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryQuery {
    /// Mention name of the story owner. `None` leaves the search unscoped.
    pub owner: Option<String>,
}

#[async_trait(?Send)]
pub trait ShortcutApi {
    async fn get_users(&self) -> anyhow::Result<Vec<Member>>;
    async fn fetch_stories(&self, query: StoryQuery) -> anyhow::Result<Vec<Story>>;
}
