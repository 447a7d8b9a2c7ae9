//! Sequential load behind the stories card.
//!
//! profile -> members -> stories -> filter. The first failing step aborts the
//! rest and its message is surfaced unchanged.

use dioxus::logger::tracing::{info, warn};

use crate::{
    api::{Member, ShortcutApi, Story, StoryQuery},
    identity::{IdentityApi, Profile},
};

#[derive(Debug, Clone, PartialEq)]
pub struct StoriesData {
    pub stories: Vec<Story>,
    pub profile: Profile,
    /// Mention name of the viewer, if a member matched their email.
    pub logged_user: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(StoriesData),
}

impl From<anyhow::Result<StoriesData>> for LoadState {
    fn from(res: anyhow::Result<StoriesData>) -> Self {
        match res {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}

/// Mention name of the member whose email equals `email`.
///
/// An empty mention name counts as no match.
pub fn find_mention_name(members: &[Member], email: Option<&str>) -> Option<String> {
    let email = email?;
    members
        .iter()
        .find(|m| m.profile.email_address.as_deref() == Some(email))
        .map(|m| m.profile.mention_name.clone())
        .filter(|name| !name.is_empty())
}

pub fn active_stories(stories: Vec<Story>) -> Vec<Story> {
    stories.into_iter().filter(Story::is_active).collect()
}

pub async fn load_stories(
    identity: &dyn IdentityApi,
    api: &dyn ShortcutApi,
) -> anyhow::Result<StoriesData> {
    let profile = identity.get_profile_info().await?;
    let members = api.get_users().await?;
    let logged_user = find_mention_name(&members, profile.email.as_deref());

    let stories = api
        .fetch_stories(StoryQuery {
            owner: logged_user.clone(),
        })
        .await?;
    let stories = active_stories(stories);

    info!("loaded {} active stories for {logged_user:?}", stories.len());
    Ok(StoriesData {
        stories,
        profile,
        logged_user,
    })
}

/// Runs [`load_stories`] and folds the outcome into a [`LoadState`].
pub async fn load_state(identity: &dyn IdentityApi, api: &dyn ShortcutApi) -> LoadState {
    let res = load_stories(identity, api).await;
    if let Err(e) = &res {
        warn!("Could not load stories: {e:?}");
    }
    res.into()
}
