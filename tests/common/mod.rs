//! Hand-written collaborators and fixtures shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use anyhow::anyhow;
use async_trait::async_trait;
use shortcut_stories::{
    api::{Member, MemberProfile, ShortcutApi, Story, StoryQuery, StoryType},
    identity::{IdentityApi, Profile},
};

pub fn profile(email: &str, display_name: &str) -> Profile {
    Profile {
        email: Some(email.to_string()),
        display_name: Some(display_name.to_string()),
    }
}

pub fn member(email: &str, mention_name: &str) -> Member {
    Member {
        id: None,
        profile: MemberProfile {
            email_address: Some(email.to_string()),
            mention_name: mention_name.to_string(),
            name: None,
            deactivated: false,
        },
    }
}

pub fn story(id: u64, story_type: StoryType) -> Story {
    Story {
        id,
        name: format!("Story number {id}"),
        app_url: format!("https://app.shortcut.com/acme/story/{id}"),
        story_type,
        started: false,
        completed: false,
        archived: false,
    }
}

pub enum IdentityBehavior {
    Resolve(Profile),
    Fail(String),
    Pending,
}

pub struct MockIdentity {
    behavior: IdentityBehavior,
}

impl MockIdentity {
    pub fn resolving(profile: Profile) -> Self {
        Self { behavior: IdentityBehavior::Resolve(profile) }
    }

    pub fn failing(message: &str) -> Self {
        Self { behavior: IdentityBehavior::Fail(message.to_string()) }
    }

    pub fn pending() -> Self {
        Self { behavior: IdentityBehavior::Pending }
    }
}

#[async_trait(?Send)]
impl IdentityApi for MockIdentity {
    async fn get_profile_info(&self) -> anyhow::Result<Profile> {
        match &self.behavior {
            IdentityBehavior::Resolve(p) => Ok(p.clone()),
            IdentityBehavior::Fail(msg) => Err(anyhow!("{msg}")),
            IdentityBehavior::Pending => futures::future::pending().await,
        }
    }
}

/// Records every call so tests can assert on ordering and arguments.
#[derive(Default)]
pub struct MockShortcut {
    pub members: Vec<Member>,
    pub stories: Vec<Story>,
    pub users_error: Option<String>,
    pub stories_error: Option<String>,
    pub users_calls: Cell<u32>,
    pub queries: RefCell<Vec<StoryQuery>>,
}

impl MockShortcut {
    pub fn new(members: Vec<Member>, stories: Vec<Story>) -> Self {
        Self {
            members,
            stories,
            ..Default::default()
        }
    }
}

#[async_trait(?Send)]
impl ShortcutApi for MockShortcut {
    async fn get_users(&self) -> anyhow::Result<Vec<Member>> {
        self.users_calls.set(self.users_calls.get() + 1);
        if let Some(msg) = &self.users_error {
            return Err(anyhow!("{msg}"));
        }
        Ok(self.members.clone())
    }

    async fn fetch_stories(&self, query: StoryQuery) -> anyhow::Result<Vec<Story>> {
        self.queries.borrow_mut().push(query);
        if let Some(msg) = &self.stories_error {
            return Err(anyhow!("{msg}"));
        }
        Ok(self.stories.clone())
    }
}
