mod common;

use common::{MockIdentity, MockShortcut, member, profile, story};
use shortcut_stories::{
    api::{StoryQuery, StoryType},
    loader::{LoadState, load_state, load_stories},
};

#[tokio::test]
async fn matching_member_scopes_fetch_by_mention_name() {
    let identity = MockIdentity::resolving(profile("jane@acme.io", "Jane Doe"));
    let api = MockShortcut::new(
        vec![member("bob@acme.io", "bob"), member("jane@acme.io", "jane")],
        vec![story(1, StoryType::Feature)],
    );

    let data = load_stories(&identity, &api).await.unwrap();

    assert_eq!(data.logged_user.as_deref(), Some("jane"));
    assert_eq!(
        *api.queries.borrow(),
        vec![StoryQuery { owner: Some("jane".into()) }]
    );
    assert_eq!(data.profile.display_name.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn unmatched_email_still_fetches_unscoped() {
    let identity = MockIdentity::resolving(profile("nobody@acme.io", "Nobody"));
    let api = MockShortcut::new(
        vec![member("jane@acme.io", "jane")],
        vec![story(1, StoryType::Bug), story(2, StoryType::Chore)],
    );

    let data = load_stories(&identity, &api).await.unwrap();

    assert_eq!(data.logged_user, None);
    assert_eq!(*api.queries.borrow(), vec![StoryQuery { owner: None }]);
    assert_eq!(data.stories.len(), 2);
}

#[tokio::test]
async fn completed_and_archived_stories_are_dropped() {
    let identity = MockIdentity::resolving(profile("jane@acme.io", "Jane"));
    let mut done = story(2, StoryType::Feature);
    done.completed = true;
    let mut shelved = story(3, StoryType::Chore);
    shelved.archived = true;
    let mut started = story(4, StoryType::Bug);
    started.started = true;
    let api = MockShortcut::new(
        vec![member("jane@acme.io", "jane")],
        vec![story(1, StoryType::Feature), done, shelved, started],
    );

    let data = load_stories(&identity, &api).await.unwrap();

    let ids: Vec<u64> = data.stories.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 4]);
    assert!(data.stories.iter().all(|s| !s.completed && !s.archived));
}

#[tokio::test]
async fn users_failure_surfaces_message_and_skips_stories() {
    let identity = MockIdentity::resolving(profile("jane@acme.io", "Jane"));
    let api = MockShortcut {
        users_error: Some("network down".into()),
        ..MockShortcut::new(vec![], vec![story(1, StoryType::Bug)])
    };

    let state = load_state(&identity, &api).await;

    assert_eq!(state, LoadState::Failed("network down".into()));
    assert!(api.queries.borrow().is_empty());
}

#[tokio::test]
async fn identity_failure_short_circuits() {
    let identity = MockIdentity::failing("identity unavailable");
    let api = MockShortcut::default();

    let state = load_state(&identity, &api).await;

    assert_eq!(state, LoadState::Failed("identity unavailable".into()));
    assert_eq!(api.users_calls.get(), 0);
    assert!(api.queries.borrow().is_empty());
}

#[tokio::test]
async fn stories_failure_is_reported() {
    let identity = MockIdentity::resolving(profile("jane@acme.io", "Jane"));
    let message = "Shortcut request to /search/stories failed: 500 Internal Server Error";
    let api = MockShortcut {
        stories_error: Some(message.into()),
        ..MockShortcut::new(vec![member("jane@acme.io", "jane")], vec![])
    };

    let state = load_state(&identity, &api).await;

    assert_eq!(state, LoadState::Failed(message.into()));
}

#[tokio::test]
async fn empty_story_list_is_a_success() {
    let identity = MockIdentity::resolving(profile("jane@acme.io", "Jane"));
    let api = MockShortcut::new(vec![member("jane@acme.io", "jane")], vec![]);

    let state = load_state(&identity, &api).await;

    let LoadState::Loaded(data) = state else {
        panic!("expected loaded state, got {state:?}");
    };
    assert!(data.stories.is_empty());
    assert_eq!(data.logged_user.as_deref(), Some("jane"));
}
