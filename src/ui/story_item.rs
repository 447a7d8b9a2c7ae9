use dioxus::prelude::*;

use crate::api::{Story, StoryType};

const STAR_PATH: &str = "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 5.73L5.82 21z";
const BUG_PATH: &str = "M20 8h-2.81c-.45-.78-1.07-1.45-1.82-1.96L17 4.41 15.59 3l-2.17 2.17C12.96 5.06 12.49 5 12 5c-.49 0-.96.06-1.41.17L8.41 3 7 4.41l1.62 1.63C7.88 6.55 7.26 7.22 6.81 8H4v2h2.09c-.05.33-.09.66-.09 1v1H4v2h2v1c0 .34.04.67.09 1H4v2h2.81c1.04 1.79 2.97 3 5.19 3s4.15-1.21 5.19-3H20v-2h-2.09c.05-.33.09-.66.09-1v-1h2v-2h-2v-1c0-.34-.04-.67-.09-1H20V8zm-6 8h-4v-2h4v2zm0-4h-4v-2h4v2z";
const BUILD_PATH: &str = "M22.7 19l-9.1-9.1c.9-2.3.4-5-1.5-6.9-2-2-5-2.4-7.4-1.3L9 6 6 9 1.6 4.7C.4 7.1.9 10.1 2.9 12.1c1.9 1.9 4.6 2.4 6.9 1.5l9.1 9.1c.4.4 1 .4 1.4 0l2.3-2.3c.5-.4.5-1.1.1-1.5z";

/// Icon name and SVG path for a story type. `Other` has no icon.
fn icon_for(story_type: StoryType) -> Option<(&'static str, &'static str)> {
    match story_type {
        StoryType::Feature => Some(("star", STAR_PATH)),
        StoryType::Bug => Some(("bug", BUG_PATH)),
        StoryType::Chore => Some(("build", BUILD_PATH)),
        StoryType::Other => None,
    }
}

#[component]
pub fn StoryTypeIcon(story_type: StoryType) -> Element {
    let (Some((name, icon_path)), Some(label)) = (icon_for(story_type), story_type.label()) else {
        return rsx! {};
    };
    rsx! {
        svg {
            class: "story-type-icon",
            "data-icon": name,
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "currentColor",
            title { "{label}" }
            path { d: icon_path }
        }
    }
}

/// One row of the stories card: title link, type badge and progress label.
#[component]
pub fn StoryItem(story: Story) -> Element {
    let badge_class = story.story_type.badge_class();
    let status_class = if story.started {
        "subtitle-started"
    } else {
        "subtitle-not-started"
    };
    let status = story.status_label();
    rsx! {
        div { class: "story-item",
            p { class: "story-title",
                a {
                    class: "story-link",
                    href: "{story.app_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{story.name}"
                }
            }
            div { class: "story-subtitle",
                span { class: "story-badge {badge_class}",
                    StoryTypeIcon { story_type: story.story_type }
                    " #{story.id}"
                }
                span { class: "story-status {status_class}", "{status}" }
            }
        }
    }
}
