//! User interface components.
//!
//! The stories card and its row renderer, plus the two pages of the host app.

pub mod home; // Landing page (public for routing)
pub mod settings; // Settings page (public for routing)
pub mod stories_card;
pub mod story_item;
