use serde::{Deserialize, Serialize};

use crate::{api::client::DEFAULT_API_URL, identity::Profile};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub id: Option<u32>,
    pub shortcut: ShortcutSettings,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortcutSettings {
    pub api_url: String,
    #[serde(default)]
    pub api_token: String,
}

impl Default for ShortcutSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: "".to_string(),
        }
    }
}

impl ShortcutSettings {
    pub fn is_configured(&self) -> bool {
        !self.api_url.is_empty() && !self.api_token.is_empty()
    }

    pub fn get_api_token(&self) -> Option<String> {
        if self.api_token.is_empty() {
            None
        } else {
            Some(self.api_token.clone())
        }
    }

    /// Replaces the URL and token with any non-empty override.
    pub fn with_overrides(self, api_url: Option<String>, api_token: Option<String>) -> Self {
        Self {
            api_url: api_url.filter(|v| !v.is_empty()).unwrap_or(self.api_url),
            api_token: api_token.filter(|v| !v.is_empty()).unwrap_or(self.api_token),
        }
    }

    /// Applies `SHORTCUT_API_URL` / `SHORTCUT_API_TOKEN` on native targets.
    pub fn with_env_overrides(self) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.with_overrides(
                std::env::var("SHORTCUT_API_URL").ok(),
                std::env::var("SHORTCUT_API_TOKEN").ok(),
            )
        }
        #[cfg(target_arch = "wasm32")]
        {
            self
        }
    }
}

impl AppSettings {
    /// Settings the app connects with. Overrides never flow back into the
    /// stored copy, so saving does not persist them.
    pub fn effective(&self) -> AppSettings {
        AppSettings {
            shortcut: self.shortcut.clone().with_env_overrides(),
            ..self.clone()
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            id: Some(1),
            shortcut: ShortcutSettings::default(),
            profile: Profile::default(),
        }
    }
}
