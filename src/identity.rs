use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Profile of the signed-in viewer, as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[async_trait(?Send)]
pub trait IdentityApi {
    async fn get_profile_info(&self) -> anyhow::Result<Profile>;
}

/// Identity backed by the profile configured in the app settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsIdentity {
    profile: Profile,
}

impl SettingsIdentity {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

#[async_trait(?Send)]
impl IdentityApi for SettingsIdentity {
    async fn get_profile_info(&self) -> anyhow::Result<Profile> {
        Ok(self.profile.clone())
    }
}
