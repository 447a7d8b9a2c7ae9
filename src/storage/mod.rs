use async_trait::async_trait;
use dioxus::logger::tracing::warn;

use crate::AppSettings;

#[cfg(target_arch = "wasm32")]
mod browser_storage;
#[cfg(not(target_arch = "wasm32"))]
mod file_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
type AppStorage = browser_storage::IdbStorage;

#[async_trait(?Send)]
pub trait Storage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()>;
    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use directories_next::ProjectDirs;
    use std::path::PathBuf;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "Larder", "shortcut-stories") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    let storage = AppStorage::new(base);
    Ok(storage)
}

#[cfg(target_arch = "wasm32")]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    let storage = AppStorage::new().await?;
    Ok(storage)
}

/// Stored settings, or defaults when none are stored or storage is unavailable.
/// Environment overrides are not applied here; see [`AppSettings::effective`].
pub async fn load_app_settings() -> AppSettings {
    let stored = match get_storage().await {
        Ok(st) => st.load_settings().await.unwrap_or_else(|e| {
            warn!("Could not load settings: {e:?}");
            None
        }),
        Err(e) => {
            warn!("Could not get storage: {e:?}");
            None
        }
    };
    stored.unwrap_or_default()
}

pub async fn save_app_settings(settings: &AppSettings) -> anyhow::Result<()> {
    let storage = get_storage().await?;
    storage.save_settings(settings).await
}
