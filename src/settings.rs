//! Game settings and preferences
//!
//! Persisted to LocalStorage on wasm; in-memory defaults elsewhere.

use serde::{Deserialize, Serialize};

use crate::snake::EdgePolicy;

/// Host-tunable preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// How Snake treats the board edge. The original app shipped both
    /// variants; here it is a single policy switch.
    pub snake_edge_policy: EdgePolicy,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "web_arcade_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_wrap() {
        assert_eq!(Settings::default().snake_edge_policy, EdgePolicy::Wrap);
    }

    #[test]
    fn test_settings_json_shape() {
        let json = serde_json::to_string(&Settings {
            snake_edge_policy: EdgePolicy::Blocked,
        })
        .unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.snake_edge_policy, EdgePolicy::Blocked);
    }
}
