use adw::Application;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use directories::BaseDirs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppState {
    pub base_url: String,
    pub token: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    fn config_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        let cfg_dir = base.config_dir();
        Some(cfg_dir.join("taskdesk.toml"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if let Ok(bytes) = fs::read(&path) {
                if let Ok(text) = String::from_utf8(bytes) {
                    if let Ok(state) = toml::from_str::<AppState>(&text) {
                        return state;
                    }
                }
            }
        }
        Self::new()
    }

    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() { let _ = fs::create_dir_all(parent); }
            let toml = toml::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            fs::write(path, toml)
        } else {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "No config dir"))
        }
    }

    pub fn is_connected(&self) -> bool {
        !self.base_url.is_empty() && !self.token.is_empty()
    }
}

pub fn build_ui(app: &Application) {
    let state = AppState::load();
    if state.is_connected() {
        crate::ui::main_window::show_main_window(app);
    } else {
        crate::ui::login::show_login_window(app);
    }
}
