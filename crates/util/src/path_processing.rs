use std::env;
use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Directory name used under the platform configuration directory.
pub const APP_DIR_NAME: &str = "herbarium";

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/").or_else(|| p.strip_prefix("~\\")) {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Base directory for Herbarium's own files (`~/.config/herbarium` on Linux).
pub fn app_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// Resolve a file path from an environment override, falling back to
/// `file_name` inside [`app_config_dir`]. Blank overrides are ignored.
pub fn resolve_app_file(env_var: &str, file_name: &str) -> PathBuf {
    if let Ok(path) = env::var(env_var) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    app_config_dir().join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde(" /tmp/plants.log "), PathBuf::from("/tmp/plants.log"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~/x.json"), home.join("x.json"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn env_override_wins_unless_blank() {
        temp_env::with_var("HERBARIUM_TEST_PATH", Some("/var/tmp/prefs.json"), || {
            assert_eq!(resolve_app_file("HERBARIUM_TEST_PATH", "p.json"), PathBuf::from("/var/tmp/prefs.json"));
        });
        temp_env::with_var("HERBARIUM_TEST_PATH", Some("   "), || {
            assert_eq!(resolve_app_file("HERBARIUM_TEST_PATH", "p.json"), app_config_dir().join("p.json"));
        });
    }
}
