//! Settings loader for .promptdesk/config.toml

use std::path::{Path, PathBuf};

use promptdesk_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".promptdesk";

/// Path of the config file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.promptdesk/config.toml` under `base_dir`
///
/// A missing, unreadable or invalid file falls back to defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let path = config_path(base_dir);

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists yet
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let dir = base_dir.join(CONFIG_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        let default_content = r#"# PromptDesk Configuration

[behavior]
# Start with the example tool and prompts
seed_examples = true

[ui]
# Characters of background prompt shown on a prompt card
prompt_preview_chars = 200
show_key_hints = true

# [catalog]
# tool_types = ["function", "query", "analysis", "processing", "utility"]
# parameter_types = ["string", "number", "boolean", "array", "object", "date", "enum"]
#
# [catalog.scenarios]
# "汽车行业" = ["质量把控", "市场分析"]
#
# [catalog.templates]
# "汽车行业|质量把控" = "当前为汽车质量分析场景..."
"#;
        std::fs::write(&path, default_content)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
        info!("Created default config at {}", path.display());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert!(settings.behavior.seed_examples);
        assert_eq!(settings.ui.prompt_preview_chars, 200);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".promptdesk");
        std::fs::create_dir_all(&dir).unwrap();

        let config = r#"
[behavior]
seed_examples = false

[catalog]
parameter_types = ["string", "integer"]

[catalog.scenarios]
"农业" = ["产量预测"]

[catalog.templates]
"农业|产量预测" = "当前为农业产量预测场景。"
"#;
        std::fs::write(dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert!(!settings.behavior.seed_examples);
        assert_eq!(settings.catalog.parameter_types, vec!["string", "integer"]);
        assert_eq!(settings.catalog.scenarios_for("农业"), ["产量预测".to_string()]);
        assert_eq!(
            settings.catalog.template_for("农业", "产量预测"),
            Some("当前为农业产量预测场景。")
        );
        // untouched tables keep their defaults
        assert_eq!(settings.catalog.tool_types.len(), 5);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".promptdesk");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "this is [not toml").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_writes_loadable_file() {
        let temp = tempdir().unwrap();

        let path = init_config_dir(temp.path()).unwrap();

        assert!(path.exists());
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();
        let path = init_config_dir(temp.path()).unwrap();
        std::fs::write(&path, "[ui]\nprompt_preview_chars = 10\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).ui.prompt_preview_chars, 10);
    }
}
