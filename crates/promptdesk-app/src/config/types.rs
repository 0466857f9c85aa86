//! Configuration types for PromptDesk
//!
//! Defines `Settings`, the contents of `.promptdesk/config.toml`, and its
//! sections. Every key is optional.

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;

/// Application settings (.promptdesk/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub catalog: Catalog,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Start with the example tool and prompts in the stores
    #[serde(default = "default_true")]
    pub seed_examples: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            seed_examples: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Characters of background prompt shown on a prompt card before truncation
    #[serde(default = "default_prompt_preview_chars")]
    pub prompt_preview_chars: usize,

    /// Show the key hint footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            prompt_preview_chars: default_prompt_preview_chars(),
            show_key_hints: true,
        }
    }
}

fn default_prompt_preview_chars() -> usize {
    200
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.behavior.seed_examples);
        assert_eq!(settings.ui.prompt_preview_chars, 200);
        assert!(settings.ui.show_key_hints);
        assert_eq!(settings.catalog, Catalog::default());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_ui_section() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
prompt_preview_chars = 40
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.prompt_preview_chars, 40);
        assert!(settings.ui.show_key_hints);
    }
}
