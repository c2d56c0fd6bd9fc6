use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::taxonomy::KeywordTable;

/// A user-supplied keyword list for one category, appended after the
/// built-in table entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub extra_keywords: Vec<KeywordEntry>,
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("scrip")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Missing or malformed settings fall back to defaults silently.
pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(settings_path(), content)?;
    Ok(())
}

/// Built-in keyword table with the user's extra entries appended. Built-in
/// priority order is never disturbed.
pub fn keyword_table(settings: &Settings) -> KeywordTable {
    let mut table = KeywordTable::with_defaults();
    for entry in &settings.extra_keywords {
        table.push(&entry.category, entry.keywords.clone());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_default_settings_give_default_table() {
        let table = keyword_table(&Settings::default());
        assert_eq!(table.entries().count(), 8);
    }

    #[test]
    fn test_extra_keywords_extend_table() {
        let settings = Settings {
            extra_keywords: vec![KeywordEntry {
                category: "education".to_string(),
                keywords: vec!["Coursera".to_string()],
            }],
        };
        let table = keyword_table(&settings);
        assert_eq!(classify("COURSERA SUBSCRIPTION", &table), "education");
        // Built-in entries keep priority over user additions.
        assert_eq!(classify("Coursera Cafe", &table), "food-dining");
    }

    #[test]
    fn test_malformed_settings_json_falls_back() {
        let parsed: Settings = serde_json::from_str("{}").unwrap_or_default();
        assert!(parsed.extra_keywords.is_empty());
    }
}
