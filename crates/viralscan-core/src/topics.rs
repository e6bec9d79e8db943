use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Topic queries used when no topics file is configured.
pub const DEFAULT_TOPICS: &[&str] = &[
    "AI breakthrough",
    "OpenAI OR Anthropic OR Claude",
    "machine learning",
    "GPT OR LLM",
    "artificial intelligence",
    "tech news",
    "startup launch",
    "new AI tool",
    "ChatGPT",
    "tech innovation",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsFile {
    pub topics: Vec<String>,
}

impl TopicsFile {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            topics: DEFAULT_TOPICS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// Load and validate a topics list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_topics(path: &Path) -> Result<TopicsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TopicsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let topics_file: TopicsFile = serde_yaml::from_str(&content)?;
    validate_topics(&topics_file.topics)?;

    Ok(topics_file)
}

/// Check a topic list: at least one entry, none blank, no case-insensitive
/// duplicates.
///
/// # Errors
///
/// Returns `ConfigError::Validation` naming the first offending topic.
pub fn validate_topics(topics: &[String]) -> Result<(), ConfigError> {
    if topics.is_empty() {
        return Err(ConfigError::Validation(
            "at least one topic is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for topic in topics {
        if topic.trim().is_empty() {
            return Err(ConfigError::Validation(
                "topic must be non-empty".to_string(),
            ));
        }
        if !seen.insert(topic.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate topic: '{topic}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn builtin_topics_are_valid() {
        assert!(validate_topics(&TopicsFile::builtin().topics).is_ok());
        assert_eq!(TopicsFile::builtin().topics.len(), 10);
    }

    #[test]
    fn empty_list_rejected() {
        let err = validate_topics(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn blank_topic_rejected() {
        let err = validate_topics(&topics(&["ChatGPT", "   "])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("non-empty")));
    }

    #[test]
    fn case_insensitive_duplicate_rejected() {
        let err = validate_topics(&topics(&["ChatGPT", "chatgpt"])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn parses_yaml_topics() {
        let yaml = "topics:\n  - rust lang\n  - \"GPT OR LLM\"\n";
        let parsed: TopicsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.topics, topics(&["rust lang", "GPT OR LLM"]));
    }

    #[test]
    fn load_topics_missing_file_is_io_error() {
        let err = load_topics(Path::new("/nonexistent/viralscan/topics.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::TopicsFileIo { .. }));
    }

    #[test]
    fn load_topics_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "viralscan-topics-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "topics:\n  - tech news\n  - startup launch\n").unwrap();
        let loaded = load_topics(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.topics, topics(&["tech news", "startup launch"]));
    }
}
