//! Tag catalog domain model.
//!
//! The catalog maps a high-level board (e.g., "math", "science") to its
//! topics (e.g., "algebra", "ai"), each with a list of related keyword tags.
//! It is fetched once from the platform API and treated as read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Board -> Topic -> keyword list, with keys exactly as the API provides
/// them (case-sensitive). Display formatting is derived via [`display_name`]
/// and is never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    boards: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl TagCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a board -> topic -> keywords map.
    pub fn from_boards(boards: BTreeMap<String, BTreeMap<String, Vec<String>>>) -> Self {
        Self { boards }
    }

    /// Returns true when the catalog has no boards.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Iterates over boards and their topic maps.
    pub fn boards(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, Vec<String>>)> {
        self.boards.iter()
    }

    /// Returns the topic map for a board, if the board exists.
    pub fn topics(&self, board: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.boards.get(board)
    }

    /// Returns the topic names for a board; empty when the board is missing.
    pub fn topic_names(&self, board: &str) -> Vec<String> {
        self.boards
            .get(board)
            .map(|topics| topics.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns true when the board exists and contains the topic.
    pub fn contains_topic(&self, board: &str, topic: &str) -> bool {
        self.boards
            .get(board)
            .is_some_and(|topics| topics.contains_key(topic))
    }
}

/// Lower-case names that display as all-caps instead of title case.
const ACRONYMS: [&str; 7] = ["ai", "nba", "aws", "gcp", "nlp", "api", "sql"];

/// Formats a board or topic name for display: acronyms go upper-case,
/// everything else is title-cased word by word. Presentation only; catalog
/// keys stay untouched.
pub fn display_name(name: &str) -> String {
    let lower = name.to_lowercase();
    if ACRONYMS.contains(&lower.as_str()) {
        return lower.to_uppercase();
    }
    lower
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> TagCatalog {
        let mut science = BTreeMap::new();
        science.insert("physics".to_string(), vec!["mechanics".to_string()]);
        science.insert("ai".to_string(), vec!["machine learning".to_string()]);
        let mut boards = BTreeMap::new();
        boards.insert("science".to_string(), science);
        TagCatalog::from_boards(boards)
    }

    #[test]
    fn test_topic_lookup() {
        let catalog = sample_catalog();
        assert!(catalog.contains_topic("science", "physics"));
        assert!(!catalog.contains_topic("science", "history"));
        assert!(!catalog.contains_topic("math", "algebra"));
        assert_eq!(catalog.topic_names("math"), Vec::<String>::new());
    }

    #[test]
    fn test_display_name_title_case() {
        assert_eq!(display_name("computer science"), "Computer Science");
        assert_eq!(display_name("earth science"), "Earth Science");
        assert_eq!(display_name("MATH"), "Math");
    }

    #[test]
    fn test_display_name_acronyms() {
        assert_eq!(display_name("ai"), "AI");
        assert_eq!(display_name("Sql"), "SQL");
    }

    #[test]
    fn test_catalog_deserializes_from_plain_map() {
        let catalog: TagCatalog =
            serde_json::from_str(r#"{"math":{"algebra":["equations"]}}"#).unwrap();
        assert!(catalog.contains_topic("math", "algebra"));
    }
}
