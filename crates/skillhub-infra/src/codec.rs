//! Column codec for the nested parts of a skill row.
//!
//! The ordered level list is stored as a single JSON document (JSONB in
//! PostgreSQL, TEXT in SQLite). Tags live in a native `TEXT[]` column in
//! PostgreSQL; SQLite has no array type, so there they are stored as a JSON
//! text array using the same codec.

use skillhub_types::error::RepositoryError;
use skillhub_types::skill::Level;

/// Serialize levels into the structured blob format, preserving order.
pub fn encode_levels(levels: &[Level]) -> Result<String, RepositoryError> {
    serde_json::to_string(levels)
        .map_err(|e| RepositoryError::Query(format!("failed to encode levels: {e}")))
}

/// Parse a stored level blob back into its ordered sequence.
///
/// A JSON `null` is accepted as an empty list; anything that is not an array
/// of level records is a decode error.
pub fn decode_levels(raw: &str) -> Result<Vec<Level>, RepositoryError> {
    serde_json::from_str::<Option<Vec<Level>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| RepositoryError::Decode(format!("invalid levels JSON: {e}")))
}

/// Serialize tags for stores without a native array column.
pub fn encode_tags(tags: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(tags)
        .map_err(|e| RepositoryError::Query(format!("failed to encode tags: {e}")))
}

/// Parse tags stored as a JSON text array. A missing value decodes to no tags.
pub fn decode_tags(raw: Option<&str>) -> Result<Vec<String>, RepositoryError> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str::<Option<Vec<String>>>(raw)
            .map(Option::unwrap_or_default)
            .map_err(|e| RepositoryError::Decode(format!("invalid tags JSON: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> Vec<Level> {
        vec![
            Level {
                key: "expert".to_string(),
                name: "Expert".to_string(),
                brief: "Teaches others".to_string(),
                descriptions: vec!["designs runtimes".to_string(), "reviews RFCs".to_string()],
                level: 3,
            },
            Level {
                key: "beginner".to_string(),
                name: "Beginner".to_string(),
                brief: "Getting started".to_string(),
                descriptions: vec!["knows syntax".to_string()],
                level: 1,
            },
        ]
    }

    #[test]
    fn test_levels_keep_submitted_order() {
        let encoded = encode_levels(&levels()).unwrap();
        let decoded = decode_levels(&encoded).unwrap();
        assert_eq!(decoded, levels());
        assert_eq!(decoded[0].key, "expert");
    }

    #[test]
    fn test_levels_decode_is_whitespace_and_key_order_insensitive() {
        // PostgreSQL hands JSONB back with its own key ordering and spacing.
        let raw = r#"[{"level": 1, "name": "Beginner", "key": "beginner",
                       "descriptions": ["knows syntax"], "brief": "Getting started"}]"#;
        let decoded = decode_levels(raw).unwrap();
        assert_eq!(decoded, vec![levels()[1].clone()]);
    }

    #[test]
    fn test_null_levels_decode_to_empty() {
        assert!(decode_levels("null").unwrap().is_empty());
        assert!(decode_levels("[]").unwrap().is_empty());
    }

    #[test]
    fn test_null_descriptions_inside_level_decode_to_empty() {
        let raw = r#"[{"key":"beginner","name":"Beginner","brief":"","descriptions":null,"level":1}]"#;
        let decoded = decode_levels(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].key, "beginner");
        assert!(decoded[0].descriptions.is_empty());
    }

    #[test]
    fn test_malformed_levels_are_decode_errors() {
        for raw in ["not json", "{\"key\":\"x\"}", "[{\"key\":\"x\"}]", ""] {
            let err = decode_levels(raw).unwrap_err();
            assert!(matches!(err, RepositoryError::Decode(_)), "{raw:?} gave {err:?}");
        }
    }

    #[test]
    fn test_tags_keep_order_and_duplicates() {
        let tags = vec!["systems".to_string(), "backend".to_string(), "systems".to_string()];
        let encoded = encode_tags(&tags).unwrap();
        assert_eq!(decode_tags(Some(&encoded)).unwrap(), tags);
    }

    #[test]
    fn test_empty_and_missing_tags() {
        assert!(decode_tags(Some("[]")).unwrap().is_empty());
        assert!(decode_tags(None).unwrap().is_empty());
        assert!(matches!(
            decode_tags(Some("[1, 2]")).unwrap_err(),
            RepositoryError::Decode(_)
        ));
    }
}
