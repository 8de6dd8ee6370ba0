use serde::{Deserialize, Deserializer, Serialize};

use std::collections::HashSet;

/// A competency in the Skillhub catalog.
///
/// Skills are identified by their `key`, which is assigned by the caller at
/// creation time and never changes afterwards. The ordering of `levels` is
/// meaningful (it describes a proficiency progression) and is preserved
/// verbatim through storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Natural primary key ("go", "rust", "system-design").
    pub key: String,
    /// Display name.
    pub name: String,
    /// Human description of the competency.
    #[serde(default)]
    pub description: String,
    /// Opaque icon reference, usually a URL or file name.
    #[serde(default)]
    pub logo: String,
    /// Freeform tags, kept in insertion order without deduplication.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Proficiency tiers in the order they were submitted.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub levels: Vec<Level>,
}

/// A proficiency tier nested inside a [`Skill`].
///
/// Levels have no identity of their own; they are created and replaced only
/// as part of their owning skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Unique within the owning skill.
    pub key: String,
    pub name: String,
    /// Short summary shown in listings.
    #[serde(default)]
    pub brief: String,
    /// Independent statements describing what this tier means.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub descriptions: Vec<String>,
    /// Numeric rank. Not required to be monotonic.
    pub level: i64,
}

impl Skill {
    /// Check the invariants the catalog relies on before a skill is stored.
    ///
    /// Rejects an empty key or name, empty level keys, and level keys that
    /// repeat within the same skill. Rank ordering is intentionally left alone.
    pub fn validate(&self) -> Result<(), String> {
        validate_key(&self.key)?;

        if self.name.trim().is_empty() {
            return Err("skill name cannot be empty".to_string());
        }

        let mut seen = HashSet::with_capacity(self.levels.len());
        for level in &self.levels {
            if level.key.trim().is_empty() {
                return Err(format!("skill '{}' has a level with an empty key", self.key));
            }
            if !seen.insert(level.key.as_str()) {
                return Err(format!(
                    "skill '{}' has duplicate level key '{}'",
                    self.key, level.key
                ));
            }
        }

        Ok(())
    }
}

/// Accept an explicit JSON `null` wherever a list is expected.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Validate a skill key supplied by a caller.
pub fn validate_key(key: &str) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err("skill key cannot be empty".to_string());
    }
    Ok(())
}
