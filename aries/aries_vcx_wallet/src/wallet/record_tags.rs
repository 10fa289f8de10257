use std::fmt;

use serde::{de::Visitor, ser::SerializeMap, Deserialize, Serialize};

pub type RecordTag = (String, String);

/// Searchable name/value pairs attached to a wallet record, kept sorted by name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordTags {
    inner: Vec<RecordTag>,
}

impl Serialize for RecordTags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.inner.len()))?;
        for tag in &self.inner {
            map.serialize_entry(&tag.0, &tag.1)?;
        }
        map.end()
    }
}

struct RecordTagsVisitor;

impl<'de> Visitor<'de> for RecordTagsVisitor {
    type Value = RecordTags;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a map representing tags")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut tags = RecordTags::default();
        while let Some(tag) = map.next_entry()? {
            tags.add(tag);
        }
        Ok(tags)
    }
}

impl<'de> Deserialize<'de> for RecordTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordTagsVisitor)
    }
}

impl RecordTags {
    pub fn new(inner: Vec<RecordTag>) -> Self {
        inner.into_iter().collect()
    }

    /// Inserts a tag, replacing any previous value under the same name.
    pub fn add(&mut self, tag: RecordTag) {
        self.inner.retain(|existing| existing.0 != tag.0);
        self.inner.push(tag);
        self.inner.sort();
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(tag_name, _)| tag_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_inner(self) -> Vec<RecordTag> {
        self.inner
    }

    pub fn merge(&mut self, other: RecordTags) {
        for tag in other {
            self.add(tag);
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.inner.retain(|existing_tag| existing_tag.0 != name);
    }

    /// Whether every tag of `self` is present with the same value in `other`.
    pub fn is_subset_of(&self, other: &RecordTags) -> bool {
        self.inner
            .iter()
            .all(|(name, value)| other.get(name) == Some(value.as_str()))
    }
}

impl IntoIterator for RecordTags {
    type Item = RecordTag;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl FromIterator<RecordTag> for RecordTags {
    fn from_iter<T: IntoIterator<Item = RecordTag>>(iter: T) -> Self {
        let mut tags = Self::default();
        for item in iter {
            tags.add(item);
        }
        tags
    }
}

impl From<Vec<RecordTag>> for RecordTags {
    fn from(value: Vec<RecordTag>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::wallet::record_tags::RecordTags;

    #[test]
    fn test_record_tags_serialize() {
        let tags = RecordTags::new(vec![("~a".into(), "b".into()), ("c".into(), "d".into())]);

        let res = serde_json::to_string(&tags).unwrap();

        assert_eq!(json!({ "c": "d", "~a": "b" }).to_string(), res);
    }

    #[test]
    fn test_record_tags_deserialize() {
        let json = json!({"a":"b", "~c":"d"});

        let tags = RecordTags::new(vec![("a".into(), "b".into()), ("~c".into(), "d".into())]);

        let res: RecordTags = serde_json::from_str(&json.to_string()).unwrap();

        assert_eq!(tags, res);
    }

    #[test]
    fn test_record_tags_add_replaces_value() {
        let tags = RecordTags::default().with("state", "offered").with("state", "issued");
        assert_eq!(tags.get("state"), Some("issued"));
        assert_eq!(tags.into_inner().len(), 1);
    }

    #[test]
    fn test_record_tags_subset() {
        let record_tags = RecordTags::default()
            .with("state", "issued")
            .with("connection_id", "c1");
        let query = RecordTags::default().with("state", "issued");

        assert!(query.is_subset_of(&record_tags));
        assert!(RecordTags::default().is_subset_of(&record_tags));
        assert!(!RecordTags::default()
            .with("state", "offered")
            .is_subset_of(&record_tags));
    }
}
