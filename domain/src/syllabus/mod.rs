//! Syllabus index: the read-only subject → topics mapping.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A named sub-area of a subject with its subtopics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusTopic {
    pub name: String,
    #[serde(default)]
    pub subtopics: Vec<String>,
}

impl SyllabusTopic {
    pub fn new(name: impl Into<String>, subtopics: Vec<String>) -> Self {
        Self {
            name: name.into(),
            subtopics,
        }
    }
}

/// Static mapping from subject to its ordered topics.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyllabusIndex {
    subjects: BTreeMap<String, Vec<SyllabusTopic>>,
}

impl SyllabusIndex {
    pub fn new(subjects: BTreeMap<String, Vec<SyllabusTopic>>) -> Self {
        Self { subjects }
    }

    /// Subject names in sorted order
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Topics of `subject` (case-insensitive), empty for unknown subjects.
    pub fn topics(&self, subject: &str) -> &[SyllabusTopic] {
        self.subjects
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(subject))
            .map(|(_, topics)| topics.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_subject(&self, subject: &str) -> bool {
        self.subjects
            .keys()
            .any(|name| name.eq_ignore_ascii_case(subject))
    }

    /// Look up a topic by exact (case-insensitive) name.
    pub fn find_topic(&self, subject: &str, topic: &str) -> Option<&SyllabusTopic> {
        self.topics(subject)
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(topic))
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Reject blank names and duplicate topics within a subject.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (subject, topics) in &self.subjects {
            if subject.trim().is_empty() {
                return Err(DomainError::InvalidSyllabus(
                    "subject name is empty".to_string(),
                ));
            }
            let mut seen = HashSet::new();
            for topic in topics {
                if topic.name.trim().is_empty() {
                    return Err(DomainError::InvalidSyllabus(format!(
                        "{}: topic name is empty",
                        subject
                    )));
                }
                if !seen.insert(topic.name.to_lowercase()) {
                    return Err(DomainError::InvalidSyllabus(format!(
                        "{}: duplicate topic '{}'",
                        subject, topic.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SyllabusIndex {
        let toml_str = r#"
[[Mathematics]]
name = "Algebra"
subtopics = ["Indices", "Logarithms"]

[[Mathematics]]
name = "Calculus"
subtopics = ["Differentiation", "Integration"]

[[Biology]]
name = "Ecology"
"#;
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_deserialize_preserves_topic_order() {
        let index = sample();
        let names: Vec<_> = index.topics("Mathematics").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Algebra", "Calculus"]);
        assert!(index.topics("Biology")[0].subtopics.is_empty());
    }

    #[test]
    fn test_subject_lookup_is_case_insensitive() {
        let index = sample();
        assert_eq!(index.topics("mathematics").len(), 2);
        assert!(index.contains_subject("BIOLOGY"));
        assert!(index.topics("Literature").is_empty());
    }

    #[test]
    fn test_find_topic() {
        let index = sample();
        let topic = index.find_topic("Mathematics", "calculus").unwrap();
        assert_eq!(topic.subtopics, vec!["Differentiation", "Integration"]);
        assert!(index.find_topic("Mathematics", "Geometry").is_none());
    }

    #[test]
    fn test_subjects_sorted() {
        let index = sample();
        let subjects: Vec<_> = index.subjects().collect();
        assert_eq!(subjects, vec!["Biology", "Mathematics"]);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut subjects = BTreeMap::new();
        subjects.insert(
            "Physics".to_string(),
            vec![
                SyllabusTopic::new("Waves", vec![]),
                SyllabusTopic::new("waves", vec![]),
            ],
        );
        let err = SyllabusIndex::new(subjects).validate().unwrap_err();
        assert!(err.to_string().contains("duplicate topic"));
        assert!(sample().validate().is_ok());
    }
}
