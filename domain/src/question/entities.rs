//! Question entities

use crate::core::error::DomainError;
use crate::core::exam_type::ExamType;
use crate::util::contains_ignore_case;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Difficulty rating of an authored question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Short label, unique within its question (e.g. `"a"`)
    pub id: String,
    pub text: String,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// An authored multiple-choice question (Entity).
///
/// Immutable once authored; loaders call [`Question::validate`] before a
/// question enters a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub exam_type: ExamType,
    pub subject: String,
    /// The bank's own topic tag
    pub topic: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub correct_option_id: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Question {
    /// Check the option invariants: at least two options, unique ids, and a
    /// correct option id that names one of them.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.options.len() < 2 {
            return Err(DomainError::invalid_question(
                &self.id,
                format!("needs at least 2 options, found {}", self.options.len()),
            ));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(DomainError::invalid_question(
                    &self.id,
                    format!("duplicate option id '{}'", option.id),
                ));
            }
        }

        if !seen.contains(self.correct_option_id.as_str()) {
            return Err(DomainError::invalid_question(
                &self.id,
                format!(
                    "correct option '{}' is not one of its options",
                    self.correct_option_id
                ),
            ));
        }

        Ok(())
    }

    /// Whether the bank topic contains `topic` (case-insensitive).
    pub fn matches_topic(&self, topic: &str) -> bool {
        contains_ignore_case(&self.topic, topic)
    }

    pub fn option(&self, id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option_id == option_id
    }

    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.option(&self.correct_option_id)
    }
}

/// A question as served for a requested syllabus topic.
///
/// `syllabus_topic` always holds the topic the request was made under, which
/// can differ from [`Question::topic`] when the subject-wide fallback
/// supplied the question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    #[serde(flatten)]
    pub question: Question,
    pub syllabus_topic: String,
}

impl GeneratedQuestion {
    pub fn new(question: Question, syllabus_topic: impl Into<String>) -> Self {
        Self {
            question,
            syllabus_topic: syllabus_topic.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.question.id
    }
}

impl std::ops::Deref for GeneratedQuestion {
    type Target = Question;

    fn deref(&self) -> &Question {
        &self.question
    }
}
