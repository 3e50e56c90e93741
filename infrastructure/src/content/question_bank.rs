//! Static question bank

use super::{ContentError, read_file};
use prep_application::QuestionBankProvider;
use prep_domain::{Question, is_placeholder_id};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_BANK: &str = include_str!("../../data/question_bank.json");

/// In-memory [`QuestionBankProvider`] over a fixed set of questions.
///
/// Subjects are matched case-insensitively; unknown subjects yield an
/// empty pool.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionBank {
    /// Keyed by lowercased subject; each pool keeps authored order
    pools: BTreeMap<String, Vec<Question>>,
    /// Subject names as authored
    subjects: Vec<String>,
}

impl StaticQuestionBank {
    /// Build a bank, rejecting invalid questions and duplicate ids.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        let mut bank = Self::default();

        for question in questions {
            question.validate()?;
            if is_placeholder_id(&question.id) {
                return Err(ContentError::ReservedId(question.id));
            }
            if !seen.insert(question.id.clone()) {
                return Err(ContentError::DuplicateQuestion(question.id));
            }

            let key = question.subject.to_lowercase();
            if !bank.pools.contains_key(&key) {
                bank.subjects.push(question.subject.clone());
            }
            bank.pools.entry(key).or_default().push(question);
        }

        Ok(bank)
    }

    /// Parse a JSON array of questions
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::from_questions(questions)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        debug!("Loading question bank from {}", path.display());
        Self::from_json(&read_file(path)?)
    }

    /// The bank compiled into the binary
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_BANK)
    }

    /// Load from `path` when given, otherwise the built-in bank.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        let bank = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::builtin()?,
        };
        info!(
            "Question bank ready: {} questions across {} subjects",
            bank.len(),
            bank.subjects.len()
        );
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl QuestionBankProvider for StaticQuestionBank {
    fn questions_for_subject(&self, subject: &str) -> Vec<Question> {
        self.pools
            .get(&subject.trim().to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn subjects(&self) -> Vec<String> {
        self.subjects.clone()
    }
}
