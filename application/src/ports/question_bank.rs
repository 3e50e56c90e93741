//! Question bank port

use prep_domain::Question;

/// Read-only pool of authored questions.
///
/// Implementations are loaded once and never mutated, so they can be shared
/// across concurrent selections without locking.
pub trait QuestionBankProvider: Send + Sync {
    /// Every question of `subject`; empty (not an error) for subjects without
    /// content.
    fn questions_for_subject(&self, subject: &str) -> Vec<Question>;

    /// Subjects that have at least one question
    fn subjects(&self) -> Vec<String>;
}
