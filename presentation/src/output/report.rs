//! Combined JSON payload of a practice run

use prep_application::QuestionSelection;
use prep_domain::{ExamResult, NarrativeOutcome};
use serde::Serialize;

/// Selection plus, when answers were given, its score and summary
#[derive(Debug, Serialize)]
pub struct PracticeReport<'a> {
    pub selection: &'a QuestionSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a ExamResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<&'a NarrativeOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_domain::SelectionTier;

    #[test]
    fn test_unscored_report_omits_result() {
        let selection = QuestionSelection {
            questions: vec![],
            tier: SelectionTier::SubjectWide,
        };
        let report = PracticeReport {
            selection: &selection,
            result: None,
            narrative: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["selection"]["tier"], "subject_wide");
        assert!(json.get("result").is_none());
    }
}
