//! Exam type and exam mode value objects

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Examination body a question bank or result belongs to (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ExamType {
    #[default]
    Jamb,
    Waec,
    Neco,
    PostUtme,
    Custom(String),
}

impl ExamType {
    /// Get the string identifier for this exam type
    pub fn as_str(&self) -> &str {
        match self {
            ExamType::Jamb => "JAMB",
            ExamType::Waec => "WAEC",
            ExamType::Neco => "NECO",
            ExamType::PostUtme => "POST-UTME",
            ExamType::Custom(s) => s,
        }
    }

    /// Exam types with built-in content
    pub fn known() -> Vec<ExamType> {
        vec![
            ExamType::Jamb,
            ExamType::Waec,
            ExamType::Neco,
            ExamType::PostUtme,
        ]
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExamType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_uppercase().as_str() {
            "JAMB" | "UTME" => ExamType::Jamb,
            "WAEC" | "WASSCE" => ExamType::Waec,
            "NECO" => ExamType::Neco,
            "POST-UTME" | "POST_UTME" | "POSTUTME" => ExamType::PostUtme,
            _ => ExamType::Custom(s.trim().to_string()),
        })
    }
}

impl Serialize for ExamType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // FromStr is infallible
        let Ok(exam_type) = s.parse::<ExamType>();
        Ok(exam_type)
    }
}

/// How an exam attempt was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamMode {
    /// Untimed, low-stakes practice
    #[default]
    Practice,
    /// Timed mock exam
    Timed,
}

impl ExamMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamMode::Practice => "practice",
            ExamMode::Timed => "timed",
        }
    }
}

impl std::fmt::Display for ExamMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_type_roundtrip() {
        for exam_type in ExamType::known() {
            let parsed: ExamType = exam_type.to_string().parse().unwrap();
            assert_eq!(exam_type, parsed);
        }
    }

    #[test]
    fn test_exam_type_aliases_are_case_insensitive() {
        assert_eq!("utme".parse::<ExamType>().unwrap(), ExamType::Jamb);
        assert_eq!("wassce".parse::<ExamType>().unwrap(), ExamType::Waec);
        assert_eq!("post_utme".parse::<ExamType>().unwrap(), ExamType::PostUtme);
    }

    #[test]
    fn test_custom_exam_type() {
        let exam_type: ExamType = "SAT".parse().unwrap();
        assert_eq!(exam_type, ExamType::Custom("SAT".to_string()));
        assert_eq!(exam_type.to_string(), "SAT");
    }

    #[test]
    fn test_exam_type_serde_as_string() {
        let json = serde_json::to_string(&ExamType::Waec).unwrap();
        assert_eq!(json, "\"WAEC\"");
        let parsed: ExamType = serde_json::from_str("\"NECO\"").unwrap();
        assert_eq!(parsed, ExamType::Neco);
    }

    #[test]
    fn test_exam_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ExamMode::Timed).unwrap(), "\"timed\"");
        let mode: ExamMode = serde_json::from_str("\"practice\"").unwrap();
        assert_eq!(mode, ExamMode::Practice);
    }
}
