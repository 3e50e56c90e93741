//! Syllabus loading

use super::{ContentError, read_file};
use prep_domain::SyllabusIndex;
use std::path::Path;
use tracing::info;

const BUILTIN_SYLLABUS: &str = include_str!("../../data/syllabus.toml");

/// Load the syllabus from `path`, or the built-in one when `None`.
pub fn load_syllabus(path: Option<&Path>) -> Result<SyllabusIndex, ContentError> {
    let source = match path {
        Some(path) => read_file(path)?,
        None => BUILTIN_SYLLABUS.to_string(),
    };
    let index = parse_syllabus(&source)?;
    info!("Syllabus ready: {} subjects", index.len());
    Ok(index)
}

fn parse_syllabus(source: &str) -> Result<SyllabusIndex, ContentError> {
    let index: SyllabusIndex = toml::from_str(source)?;
    index.validate()?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_syllabus() {
        let index = load_syllabus(None).unwrap();
        assert!(index.contains_subject("Mathematics"));
        assert!(index.contains_subject("literature"));
        assert!(index.find_topic("Government", "federalism").is_some());
    }

    #[test]
    fn test_user_syllabus_replaces_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syllabus.toml");
        fs::write(&path, "[[Biology]]\nname = \"Cells\"\n").unwrap();

        let index = load_syllabus(Some(&path)).unwrap();
        assert_eq!(index.subjects().collect::<Vec<_>>(), vec!["Biology"]);
        assert!(index.topics("Biology")[0].subtopics.is_empty());
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let source = "[[Physics]]\nname = \"Waves\"\n[[Physics]]\nname = \"waves\"\n";
        assert!(matches!(
            parse_syllabus(source),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            parse_syllabus("[[Physics]\nname ="),
            Err(ContentError::Toml(_))
        ));
    }
}
