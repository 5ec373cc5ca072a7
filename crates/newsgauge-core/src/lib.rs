//! Newsgauge core domain types, configuration, and errors.

mod config;
mod error;
mod types;

pub use config::{DEFAULT_HISTORY_CAP, EngineConfig};
pub use error::NewsgaugeError;
pub use types::{Article, ArticleDraft, QueryResult, Readability, ReadabilityAverages};

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: Option<&str>, description: Option<&str>) -> ArticleDraft {
        ArticleDraft {
            title: title.map(str::to_string),
            url: "https://example.com/a".to_string(),
            source_name: "Example".to_string(),
            source_url: "https://example.com".to_string(),
            published_at: "2025-01-01T12:00:00Z".to_string(),
            description: description.map(str::to_string),
        }
    }

    // --- Readability ---

    #[test]
    fn readability_rounds_half_away_from_zero() {
        let r = Readability {
            grade: 2.5,
            score: 83.32,
        };
        assert_eq!(r.rounded(), (3, 83));
    }

    #[test]
    fn readability_rounds_negative_grade() {
        let r = Readability {
            grade: -3.4,
            score: 120.6,
        };
        assert_eq!(r.rounded(), (-3, 121));
    }

    // --- Article ---

    #[test]
    fn article_from_draft_keeps_metadata() {
        let article = Article::from_draft(
            draft(Some("Title"), Some("Body")),
            Readability {
                grade: 4.2,
                score: 71.9,
            },
        );
        assert_eq!(article.title.as_deref(), Some("Title"));
        assert_eq!(article.source_name, "Example");
        assert_eq!(article.kincaid_grade, 4);
        assert_eq!(article.reading_score, 72);
        assert_eq!(article.description_text(), "Body");
    }

    #[test]
    fn article_absent_fields_read_as_empty() {
        let article = Article::from_draft(draft(None, None), Readability::default());
        assert_eq!(article.title_text(), "");
        assert_eq!(article.description_text(), "");
    }

    #[test]
    fn draft_deserializes_camel_case_with_defaults() {
        let json = r#"{"title":"Hello","sourceName":"Wire"}"#;
        let d: ArticleDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.title.as_deref(), Some("Hello"));
        assert_eq!(d.source_name, "Wire");
        assert!(d.description.is_none());
        assert!(d.url.is_empty());
    }

    // --- QueryResult ---

    #[test]
    fn query_result_exposes_titles_and_descriptions() {
        let articles = vec![
            Article::from_draft(draft(Some("One"), Some("First")), Readability::default()),
            Article::from_draft(draft(None, Some("Second")), Readability::default()),
        ];
        let result = QueryResult::new(
            "rust",
            articles,
            ReadabilityAverages {
                avg_grade: 5.0,
                avg_score: 60.0,
            },
        );
        assert_eq!(result.query(), "rust");
        assert_eq!(result.titles().collect::<Vec<_>>(), vec!["One", ""]);
        assert_eq!(
            result.descriptions().collect::<Vec<_>>(),
            vec!["First", "Second"]
        );
        assert_eq!(result.avg_grade(), 5.0);
        assert_eq!(result.avg_score(), 60.0);
    }

    // --- EngineConfig ---

    #[test]
    fn config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.history_cap, DEFAULT_HISTORY_CAP);
        assert_eq!(config.store_capacity, None);
    }

    #[test]
    fn config_from_toml_partial() {
        let config = EngineConfig::from_toml_str("history_cap = 50").unwrap();
        assert_eq!(config.history_cap, 50);
        assert_eq!(config.store_capacity, None);
    }

    #[test]
    fn config_from_toml_full() {
        let config =
            EngineConfig::from_toml_str("history_cap = 5\nstore_capacity = 100\n").unwrap();
        assert_eq!(config.history_cap, 5);
        assert_eq!(config.store_capacity, Some(100));
    }

    #[test]
    fn config_rejects_zero_history_cap() {
        let err = EngineConfig::from_toml_str("history_cap = 0").unwrap_err();
        assert!(matches!(err, NewsgaugeError::Config(_)));
    }

    #[test]
    fn config_rejects_zero_store_capacity() {
        let err = EngineConfig::from_toml_str("store_capacity = 0").unwrap_err();
        assert!(matches!(err, NewsgaugeError::Config(_)));
    }

    #[test]
    fn config_rejects_unknown_keys() {
        let err = EngineConfig::from_toml_str("max_visible = 50").unwrap_err();
        assert!(matches!(err, NewsgaugeError::Parse(_)));
    }

    #[test]
    fn config_with_history_cap_overrides() {
        let config = EngineConfig::default().with_history_cap(3).unwrap();
        assert_eq!(config.history_cap, 3);
        assert!(EngineConfig::default().with_history_cap(0).is_err());
    }

    #[test]
    fn config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("newsgauge.toml");
        std::fs::write(&path, "history_cap = 7\n").unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.history_cap, 7);
    }

    #[test]
    fn config_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, NewsgaugeError::Io(_)));
    }

    // --- NewsgaugeError ---

    #[test]
    fn error_display() {
        let err = NewsgaugeError::UnknownQuery("climate".to_string());
        assert!(err.to_string().contains("climate"));
        assert_eq!(NewsgaugeError::EmptyQuery.to_string(), "search query is empty");
    }

    #[test]
    fn io_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = EngineConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
