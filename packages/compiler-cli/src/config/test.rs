// Config Tests

#[cfg(test)]
mod tests {
    use crate::config::DocsConfig;
    use crate::ngtsc::logging::LogLevel;
    use std::path::{Path, PathBuf};

    mod docs_config_tests {
        use super::*;

        #[test]
        fn should_read_all_fields() {
            let config = DocsConfig::from_json(
                r#"{
                    "include": ["src/**/*.ts"],
                    "exclude": ["**/testing/**"],
                    "output": "dist/api.json",
                    "logLevel": "debug",
                    "pretty": true
                }"#,
            )
            .unwrap();

            assert_eq!(config.include, vec!["src/**/*.ts".to_string()]);
            assert_eq!(config.exclude, vec!["**/testing/**".to_string()]);
            assert_eq!(config.output, Some(PathBuf::from("dist/api.json")));
            assert_eq!(config.log_level, LogLevel::Debug);
            assert!(config.pretty);
        }

        #[test]
        fn should_fill_missing_fields_with_defaults() {
            let config = DocsConfig::from_json(r#"{"pretty": true}"#).unwrap();
            let defaults = DocsConfig::default();

            assert_eq!(config.include, defaults.include);
            assert_eq!(config.exclude, defaults.exclude);
            assert_eq!(config.log_level, LogLevel::Warn);
            assert_eq!(config.output, None);
        }

        #[test]
        fn should_reject_unknown_log_level() {
            assert!(DocsConfig::from_json(r#"{"logLevel": "loud"}"#).is_err());
        }

        #[test]
        fn should_fail_on_missing_file() {
            let err = DocsConfig::load(Path::new("no/such/ng-docs.json")).unwrap_err();
            assert!(err.to_string().contains("ng-docs.json"));
        }

        #[test]
        fn should_map_to_extractor_options() {
            let config = DocsConfig::default();
            let options = config.extractor_options();

            assert_eq!(options.include_patterns, config.include);
            assert_eq!(options.exclude_patterns, config.exclude);
        }
    }
}
