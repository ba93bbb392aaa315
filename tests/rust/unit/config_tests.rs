//! Configuration loading from environment and YAML files

#[cfg(test)]
mod config_tests {
    use serial_test::serial;
    use sparql_features::config::{ConfigError, ExtractorConfig};
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var("SPARQL_FEATURES_NAMESPACE");
        std::env::remove_var("SPARQL_FEATURES_MAX_DEPTH");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = ExtractorConfig::from_env().unwrap();
        assert_eq!(config.namespace, "http://lsq.aksw.org/vocab#");
        assert_eq!(config.max_nesting_depth, 256);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SPARQL_FEATURES_NAMESPACE", "http://example.org/features/");
        std::env::set_var("SPARQL_FEATURES_MAX_DEPTH", "64");
        let config = ExtractorConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.namespace, "http://example.org/features/");
        assert_eq!(config.max_nesting_depth, 64);
    }

    #[test]
    #[serial]
    fn test_from_env_unparsable_depth() {
        clear_env();
        std::env::set_var("SPARQL_FEATURES_MAX_DEPTH", "deep");
        let result = ExtractorConfig::from_env();
        clear_env();

        match result {
            Err(ConfigError::Parse { field, value, .. }) => {
                assert_eq!(field, "SPARQL_FEATURES_MAX_DEPTH");
                assert_eq!(value, "deep");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_depth() {
        clear_env();
        std::env::set_var("SPARQL_FEATURES_MAX_DEPTH", "0");
        let result = ExtractorConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "namespace: \"http://example.org/v#\"").unwrap();
        writeln!(file, "max_nesting_depth: 12").unwrap();

        let config = ExtractorConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.namespace, "http://example.org/v#");
        assert_eq!(config.max_nesting_depth, 12);
    }

    #[test]
    fn test_from_yaml_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "namespace: \"http://example.org/v\"").unwrap();
        writeln!(file, "max_nesting_depth: 12").unwrap();

        let result = ExtractorConfig::from_yaml_file(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExtractorConfig::from_yaml_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
