//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use inbox_ingest::config::{Config, IdStrategy, LogFormat, StoreBackend};
    use inbox_ingest::server::builder::load_config;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== File loading ====================

    #[tokio::test]
    async fn test_load_memory_backend_file() {
        let file = write_config(
            r#"
server:
  port: 8088
store:
  backend: memory
pipeline:
  id_strategy: deterministic
logging:
  format: json
"#,
        );

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.server().port, 8088);
        assert_eq!(config.store().backend, StoreBackend::Memory);
        assert_eq!(config.pipeline().id_strategy, IdStrategy::Deterministic);
        assert_eq!(config.logging().format, LogFormat::Json);
        // Untouched sections keep their defaults
        assert_eq!(config.graph().timeout_secs, 30);
        assert_eq!(config.server().webhook_path, "/api/notifications");
    }

    #[tokio::test]
    async fn test_invalid_file_values_fail_validation() {
        let file = write_config(
            r#"
store:
  backend: memory
pipeline:
  max_concurrency: 0
"#,
        );

        let err = load_config(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Pipeline"));
    }

    #[tokio::test]
    async fn test_unparseable_file_is_config_error() {
        let file = write_config("server: [not, a, map");
        assert!(load_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let file = write_config("store:\n  backend: sqlite\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    // ==================== Defaults ====================

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let result = load_config(Path::new("/nonexistent/ingest.yaml")).await;

        // Defaults select the Cosmos backend, which needs credentials from the environment
        if std::env::var("EndPointUrl").is_err() {
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_example_config_parses() {
        let example = include_str!("../../config/ingest.yaml.example");
        let config = Config::from_yaml(example).unwrap();
        assert_eq!(config.store().partition_key_path, "/Subject");
        assert_eq!(config.store().database, "mailstore");
    }
}
