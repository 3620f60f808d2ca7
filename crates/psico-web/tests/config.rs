use std::io::Write;
use std::path::Path;

use psico_model::ModelConfig;
use psico_model::config::DEFAULT_GEMINI_MODEL;
use psico_web::config::{ConfigError, load_config, parse_config};

#[test]
fn flat_api_key_document_is_migrated() {
    let config = parse_config("GOOGLE_API_KEY: AIzaSyExampleKey1234\n").unwrap();

    assert_eq!(
        config.model,
        ModelConfig::Gemini {
            api_key: "AIzaSyExampleKey1234".to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: None,
        }
    );
    assert_eq!(config.server.bind.port(), 8501);
    assert!(config.auth_file.is_none());
}

#[test]
fn explicit_model_section_wins_over_flat_key() {
    let config = parse_config(
        r#"
GOOGLE_API_KEY: ignored
model:
  provider: gemini
  api_key: used
  model: gemini-test
"#,
    )
    .unwrap();

    assert_eq!(config.model.model_id(), "gemini-test");
    match config.model {
        ModelConfig::Gemini { api_key, .. } => assert_eq!(api_key, "used"),
        other => panic!("expected gemini, got {other:?}"),
    }
}

#[test]
fn full_document_parses() {
    let config = parse_config(
        r#"
model:
  provider: bedrock
  region: us-east-1
  model_id: us.anthropic.claude-sonnet-4-20250514-v1:0
  credentials:
    type: profile
    profile_name: clinic
server:
  bind: 0.0.0.0:9000
auth_file: /etc/psico/auth.yaml
"#,
    )
    .unwrap();

    assert_eq!(config.model.provider(), "bedrock");
    assert_eq!(config.server.bind.to_string(), "0.0.0.0:9000");
    assert_eq!(config.auth_file.as_deref(), Some(Path::new("/etc/psico/auth.yaml")));
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(matches!(parse_config("- just\n- a list\n"), Err(ConfigError::Invalid(_))));
    assert!(matches!(parse_config("model: [unterminated"), Err(ConfigError::Yaml(_))));
    assert!(matches!(parse_config("server:\n  bind: 127.0.0.1:1\n"), Err(ConfigError::Yaml(_))));
}

#[test]
fn relative_auth_file_resolves_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "GOOGLE_API_KEY: key-1234567890\nauth_file: auth.yaml").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.auth_file, Some(dir.path().join("auth.yaml")));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_config(Path::new("/nonexistent/config.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/config.yaml"));
}
