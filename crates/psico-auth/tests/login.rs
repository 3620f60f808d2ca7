use std::io::Write;

use jsonwebtoken::{EncodingKey, Header, encode};
use psico_auth::session::{SessionClaims, now_seconds};
use psico_auth::{AuthConfig, AuthError, Authenticator, LoginOutcome};

fn auth_yaml(hash: &str) -> String {
    format!(
        r#"
credentials:
  usernames:
    jsmith:
      name: John Smith
      email: jsmith@example.com
      password: "{hash}"
    rbriggs:
      name: Rebecca Briggs
      password: "{hash}"
cookie:
  name: psico_auth
  key: test-signing-key
  expiry_days: 30
"#
    )
}

fn authenticator() -> Authenticator {
    let hash = bcrypt::hash("s3cret", 4).unwrap();
    Authenticator::new(AuthConfig::from_yaml_str(&auth_yaml(&hash)).unwrap())
}

#[test]
fn correct_password_authenticates() {
    let auth = authenticator();

    match auth.login("jsmith", "s3cret") {
        LoginOutcome::Authenticated(user) => {
            assert_eq!(user.username, "jsmith");
            assert_eq!(user.name, "John Smith");
            assert_eq!(user.email.as_deref(), Some("jsmith@example.com"));
        }
        other => panic!("expected authenticated, got {other:?}"),
    }
}

#[test]
fn username_is_trimmed() {
    let auth = authenticator();
    assert!(matches!(
        auth.login("  rbriggs ", "s3cret"),
        LoginOutcome::Authenticated(_)
    ));
}

#[test]
fn wrong_password_or_unknown_user_is_incorrect() {
    let auth = authenticator();
    assert_eq!(auth.login("jsmith", "wrong"), LoginOutcome::IncorrectCredentials);
    assert_eq!(auth.login("nobody", "s3cret"), LoginOutcome::IncorrectCredentials);
}

#[test]
fn empty_fields_are_missing_credentials() {
    let auth = authenticator();
    assert_eq!(auth.login("", ""), LoginOutcome::MissingCredentials);
    assert_eq!(auth.login("jsmith", ""), LoginOutcome::MissingCredentials);
    assert_eq!(auth.login("   ", "s3cret"), LoginOutcome::MissingCredentials);
}

#[test]
fn issued_token_verifies() {
    let auth = authenticator();
    let LoginOutcome::Authenticated(user) = auth.login("jsmith", "s3cret") else {
        panic!("login should succeed");
    };

    let token = auth.issue_token(&user).unwrap();
    let verified = auth.verify_token(&token).unwrap();
    assert_eq!(verified, user);
}

#[test]
fn tampered_token_is_rejected() {
    let auth = authenticator();
    let LoginOutcome::Authenticated(user) = auth.login("jsmith", "s3cret") else {
        panic!("login should succeed");
    };
    let token = auth.issue_token(&user).unwrap();

    let forged = encode(
        &Header::default(),
        &SessionClaims::new("jsmith", "John Smith", now_seconds(), 30),
        &EncodingKey::from_secret(b"another-key"),
    )
    .unwrap();
    assert!(matches!(
        auth.verify_token(&forged),
        Err(AuthError::InvalidToken(_))
    ));

    let mut truncated = token.clone();
    truncated.truncate(token.len() - 4);
    assert!(auth.verify_token(&truncated).is_err());
    assert!(auth.verify_token("not-a-jwt").is_err());
}

#[test]
fn expired_token_is_rejected() {
    let auth = authenticator();
    let issued_long_ago = now_seconds() - 10 * 24 * 60 * 60;
    let claims = SessionClaims::new("jsmith", "John Smith", issued_long_ago, 1);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-signing-key"),
    )
    .unwrap();

    assert!(matches!(auth.verify_token(&token), Err(AuthError::TokenExpired)));
}

#[test]
fn token_for_removed_user_is_rejected() {
    let auth = authenticator();
    let claims = SessionClaims::new("ghost", "Ghost", now_seconds(), 1);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-signing-key"),
    )
    .unwrap();

    assert!(matches!(
        auth.verify_token(&token),
        Err(AuthError::UserNotFound(name)) if name == "ghost"
    ));
}

#[test]
fn plaintext_passwords_are_refused() {
    let err = AuthConfig::from_yaml_str(&auth_yaml("hunter2")).unwrap_err();
    assert!(matches!(err, AuthError::Config(_)));
}

#[test]
fn incomplete_documents_are_refused() {
    let no_users = r#"
credentials:
  usernames: {}
cookie:
  name: psico_auth
  key: k
  expiry_days: 1
"#;
    assert!(matches!(
        AuthConfig::from_yaml_str(no_users),
        Err(AuthError::Config(_))
    ));

    let no_cookie = "credentials:\n  usernames: {}\n";
    assert!(matches!(
        AuthConfig::from_yaml_str(no_cookie),
        Err(AuthError::Yaml(_))
    ));
}

#[test]
fn load_reads_from_disk() {
    let hash = bcrypt::hash("s3cret", 4).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(auth_yaml(&hash).as_bytes()).unwrap();

    let config = AuthConfig::load(file.path()).unwrap();
    assert_eq!(config.cookie.name, "psico_auth");
    assert_eq!(config.cookie.expiry_days, 30);
    assert_eq!(config.credentials.usernames.len(), 2);

    let missing = AuthConfig::load(std::path::Path::new("/nonexistent/auth.yaml"));
    assert!(matches!(missing, Err(AuthError::Io { .. })));
}

#[test]
fn token_lifetime_follows_expiry_days() {
    let claims = SessionClaims::new("jsmith", "John Smith", 1_000, 2);
    assert_eq!(claims.exp, 1_000 + 2 * 24 * 60 * 60);
}

#[test]
fn zero_day_cookie_lifetime_is_refused() {
    let hash = bcrypt::hash("s3cret", 4).unwrap();
    let yaml = auth_yaml(&hash).replace("expiry_days: 30", "expiry_days: 0");

    match AuthConfig::from_yaml_str(&yaml) {
        Err(AuthError::Config(message)) => assert!(message.contains("expiry_days")),
        other => panic!("expected config error, got {other:?}"),
    }
}
