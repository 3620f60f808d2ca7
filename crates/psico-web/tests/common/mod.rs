#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Request, Response};
use psico_auth::{AuthConfig, Authenticator};
use psico_model::{ModelError, ReportModel};
use psico_web::state::AppState;

/// Model double that counts calls and replies with a fixed result.
pub struct FakeModel {
    calls: AtomicUsize,
    reply: Result<String, String>,
    pub last_prompt: std::sync::Mutex<Option<String>>,
}

impl FakeModel {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: Ok(text.to_string()),
            last_prompt: std::sync::Mutex::new(None),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: Err(message.to_string()),
            last_prompt: std::sync::Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportModel for FakeModel {
    fn model_id(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ModelError::Invocation(message.clone())),
        }
    }
}

pub const PASSWORD: &str = "s3cret";

pub fn authenticator() -> Authenticator {
    let hash = bcrypt::hash(PASSWORD, 4).unwrap();
    let yaml = format!(
        r#"
credentials:
  usernames:
    jsmith:
      name: John Smith
      password: "{hash}"
cookie:
  name: psico_auth
  key: test-signing-key
  expiry_days: 30
"#
    );
    Authenticator::new(AuthConfig::from_yaml_str(&yaml).unwrap())
}

pub fn state(model: Arc<FakeModel>, auth: Option<Authenticator>) -> AppState {
    AppState::new(model, auth).unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` part of the first `Set-Cookie` header.
pub fn set_cookie_pair(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub const VALID_FORM: &str = "name=Ana&age=30&gender=female&consult_reason=anxiety\
&has_prior_diagnosis=no&main_symptoms=insomnia&preferred_approach=cbt";
