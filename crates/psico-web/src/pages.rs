//! HTML pages rendered with Tera.
//!
//! Templates are embedded at compile time and auto-escaped, so patient data
//! is always inserted as text. The report body is the one exception: it is
//! pre-rendered by [`markdown::render`].

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use psico_core::models::intake::{Gender, IntakeForm, TherapeuticApproach};
use psico_core::models::report::GeneratedReport;

use crate::error::WebError;
use crate::markdown;
use crate::session::Session;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("form.html", include_str!("../templates/form.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("report.html", include_str!("../templates/report.html")),
];

/// A message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

#[derive(Serialize)]
struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct UserView<'a> {
    username: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct ReportView<'a> {
    html: String,
    model_id: &'a str,
    generated_at: String,
}

pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, WebError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// The intake form, optionally with a notice and a generated report.
    pub fn form(
        &self,
        session: &Session,
        auth_enabled: bool,
        form: &IntakeForm,
        notice: Option<&Notice>,
        report: Option<&GeneratedReport>,
    ) -> Result<Html<String>, WebError> {
        let mut context = self.base_context(session, auth_enabled);
        context.insert("form", form);
        context.insert("genders", &gender_options(&form.gender));
        context.insert("approaches", &approach_options(&form.preferred_approach));
        context.insert("prior_diagnosis", &form.prior_diagnosis_selected());
        context.insert("notice", &notice);
        context.insert(
            "report",
            &report.map(|r| ReportView {
                html: markdown::render(&r.text),
                model_id: &r.model_id,
                generated_at: r.generated_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            }),
        );

        Ok(Html(self.tera.render("form.html", &context)?))
    }

    pub fn login(
        &self,
        session: &Session,
        username: &str,
        notice: Option<&Notice>,
    ) -> Result<Html<String>, WebError> {
        let mut context = self.base_context(session, true);
        context.insert("username", username);
        context.insert("notice", &notice);

        Ok(Html(self.tera.render("login.html", &context)?))
    }

    fn base_context(&self, session: &Session, auth_enabled: bool) -> Context {
        let mut context = Context::new();
        context.insert("theme", session.theme.as_str());
        context.insert("auth_enabled", &auth_enabled);
        context.insert(
            "user",
            &session.user.as_ref().map(|u| UserView {
                username: &u.username,
                name: &u.name,
            }),
        );
        context
    }
}

fn gender_options(current: &str) -> Vec<SelectOption> {
    Gender::ALL
        .into_iter()
        .map(|g| SelectOption {
            value: g.as_str(),
            label: g.label(),
            selected: g.as_str() == current || (current.is_empty() && g == Gender::default()),
        })
        .collect()
}

fn approach_options(current: &str) -> Vec<SelectOption> {
    TherapeuticApproach::ALL
        .into_iter()
        .map(|a| SelectOption {
            value: a.as_str(),
            label: a.label(),
            selected: a.as_str() == current
                || (current.is_empty() && a == TherapeuticApproach::default()),
        })
        .collect()
}
