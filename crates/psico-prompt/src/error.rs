use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt template parse error: {0}")]
    TemplateParse(String),

    #[error("prompt rendering failed: {0}")]
    TemplateRender(String),
}

impl From<tera::Error> for PromptError {
    fn from(e: tera::Error) -> Self {
        PromptError::TemplateRender(e.to_string())
    }
}
