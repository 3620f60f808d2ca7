use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model configuration error: {0}")]
    Config(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("model service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned no text")]
    EmptyResponse,
}

/// Join an error and all of its sources into one line.
///
/// SDK and HTTP client errors keep the useful detail (connection refused,
/// bad credentials) in the source chain, not in their own `Display`.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
