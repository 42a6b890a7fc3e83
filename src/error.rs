use thiserror::Error;

/// Why a single component could not be installed on the page.
///
/// Setup errors never abort the whole enhancement run; the component that hit
/// one is skipped and the rest carry on.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("`{0}` is not a valid selector")]
    InvalidSelector(String),

    #[error("element matching `{selector}` is not {expected}")]
    WrongElementKind {
        selector: String,
        expected: &'static str,
    },

    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),

    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Value(String),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
