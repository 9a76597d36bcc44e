use thiserror::Error;

/// Rejected configuration values. Runtime paths never produce these; they
/// only surface when options are built from untrusted input such as DOM
/// attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("reveal threshold must be within [0, 1], got {0}")]
    Threshold(f64),
    #[error("unknown reveal mode `{0}` (expected `once` or `toggle`)")]
    RevealMode(String),
    #[error("`{value}` is not a number ({field})")]
    Number { field: &'static str, value: String },
    #[error("invalid {name} range {lo}..={hi}")]
    Range { name: &'static str, lo: f64, hi: f64 },
    #[error("parallax {name} must be finite and non-negative, got {value}")]
    Parallax { name: &'static str, value: f64 },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

pub(crate) fn parse_f64(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Number {
            field,
            value: value.to_string(),
        })
}
