//! Error types for strategy resolution, projections and rebalancing checks

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Everything the advisor can reject.
///
/// An unrecognized risk label is deliberately absent: it resolves to the
/// Moderate profile instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("projection value is no longer representable after month {month}")]
    Overflow { month: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("holdings file error: {0}")]
    Csv(#[from] csv::Error),
}

impl AdvisorError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AdvisorError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable tag for structured error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            AdvisorError::InvalidInput { .. } => "invalid_input",
            AdvisorError::Overflow { .. } => "overflow",
            AdvisorError::Io(_) => "io",
            AdvisorError::Csv(_) => "csv",
        }
    }
}

/// Reject negative, NaN and infinite money amounts
pub(crate) fn ensure_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(AdvisorError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(AdvisorError::invalid(field, format!("{} must not be negative", value)));
    }
    Ok(value)
}
