//! Error taxonomy for parameter intake and presentation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Input was not a number, or was outside the documented range.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The window, canvas or event pump could not be created.
    #[error("rendering unavailable: {0}")]
    RenderingUnavailable(String),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn rendering(err: impl std::fmt::Display) -> Self {
        SimError::RenderingUnavailable(err.to_string())
    }
}

/// Rejects NaN and infinities.
pub fn require_finite(field: &'static str, value: f32) -> Result<f32, SimError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::invalid(field, format!("{value} is not a finite number")))
    }
}

/// Rejects values outside `[min, max]`.
pub fn require_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<f32, SimError> {
    let value = require_finite(field, value)?;
    if value < min || value > max {
        return Err(SimError::invalid(
            field,
            format!("{value} is outside [{min}, {max}]"),
        ));
    }
    Ok(value)
}
