//! Interpretation of numeric oracle replies.

use crate::errors::OracleError;

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to the nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        tracing::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        tracing::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// Parse a reply that should contain nothing but a single float.
///
/// Surrounding whitespace is ignored; anything else, including non-finite
/// values, is a malformed reply.
pub fn parse_score(reply: &str) -> Result<f64, OracleError> {
    let trimmed = reply.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(OracleError::MalformedScore {
            reply: trimmed.to_string(),
        }),
    }
}

/// Parse a reply and clamp it into [0, 1].
pub fn parse_unit_score(reply: &str) -> Result<f64, OracleError> {
    parse_score(reply).map(|v| clamp_score(v, 0.0, 1.0))
}
