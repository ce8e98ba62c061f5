//! Tolerance configuration for the approximate predicates.

use std::env::{self, VarError};

use once_cell::sync::Lazy;

/// Tolerance used when neither the caller nor `LINVEC_TOLERANCE` specify one.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

const TOLERANCE_VAR: &str = "LINVEC_TOLERANCE";

static TOLERANCE: Lazy<f64> = Lazy::new(|| match env::var(TOLERANCE_VAR) {
    Ok(v) => match parse_tolerance(&v) {
        Some(tol) => {
            log::trace!("using tolerance {tol} from `{TOLERANCE_VAR}`");
            tol
        }
        None => {
            log::warn!(
                "invalid value set for `{TOLERANCE_VAR}` variable: '{v}'; using {DEFAULT_TOLERANCE}"
            );
            DEFAULT_TOLERANCE
        }
    },
    Err(VarError::NotPresent) => DEFAULT_TOLERANCE,
    Err(VarError::NotUnicode(s)) => {
        log::warn!(
            "invalid value set for `{TOLERANCE_VAR}` variable: {}; using {DEFAULT_TOLERANCE}",
            s.to_string_lossy()
        );
        DEFAULT_TOLERANCE
    }
});

/// Returns the tolerance used by [`Vector::is_zero`], [`Vector::is_orthogonal_to`] and
/// [`Vector::is_parallel_to`].
///
/// This is [`DEFAULT_TOLERANCE`], unless the `LINVEC_TOLERANCE` environment variable holds a
/// positive, finite number. The variable is only read once per process.
///
/// [`Vector::is_zero`]: crate::Vector::is_zero
/// [`Vector::is_orthogonal_to`]: crate::Vector::is_orthogonal_to
/// [`Vector::is_parallel_to`]: crate::Vector::is_parallel_to
pub fn default_tolerance() -> f64 {
    *TOLERANCE
}

fn parse_tolerance(s: &str) -> Option<f64> {
    let tol = s.trim().parse::<f64>().ok()?;
    (tol.is_finite() && tol > 0.0).then_some(tol)
}
