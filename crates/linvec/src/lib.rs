//! Euclidean vectors with checked arithmetic and geometric predicates.
//!
//! # Overview
//!
//! The central type is [`Vector`], an ordered, fixed-length list of `f64` coordinates. Its
//! dimension is chosen at runtime, so operations combining two vectors check that the dimensions
//! agree and report a [`VectorError::DimensionMismatch`] otherwise.
//!
//! ```
//! # use linvec::*;
//! # fn main() -> linvec::Result<()> {
//! let a = Vector::new([3.0, 4.0])?;
//! let b = Vector::new([-4.0, 3.0])?;
//! assert_eq!(a.magnitude(), 5.0);
//! assert!(a.is_orthogonal_to(&b)?);
//! assert_eq!(a.add(&b)?, [-1.0, 7.0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Use a single numeric representation. Every coordinate is an `f64`, and so is every derived
//!   quantity (magnitudes, angles, areas). Inputs can be anything that converts into `f64`
//!   losslessly.
//! - Make every operation that can fail return a [`Result`]. Vector-vector arithmetic is therefore
//!   exposed as methods ([`Vector::add`], [`Vector::sub`], ...) rather than operator overloads.
//!   Operators are only implemented where they cannot fail (negation, scaling).
//! - Mutation is explicit: methods ending in `_in_place` rewrite the receiver, everything else
//!   returns a fresh [`Vector`].
//! - No matrices, no N-dimensional cross product, no SIMD.
//!
//! # Environment Variables
//!
//! * `LINVEC_TOLERANCE`: Overrides the tolerance used by [`Vector::is_zero`],
//!   [`Vector::is_orthogonal_to`] and [`Vector::is_parallel_to`]. Must be a positive, finite
//!   floating-point number. Defaults to [`DEFAULT_TOLERANCE`].

mod error;
mod tolerance;
mod vector;

pub use error::*;
pub use tolerance::*;
pub use vector::*;

use log::LevelFilter;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `linvec` will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` can be used to override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
