use std::str::FromStr;

use crate::{Result, VectorError};

use super::Vector;

/// Parses a list of coordinates.
///
/// Coordinates are separated by commas, or by whitespace if the input contains no commas. The
/// list may be wrapped in parentheses or square brackets, a single trailing comma is allowed, and
/// the `Vector: ` prefix written by the [`Display`][std::fmt::Display] impl is accepted too.
///
/// # Errors
///
/// - [`VectorError::TypeMismatch`] if a coordinate is not a number.
/// - [`VectorError::InvalidArgument`] if the list is empty or contains a non-finite number.
///
/// # Examples
///
/// ```
/// # use linvec::*;
/// let v: Vector = "(1, -2.5, 3e2)".parse().unwrap();
/// assert_eq!(v, [1.0, -2.5, 300.0]);
///
/// let v: Vector = "[4 5]".parse().unwrap();
/// assert_eq!(v, [4.0, 5.0]);
///
/// assert_eq!(v.to_string().parse::<Vector>().unwrap(), v);
///
/// let err = "1, two".parse::<Vector>().unwrap_err();
/// assert_eq!(err, VectorError::TypeMismatch { token: "two".into() });
/// ```
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix("Vector:").map_or(s, str::trim_start);
        let list = strip_delimiters(s).trim();

        let coords = tokens(list)
            .into_iter()
            .map(|token| {
                token.parse::<f64>().map_err(|_| VectorError::TypeMismatch {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Vector::try_from(coords)
    }
}

fn strip_delimiters(s: &str) -> &str {
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(inner) = s.strip_prefix(open).and_then(|s| s.strip_suffix(close)) {
            return inner;
        }
    }
    s
}

fn tokens(list: &str) -> Vec<&str> {
    if !list.contains(',') {
        return list.split_whitespace().collect();
    }

    let mut tokens = list.split(',').map(str::trim).collect::<Vec<_>>();
    // "(5,)" is how 1-element tuples are written.
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}
