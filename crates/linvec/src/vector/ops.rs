//! Implementations of `std::ops` and comparison traits.
//!
//! Only operations that cannot fail are exposed as operators. Vector-vector arithmetic needs a
//! dimension check, so it lives in the inherent [`Vector::add`]/[`Vector::sub`] methods instead.

use std::ops::{Div, DivAssign, Index, Mul, MulAssign, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        *self.coords == *other
    }
}

impl<const N: usize> PartialEq<Vector> for [f64; N] {
    fn eq(&self, other: &Vector) -> bool {
        *self == *other.coords
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        *self.coords == *other
    }
}

impl PartialEq<&[f64]> for Vector {
    fn eq(&self, other: &&[f64]) -> bool {
        *self.coords == **other
    }
}

/// Vectors of different dimensions are never approximately equal.
impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(mut self) -> Self::Output {
        self.scale_in_place(-1.0);
        self
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

/// Vector-Scalar multiplication (scaling).
///
/// Like [`Vector::scale`], this is not validated: a non-finite `rhs` (or overflow) yields
/// non-finite coordinates.
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.scale_in_place(rhs);
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

/// Scalar-Vector multiplication (scaling).
impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

/// Scalar-Vector multiplication (scaling).
impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs.scale(self)
    }
}

/// Vector-Scalar multiplication (scaling).
impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_in_place(rhs);
    }
}

/// Vector-Scalar division (scaling).
///
/// Dividing by zero follows IEEE-754 rules and yields infinite or `NaN` coordinates.
impl Div<f64> for Vector {
    type Output = Vector;

    fn div(mut self, rhs: f64) -> Self::Output {
        self /= rhs;
        self
    }
}

/// Vector-Scalar division (scaling).
impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Self::Output {
        self.clone() / rhs
    }
}

/// Vector-Scalar division (scaling).
///
/// Dividing by zero follows IEEE-754 rules and yields infinite or `NaN` coordinates.
impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        self.coords.iter_mut().for_each(|c| *c /= rhs);
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    use super::*;

    fn v<const N: usize>(coords: [f64; N]) -> Vector {
        Vector::new(coords).unwrap()
    }

    #[test]
    fn index() {
        let a = v([1.5, -2.0, 7.0]);
        assert_eq!(a[0], 1.5);
        assert_eq!(a[2], 7.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let _ = v([1.0, 2.0])[2];
    }

    #[test]
    fn compare_with_arrays_and_slices() {
        let a = v([1.0, 2.0]);
        assert_eq!(a, [1.0, 2.0]);
        assert_eq!([1.0, 2.0], a);
        assert_eq!(a, *[1.0, 2.0].as_slice());
        assert_eq!(a, [1.0, 2.0].as_slice());
        assert_ne!(a, [1.0, 2.0, 3.0]);
        assert_ne!(a, [1.0].as_slice());
    }

    #[test]
    fn approx() {
        let a = v([1.0, 2.0]);
        let b = v([1.0 + 1e-9, 2.0 - 1e-9]);
        assert_abs_diff_eq!(a, b, epsilon = 1e-8);
        assert_abs_diff_ne!(a, b, epsilon = 1e-10);
        assert_relative_eq!(a, b, max_relative = 1e-8);
        assert_ulps_eq!(a, v([1.0, 2.0]));

        // different dimensions never compare equal, even if the shared prefix does
        assert_abs_diff_ne!(v([1.0]), v([1.0, 0.0]), epsilon = 1.0);
    }

    #[test]
    fn scalar_ops() {
        let a = v([1.0, -2.0, 4.0]);
        assert_eq!(-&a, [-1.0, 2.0, -4.0]);
        assert_eq!(-a.clone(), [-1.0, 2.0, -4.0]);
        assert_eq!(&a * 2.0, [2.0, -4.0, 8.0]);
        assert_eq!(2.0 * &a, [2.0, -4.0, 8.0]);
        assert_eq!(a.clone() * 0.5, [0.5, -1.0, 2.0]);
        assert_eq!(0.5 * a.clone(), [0.5, -1.0, 2.0]);
        assert_eq!(&a / 2.0, [0.5, -1.0, 2.0]);
        assert_eq!(a.clone() / 4.0, [0.25, -0.5, 1.0]);

        let mut b = a.clone();
        b *= 3.0;
        assert_eq!(b, [3.0, -6.0, 12.0]);
        b /= 3.0;
        assert_eq!(b, a);
    }

    #[test]
    fn scalar_ops_are_unchecked() {
        let a = v([1.0, -2.0, 0.0]);
        let div = &a / 0.0;
        assert_eq!(div[0], f64::INFINITY);
        assert_eq!(div[1], f64::NEG_INFINITY);
        assert!(div[2].is_nan());

        assert!((&a * f64::NAN).iter().all(|c| c.is_nan()));
        assert!(v([1e300]).scale(1e10)[0].is_infinite());

        // Such results are not valid construction input.
        assert!(matches!(
            Vector::new(div.into_vec()),
            Err(crate::VectorError::InvalidArgument(_))
        ));
    }
}
