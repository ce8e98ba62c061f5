use std::{fmt, slice};

use crate::{default_tolerance, Result, VectorError};

mod ops;
mod parse;

/// A Euclidean vector with a runtime dimension and `f64` coordinates.
///
/// # Construction
///
/// - [`Vector::new`] accepts any nonempty collection of values convertible to `f64`.
/// - [`Vector::zero`], [`Vector::splat`], [`Vector::unit`] and [`Vector::from_fn`] build vectors
///   of a given dimension.
/// - [`TryFrom`] is implemented for `Vec<f64>` and `&[f64]`.
/// - [`str::parse`] accepts coordinate lists like `"1, 2, 3"`, `"(1, 2)"` or `"[1 2 3]"`, as
///   well as the output of the [`Display`][fmt::Display] impl.
///
/// All of these reject empty input and non-finite coordinates. Arithmetic on a valid vector
/// follows IEEE-754 rules and is not re-validated: scaling by a non-finite number, dividing by
/// zero, or overflowing can yield infinite or `NaN` coordinates.
///
/// # Element Access
///
/// - [`Vector::dimension`] returns the number of coordinates.
/// - [`Vector::coordinates`] and the [`AsRef`] impl expose the coordinates as a slice.
/// - The [`Index`][std::ops::Index] impl can be used just like on slices.
/// - [`Vector::iter`] and `&Vector`'s [`IntoIterator`] impl iterate over the coordinates.
///
/// # Arithmetic
///
/// Operations combining two vectors return a [`Result`] and fail with
/// [`VectorError::DimensionMismatch`] if the dimensions differ. Methods ending in `_in_place`
/// modify `self`; all others leave their inputs untouched.
#[derive(Clone, PartialEq)]
pub struct Vector {
    coords: Box<[f64]>,
}

impl Vector {
    /// Creates a vector from a nonempty list of coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgument`] if `coordinates` is empty or contains a
    /// non-finite value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// let v = Vector::new([1, -2, 3]).unwrap();
    /// assert_eq!(v.dimension(), 3);
    /// assert_eq!(v, [1.0, -2.0, 3.0]);
    ///
    /// assert!(Vector::new(Vec::<f64>::new()).is_err());
    /// ```
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        Self::from_vec(coordinates.into_iter().map(Into::into).collect())
    }

    fn from_vec(coords: Vec<f64>) -> Result<Self> {
        if coords.is_empty() {
            return Err(VectorError::invalid("the coordinates must be nonempty"));
        }
        if let Some((i, c)) = coords.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(VectorError::invalid(format!("coordinate {i} is not finite ({c})")));
        }
        Ok(Self {
            coords: coords.into_boxed_slice(),
        })
    }

    /// Wraps coordinates computed from other (already valid) vectors.
    fn from_computed(coords: Vec<f64>) -> Self {
        debug_assert!(!coords.is_empty());
        Self {
            coords: coords.into_boxed_slice(),
        }
    }

    /// Creates a `dimension`-dimensional vector where each coordinate is produced by invoking
    /// `cb` with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// let v = Vector::from_fn(3, |i| i as f64 * 10.0).unwrap();
    /// assert_eq!(v, [0.0, 10.0, 20.0]);
    /// ```
    pub fn from_fn<F>(dimension: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize) -> f64,
    {
        Self::from_vec((0..dimension).map(cb).collect())
    }

    /// Creates a `dimension`-dimensional vector with every coordinate set to `value`.
    pub fn splat(dimension: usize, value: f64) -> Result<Self> {
        Self::from_fn(dimension, |_| value)
    }

    /// Creates the `dimension`-dimensional zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// let zero = Vector::zero(2).unwrap();
    /// assert_eq!(zero, [0.0, 0.0]);
    /// assert!(zero.is_zero());
    /// ```
    pub fn zero(dimension: usize) -> Result<Self> {
        Self::splat(dimension, 0.0)
    }

    /// Creates a unit vector pointing along coordinate axis `axis`.
    ///
    /// # Errors
    ///
    /// Fails with [`VectorError::InvalidArgument`] if `dimension` is 0 or `axis` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// let y = Vector::unit(3, 1).unwrap();
    /// assert_eq!(y, [0.0, 1.0, 0.0]);
    /// assert!(Vector::unit(3, 3).is_err());
    /// ```
    pub fn unit(dimension: usize, axis: usize) -> Result<Self> {
        if axis >= dimension {
            return Err(VectorError::invalid(format!(
                "axis {axis} is out of range for a {dimension}-dimensional vector"
            )));
        }
        Self::from_fn(dimension, |i| if i == axis { 1.0 } else { 0.0 })
    }

    /// Returns the number of coordinates of this vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Returns the coordinates as a slice.
    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coords
    }

    /// Returns an iterator over the coordinates.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.coords.iter()
    }

    /// Converts this vector into a [`Vec`] of its coordinates.
    pub fn into_vec(self) -> Vec<f64> {
        self.coords.into_vec()
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            })
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(Self::from_computed(
            self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b)).collect(),
        ))
    }

    fn zip_with_in_place(
        &mut self,
        other: &Self,
        f: impl Fn(&mut f64, f64),
    ) -> Result<&mut Self> {
        self.check_dimension(other)?;
        self.coords
            .iter_mut()
            .zip(other.iter())
            .for_each(|(lhs, &rhs)| f(lhs, rhs));
        Ok(self)
    }

    /// Element-wise addition.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// # fn main() -> linvec::Result<()> {
    /// let sum = Vector::new([1.0, 2.0])?.add(&Vector::new([10.0, 20.0])?)?;
    /// assert_eq!(sum, [11.0, 22.0]);
    ///
    /// let err = Vector::new([1.0])?.add(&Vector::new([1.0, 2.0])?).unwrap_err();
    /// assert_eq!(err, VectorError::DimensionMismatch { left: 1, right: 2 });
    /// # Ok(())
    /// # }
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise subtraction.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Adds `other` to `self` element-wise, and returns `self` for further chaining.
    ///
    /// On error, `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// # fn main() -> linvec::Result<()> {
    /// let mut v = Vector::new([1.0, 1.0])?;
    /// v.add_in_place(&Vector::new([2.0, 3.0])?)?
    ///     .sub_in_place(&Vector::new([1.0, 1.0])?)?;
    /// assert_eq!(v, [2.0, 3.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_in_place(other, |lhs, rhs| *lhs += rhs)
    }

    /// Subtracts `other` from `self` element-wise, and returns `self` for further chaining.
    ///
    /// On error, `self` is left unchanged.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_in_place(other, |lhs, rhs| *lhs -= rhs)
    }

    /// Returns a copy of this vector with every coordinate multiplied by `scalar`.
    ///
    /// This is equivalent to `self * scalar`. `scalar` is not validated: a non-finite `scalar`
    /// (or an overflowing product) yields non-finite coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// let v = Vector::new([1.0, -2.0]).unwrap();
    /// assert_eq!(v.scale(3.0), [3.0, -6.0]);
    /// assert_eq!(v, [1.0, -2.0]);
    /// ```
    pub fn scale(&self, scalar: f64) -> Self {
        Self::from_computed(self.iter().map(|c| c * scalar).collect())
    }

    /// Multiplies every coordinate of `self` by `scalar`, and returns `self` for further chaining.
    ///
    /// Like [`Vector::scale`], this does not validate `scalar`.
    pub fn scale_in_place(&mut self, scalar: f64) -> &mut Self {
        self.coords.iter_mut().for_each(|c| *c *= scalar);
        self
    }

    /// Returns the squared magnitude of this vector.
    ///
    /// Unlike [`Vector::magnitude`], this squares the coordinates directly, so it overflows to
    /// infinity (or underflows to zero) for coordinates beyond roughly `1e154` (or below `1e-154`).
    pub fn magnitude_squared(&self) -> f64 {
        self.iter().map(|c| c * c).sum()
    }

    fn max_abs(&self) -> f64 {
        self.iter().fold(0.0, |max, c| max.max(c.abs()))
    }

    /// Returns the Euclidean length of this vector.
    ///
    /// The coordinates are divided by the largest one before squaring, so the result only
    /// overflows if the length itself exceeds [`f64::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// assert_eq!(Vector::new([3.0, 4.0]).unwrap().magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        let max = self.max_abs();
        if max == 0.0 {
            return 0.0;
        }
        let sum = self
            .iter()
            .map(|c| {
                let c = c / max;
                c * c
            })
            .sum::<f64>();
        max * sum.sqrt()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector pointing in the same
    /// direction.
    ///
    /// # Errors
    ///
    /// The zero vector has no direction, so normalizing it fails with
    /// [`VectorError::DivisionByZero`]. Vectors that are merely *close* to zero (see
    /// [`Vector::is_zero`]) are normalized normally.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// let z = Vector::new([0.0, 0.0, 4.0]).unwrap().normalized().unwrap();
    /// assert_eq!(z, [0.0, 0.0, 1.0]);
    ///
    /// assert_eq!(Vector::zero(3).unwrap().normalized(), Err(VectorError::DivisionByZero));
    /// ```
    pub fn normalized(&self) -> Result<Self> {
        let max = self.max_abs();
        if max == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        // Bring the largest coordinate to 1 first; `1 / max` itself may overflow.
        let scaled = self / max;
        let magnitude = scaled.magnitude();
        Ok(scaled / magnitude)
    }

    /// Computes the dot product (inner product) of `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative angle of the two
    /// vectors:
    /// - If the dot product is greater than zero, the angle between the vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::angle_to`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// # fn main() -> linvec::Result<()> {
    /// let a = Vector::new([1, 3, -5])?;
    /// let b = Vector::new([4, -2, -1])?;
    /// assert_eq!(a.dot(&b)?, 3.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Cosine of the angle between `self` and `other`, clamped to `[-1, 1]`.
    fn cos_angle_within(&self, other: &Self, tolerance: f64) -> Result<f64> {
        self.check_dimension(other)?;
        if self.is_zero_within(tolerance) || other.is_zero_within(tolerance) {
            return Err(VectorError::domain(
                "cannot compute an angle with the zero vector",
            ));
        }
        let cos = self.normalized()?.dot(&other.normalized()?)?;
        // Rounding can push the dot product of two unit vectors slightly outside of `acos`'s domain.
        Ok(cos.clamp(-1.0, 1.0))
    }

    /// Computes the smallest angle between `self` and `other`, in radians.
    ///
    /// The result is in the range `[0, π]`.
    ///
    /// # Errors
    ///
    /// - [`VectorError::DimensionMismatch`] if the dimensions differ.
    /// - [`VectorError::Domain`] if either vector [is zero][Vector::is_zero].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// use std::f64::consts::PI;
    /// # fn main() -> linvec::Result<()> {
    /// let x = Vector::unit(2, 0)?;
    /// let y = Vector::unit(2, 1)?;
    /// assert!((x.angle_to(&y)? - PI / 2.0).abs() < 1e-12);
    /// assert!((x.angle_to(&-&x)? - PI).abs() < 1e-12);
    /// # Ok(())
    /// # }
    /// ```
    pub fn angle_to(&self, other: &Self) -> Result<f64> {
        Ok(self.cos_angle_within(other, default_tolerance())?.acos())
    }

    /// Like [`Vector::angle_to`], but returns the angle in degrees.
    pub fn angle_to_degrees(&self, other: &Self) -> Result<f64> {
        Ok(self.angle_to(other)?.to_degrees())
    }

    /// Returns whether the magnitude of this vector is below the
    /// [default tolerance][crate::default_tolerance].
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(default_tolerance())
    }

    /// Returns whether the magnitude of this vector is below `tolerance`.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    /// Returns whether `self` and `other` are orthogonal, ie. whether their dot product is within
    /// the [default tolerance][crate::default_tolerance] of zero.
    ///
    /// The zero vector is orthogonal to every vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// # fn main() -> linvec::Result<()> {
    /// let a = Vector::new([-2.328, -7.284, -1.214])?;
    /// let b = Vector::new([-1.821, 1.072, -2.94])?;
    /// assert!(a.is_orthogonal_to(&b)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_orthogonal_to(&self, other: &Self) -> Result<bool> {
        self.is_orthogonal_to_within(other, default_tolerance())
    }

    /// Returns whether the absolute value of the dot product of `self` and `other` is below
    /// `tolerance`.
    pub fn is_orthogonal_to_within(&self, other: &Self, tolerance: f64) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// Returns whether `self` and `other` point in the same or in opposite directions.
    ///
    /// The zero vector is parallel to every vector.
    ///
    /// Two nonzero vectors are considered parallel if the cosine of their angle is within the
    /// [default tolerance][crate::default_tolerance] of `1` or `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// # fn main() -> linvec::Result<()> {
    /// let a = Vector::new([-7.579, -7.88])?;
    /// let b = Vector::new([22.737, 23.64])?;
    /// assert!(a.is_parallel_to(&b)?);
    /// assert!(!a.is_orthogonal_to(&b)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        self.is_parallel_to_within(other, default_tolerance())
    }

    /// Like [`Vector::is_parallel_to`], with an explicit tolerance.
    ///
    /// `tolerance` is used both to detect zero vectors and to compare the cosine of the angle
    /// against `±1`.
    pub fn is_parallel_to_within(&self, other: &Self, tolerance: f64) -> Result<bool> {
        self.check_dimension(other)?;
        if self.is_zero_within(tolerance) || other.is_zero_within(tolerance) {
            return Ok(true);
        }
        let cos = self.cos_angle_within(other, tolerance)?;
        Ok(1.0 - cos.abs() < tolerance)
    }

    /// Returns the projection of `self` onto the direction of `basis`.
    ///
    /// # Errors
    ///
    /// - [`VectorError::DimensionMismatch`] if the dimensions differ.
    /// - [`VectorError::DivisionByZero`] if `basis` is the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// # fn main() -> linvec::Result<()> {
    /// let v = Vector::new([2.0, 5.0])?;
    /// let x = Vector::new([3.0, 0.0])?;
    /// assert_eq!(v.component_parallel_to(&x)?, [2.0, 0.0]);
    /// assert_eq!(v.component_orthogonal_to(&x)?, [0.0, 5.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn component_parallel_to(&self, basis: &Self) -> Result<Self> {
        self.check_dimension(basis)?;
        let unit = basis.normalized()?;
        let weight = self.dot(&unit)?;
        Ok(unit.scale(weight))
    }

    /// Returns the component of `self` that is orthogonal to `basis`.
    ///
    /// Adding this to [`Vector::component_parallel_to`] yields `self` again (up to rounding).
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self> {
        self.sub(&self.component_parallel_to(basis)?)
    }

    fn embed_in_3d(&self) -> Option<[f64; 3]> {
        match &*self.coords {
            &[x, y] => Some([x, y, 0.0]),
            &[x, y, z] => Some([x, y, z]),
            _ => None,
        }
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a 3-dimensional vector that is perpendicular to both `self` and `other`. Its
    /// direction depends on the order of the arguments: swapping them will invert the direction
    /// of the resulting vector.
    ///
    /// 2-dimensional operands are treated as lying in the XY plane (their Z coordinate is taken
    /// to be 0), so a 2D vector can be crossed with another 2D or with a 3D vector.
    ///
    /// # Errors
    ///
    /// Fails with [`VectorError::Domain`] if either operand is neither 2- nor 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linvec::*;
    /// # fn main() -> linvec::Result<()> {
    /// let x = Vector::unit(3, 0)?;
    /// let y = Vector::unit(3, 1)?;
    /// let z = Vector::unit(3, 2)?;
    /// assert_eq!(x.cross(&y)?, z);
    /// assert_eq!(y.cross(&x)?, -z);
    ///
    /// let x2 = Vector::new([1.0, 0.0])?;
    /// let y2 = Vector::new([0.0, 1.0])?;
    /// assert_eq!(x2.cross(&y2)?, [0.0, 0.0, 1.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let (Some([x1, y1, z1]), Some([x2, y2, z2])) = (self.embed_in_3d(), other.embed_in_3d())
        else {
            return Err(VectorError::domain(format!(
                "the cross product is only defined for 2- and 3-dimensional vectors (got {} and {})",
                self.dimension(),
                other.dimension(),
            )));
        };
        if self.dimension() == 2 || other.dimension() == 2 {
            log::trace!(
                "embedding {}D x {}D cross product operands in 3D",
                self.dimension(),
                other.dimension()
            );
        }

        #[rustfmt::skip]
        let cross = vec![
            y1 * z2 - y2 * z1,
            -(x1 * z2 - x2 * z1),
            x1 * y2 - x2 * y1,
        ];
        Ok(Self::from_computed(cross))
    }

    /// Returns the area of the parallelogram spanned by `self` and `other`.
    ///
    /// Accepts the same inputs as [`Vector::cross`].
    pub fn area_of_parallelogram_with(&self, other: &Self) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    /// Returns the area of the triangle spanned by `self` and `other`.
    ///
    /// Accepts the same inputs as [`Vector::cross`].
    pub fn area_of_triangle_with(&self, other: &Self) -> Result<f64> {
        Ok(self.area_of_parallelogram_with(other)? / 2.0)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Self::from_vec(value)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Self::from_vec(value.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.into_vec()
    }
}

impl AsRef<[f64]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("Vector");
        for elem in self.iter() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        f.write_str("Vector: ")?;
        let mut tup = f.debug_tuple("");
        for elem in self.iter() {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}
