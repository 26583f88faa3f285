use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::trace;

use crate::error::PolyError;
use crate::utils::{clamp_exponent, exponent_index};

/// Dense univariate polynomial with `i32` coefficients.
///
/// Coefficients are stored in ascending order of exponent:
/// `coeffs[i]` is the coefficient of `x^i`. The buffer always holds at least
/// one entry and only ever grows; trailing zero coefficients are kept.
///
/// Equality is structural: two polynomials are equal only if their buffers
/// have the same length and the same contents. Use [`Poly::value_eq`] to
/// compare mathematical values.
///
/// Coefficient arithmetic wraps on `i32` overflow.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: Vec<i32>,
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Poly {
    /// Create the polynomial `coeff * x^exponent`.
    ///
    /// A negative exponent is clamped to 0. The buffer is sized to hold
    /// `exponent + 1` coefficients, all zero except the seeded one.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Poly;
    ///
    /// let p = Poly::new(3, 2); // 3x^2
    /// assert_eq!(p.max_exponent(), 2);
    /// assert_eq!(p.coefficients(), &[0, 0, 3]);
    ///
    /// let q = Poly::new(5, -4); // clamped to 5x^0
    /// assert_eq!(q.coefficients(), &[5]);
    /// ```
    pub fn new(coeff: i32, exponent: i32) -> Self {
        let max_exponent = clamp_exponent(exponent);
        let mut coeffs = vec![0; max_exponent + 1];
        coeffs[max_exponent] = coeff;
        Self { coeffs }
    }

    /// Create the zero polynomial with a single stored coefficient.
    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    /// Adopt a coefficient buffer in ascending order of exponent.
    ///
    /// Trailing zeros are kept. An empty buffer becomes `[0]`.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Poly;
    ///
    /// let p = Poly::from_coefficients(vec![5, -1, 3, 0]);
    /// assert_eq!(p.max_exponent(), 3);
    /// assert_eq!(p.degree(), Some(2));
    /// ```
    pub fn from_coefficients(coeffs: Vec<i32>) -> Self {
        if coeffs.is_empty() {
            Self::zero()
        } else {
            Self { coeffs }
        }
    }

    /// Create a polynomial with `max_exponent + 1` coefficients drawn
    /// uniformly from `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(
        rng: &mut R,
        max_exponent: usize,
        range: core::ops::RangeInclusive<i32>,
    ) -> Self {
        let coeffs = (0..=max_exponent)
            .map(|_| rng.gen_range(range.clone()))
            .collect();
        Self { coeffs }
    }

    /// Highest exponent with allocated storage.
    ///
    /// This is not necessarily the exponent of a nonzero term; see
    /// [`Poly::degree`].
    pub fn max_exponent(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Highest exponent with a nonzero coefficient, or `None` if every
    /// stored coefficient is zero.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0)
    }

    /// Check whether every stored coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Get a slice of all stored coefficients.
    pub fn coefficients(&self) -> &[i32] {
        &self.coeffs
    }

    /// Get the coefficient of `x^exponent`.
    ///
    /// Returns 0 for negative exponents and for exponents beyond
    /// [`Poly::max_exponent`].
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Poly;
    ///
    /// let p = Poly::new(4, 1);
    /// assert_eq!(p.coefficient(1), 4);
    /// assert_eq!(p.coefficient(0), 0);
    /// assert_eq!(p.coefficient(-3), 0);
    /// assert_eq!(p.coefficient(100), 0);
    /// ```
    pub fn coefficient(&self, exponent: i32) -> i32 {
        exponent_index(exponent).map_or(0, |i| self.coeff_at(i))
    }

    /// Set the coefficient of `x^exponent`, growing storage if needed.
    ///
    /// Negative exponents are ignored. Storing 0 never shrinks the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Poly;
    ///
    /// let mut p = Poly::new(2, 0);
    /// p.set_coefficient(7, 4);
    /// assert_eq!(p.max_exponent(), 4);
    /// assert_eq!(p.coefficients(), &[2, 0, 0, 0, 7]);
    /// ```
    pub fn set_coefficient(&mut self, coeff: i32, exponent: i32) {
        let Some(index) = exponent_index(exponent) else {
            trace!(coeff, exponent, "ignoring negative exponent");
            return;
        };
        if index >= self.coeffs.len() {
            self.grow_to(index);
        }
        self.coeffs[index] = coeff;
    }

    /// Like [`Poly::set_coefficient`], but reports allocation failure
    /// instead of aborting.
    ///
    /// On error the polynomial is left exactly as it was.
    pub fn try_set_coefficient(&mut self, coeff: i32, exponent: i32) -> Result<(), PolyError> {
        let Some(index) = exponent_index(exponent) else {
            trace!(coeff, exponent, "ignoring negative exponent");
            return Ok(());
        };
        if index >= self.coeffs.len() {
            self.try_grow_to(index)?;
        }
        self.coeffs[index] = coeff;
        Ok(())
    }

    /// Evaluate the polynomial at `x` using Horner's method.
    ///
    /// Arithmetic wraps on overflow.
    pub fn eval(&self, x: i32) -> i32 {
        self.coeffs
            .iter()
            .rev()
            .fold(0i32, |acc, &c| acc.wrapping_mul(x).wrapping_add(c))
    }

    /// Compare mathematical values, ignoring trailing stored zeros.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Poly;
    ///
    /// let padded = Poly::new(0, 5);
    /// let zero = Poly::default();
    /// assert_ne!(padded, zero);
    /// assert!(padded.value_eq(&zero));
    /// ```
    pub fn value_eq(&self, other: &Self) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|i| self.coeff_at(i) == other.coeff_at(i))
    }

    #[inline]
    fn coeff_at(&self, index: usize) -> i32 {
        self.coeffs.get(index).copied().unwrap_or(0)
    }

    /// Extend storage with zeros so that `max_exponent` is addressable.
    fn grow_to(&mut self, max_exponent: usize) {
        trace!(from = self.max_exponent(), to = max_exponent, "growing coefficient buffer");
        self.coeffs.resize(max_exponent + 1, 0);
    }

    fn try_grow_to(&mut self, max_exponent: usize) -> Result<(), PolyError> {
        let requested = max_exponent + 1;
        self.coeffs
            .try_reserve_exact(requested - self.coeffs.len())
            .map_err(|_| PolyError::CapacityOverflow { requested })?;
        self.grow_to(max_exponent);
        Ok(())
    }

    /// Fold `rhs` into `self` term by term, growing to cover `rhs`.
    fn combine_with(&mut self, rhs: &Poly, op: impl Fn(i32, i32) -> i32) {
        if rhs.coeffs.len() > self.coeffs.len() {
            self.grow_to(rhs.max_exponent());
        }
        for (lhs, &r) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *lhs = op(*lhs, r);
        }
    }

    /// Naive O(n*m) convolution.
    ///
    /// The product always stores `self.max_exponent() + rhs.max_exponent()`
    /// as its highest exponent, even when leading terms cancel to zero.
    fn product(&self, rhs: &Poly) -> Poly {
        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![0i32; n + m - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].wrapping_add(a.wrapping_mul(b));
            }
        }

        Poly { coeffs }
    }
}

/* ---- Compound assignment ---- */

impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        self.combine_with(rhs, i32::wrapping_add);
    }
}

impl AddAssign for Poly {
    fn add_assign(&mut self, rhs: Poly) {
        *self += &rhs;
    }
}

impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, rhs: &Poly) {
        self.combine_with(rhs, i32::wrapping_sub);
    }
}

impl SubAssign for Poly {
    fn sub_assign(&mut self, rhs: Poly) {
        *self -= &rhs;
    }
}

impl MulAssign<&Poly> for Poly {
    /// Replaces `self` with the full product; the old buffer is dropped.
    fn mul_assign(&mut self, rhs: &Poly) {
        *self = self.product(rhs);
    }
}

impl MulAssign for Poly {
    fn mul_assign(&mut self, rhs: Poly) {
        *self *= &rhs;
    }
}

/* ---- Arithmetic operators ---- */

impl Add<&Poly> for Poly {
    type Output = Poly;

    fn add(mut self, rhs: &Poly) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Self::Output {
        self + &rhs
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Self::Output {
        self.clone() + rhs
    }
}

impl Sub<&Poly> for Poly {
    type Output = Poly;

    fn sub(mut self, rhs: &Poly) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Self::Output {
        self - &rhs
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Self::Output {
        self.clone() - rhs
    }
}

impl Mul<&Poly> for Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.product(rhs)
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Self::Output {
        self.product(&rhs)
    }
}

impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.product(rhs)
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        let coeffs = self.coeffs.into_iter().map(i32::wrapping_neg).collect();
        Poly { coeffs }
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Poly").field(&self.coeffs).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize the whole stored buffer, trailing zeros included
        self.coeffs.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = Vec::<i32>::deserialize(deserializer)?;
        if coeffs.is_empty() {
            return Err(serde::de::Error::invalid_length(
                0,
                &"at least one coefficient",
            ));
        }
        Ok(Self { coeffs })
    }
}
