// Arithmetic operations for Vector3

use super::vector3::Vector3;
use crate::diagnostics::{report, Diagnostic};
use num_traits::Zero;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Vector3 {
    /// Divides every component by `c`, returning the division-by-zero diagnostic if any
    ///
    /// A zero divisor is reported as [`Diagnostic::DivideByZero`] but the
    /// division still happens, so the result carries infinities and/or NaNs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::{Diagnostic, Vector3};
    ///
    /// let (v, diagnostic) = Vector3::new(1.0, 0.0, -1.0).div_checked(0.0);
    /// assert_eq!(diagnostic, Some(Diagnostic::DivideByZero));
    /// assert_eq!(v.x, f64::INFINITY);
    /// assert!(v.y.is_nan());
    /// ```
    pub fn div_checked(&self, c: f64) -> (Vector3, Option<Diagnostic>) {
        let diagnostic = (c == 0.0).then(|| report(Diagnostic::DivideByZero));
        let one_over_c = 1.0 / c;
        (*self * one_over_c, diagnostic)
    }

    /// In-place form of [`div_checked`](Self::div_checked), reporting
    /// [`Diagnostic::DivideAssignByZero`]
    pub fn div_assign_checked(&mut self, c: f64) -> Option<Diagnostic> {
        let diagnostic = (c == 0.0).then(|| report(Diagnostic::DivideAssignByZero));
        *self *= 1.0 / c;
        diagnostic
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        self.div_checked(scalar).0
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, scalar: f64) {
        self.div_assign_checked(scalar);
    }
}

impl<'a> Add<&'a Vector3> for &'a Vector3 {
    type Output = Vector3;

    fn add(self, other: &'a Vector3) -> Vector3 {
        *self + *other
    }
}

impl<'a> Sub<&'a Vector3> for &'a Vector3 {
    type Output = Vector3;

    fn sub(self, other: &'a Vector3) -> Vector3 {
        *self - *other
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Vector3>>(iter: I) -> Vector3 {
        iter.fold(Vector3::zeros(), |acc, v| acc + v)
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::zeros()
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        // Addition
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(&a + &b, Vector3::new(5.0, 7.0, 9.0));

        // Subtraction
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(&b - &a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        // Scalar multiplication
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));

        // Scalar division
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_assign_operations() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= Vector3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
        v *= 4.0;
        assert_eq!(v, Vector3::new(0.0, 4.0, 8.0));
        v /= 2.0;
        assert_eq!(v, Vector3::new(0.0, 2.0, 4.0));
    }

    #[test]
    fn test_division_by_zero_proceeds() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        let (q, diagnostic) = v.div_checked(0.0);
        assert_eq!(diagnostic, Some(Diagnostic::DivideByZero));
        assert_eq!(q.x, f64::INFINITY);
        assert_eq!(q.y, f64::NEG_INFINITY);
        assert!(q.z.is_nan());

        let q = v / 0.0;
        assert!(!q.x.is_finite());

        let mut w = Vector3::new(2.0, 0.0, 0.0);
        assert_eq!(w.div_assign_checked(0.0), Some(Diagnostic::DivideAssignByZero));
        assert_eq!(w.x, f64::INFINITY);
        assert!(w.y.is_nan());

        let mut u = Vector3::new(2.0, 4.0, 6.0);
        assert!(u.div_assign_checked(2.0).is_none());
        assert_eq!(u, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_sum_and_zero() {
        let total: Vector3 = vec![Vector3::X_HAT, Vector3::Y_HAT, Vector3::Z_HAT]
            .into_iter()
            .sum();
        assert_eq!(total, Vector3::new(1.0, 1.0, 1.0));
        assert!(Vector3::zero().is_zero());
        assert!(!Vector3::X_HAT.is_zero());
    }
}
