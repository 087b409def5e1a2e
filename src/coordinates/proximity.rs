//! Scale-relative proximity tests for `Vector3`
//!
//! None of these compare against an absolute distance. Closeness is measured
//! relative to the dot product of the two vectors, so the same epsilon works
//! for momenta in MeV and positions in km.

use super::vector3::Vector3;
use crate::constants::TOLERANCE;
use std::cmp::Ordering;

/// Dot products at or above this magnitude are rescaled before squaring
fn too_big() -> f64 {
    2f64.powi(507)
}

/// Scale factor applied to both vectors when the dot product is too big
fn rescale() -> f64 {
    2f64.powi(-507)
}

impl Vector3 {
    /// True when `|self - other|² <= epsilon² (self · other)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// let a = Vector3::new(100.0, 0.0, 0.0);
    /// let b = Vector3::new(100.5, 0.0, 0.0);
    /// assert!(a.is_near(&b, 0.01));
    /// assert!(!a.is_near(&b, 0.001));
    /// ```
    pub fn is_near(&self, other: &Vector3, epsilon: f64) -> bool {
        let limit = self.dot(other) * epsilon * epsilon;
        (*self - *other).mag2() <= limit
    }

    /// [`is_near`](Self::is_near) with the process-wide tolerance
    pub fn is_near_default(&self, other: &Vector3) -> bool {
        self.is_near(other, TOLERANCE)
    }

    /// Normalized distance `sqrt(|self - other|² / (self · other))`, saturating at 1
    ///
    /// Two zero vectors are 0 apart. Any pair whose dot product is not
    /// positive, or whose squared distance reaches the dot product, is 1.
    pub fn how_near(&self, other: &Vector3) -> f64 {
        let d = (*self - *other).mag2();
        let vdv = self.dot(other);
        if vdv > 0.0 && d < vdv {
            (d / vdv).sqrt()
        } else if vdv == 0.0 && d == 0.0 {
            0.0
        } else {
            1.0
        }
    }

    /// `|self × other| / |self · other|`, saturating at 1
    pub fn how_parallel(&self, other: &Vector3) -> f64 {
        let v1v2 = self.dot(other).abs();
        if v1v2 == 0.0 {
            return if self.mag2() == 0.0 && other.mag2() == 0.0 {
                0.0
            } else {
                1.0
            };
        }
        let v1xv2 = self.cross(other);
        if v1xv2.mag2() >= v1v2 * v1v2 {
            1.0
        } else {
            v1xv2.mag() / v1v2
        }
    }

    /// True when `|self × other| <= epsilon |self · other|`
    ///
    /// Parallel and anti-parallel vectors both qualify. Two zero vectors are
    /// parallel; a zero vector and a non-zero one are not.
    pub fn is_parallel(&self, other: &Vector3, epsilon: f64) -> bool {
        let v1v2 = self.dot(other).abs();
        if v1v2 == 0.0 {
            return self.mag2() == 0.0 && other.mag2() == 0.0;
        }
        if v1v2 >= too_big() {
            let scale = rescale();
            let s1xs2 = (*self * scale).cross(&(*other * scale));
            let limit = v1v2 * scale * scale;
            return s1xs2.mag2() <= epsilon * epsilon * limit * limit;
        }
        self.cross(other).mag2() <= epsilon * epsilon * v1v2 * v1v2
    }

    /// `|self · other| / |self × other|`, saturating at 1
    pub fn how_orthogonal(&self, other: &Vector3) -> f64 {
        let v1v2 = self.dot(other).abs();
        if v1v2 == 0.0 {
            return 0.0;
        }
        let abscross = self.cross(other).mag();
        if v1v2 >= abscross {
            1.0
        } else {
            v1v2 / abscross
        }
    }

    /// True when `|self · other| <= epsilon |self × other|`
    pub fn is_orthogonal(&self, other: &Vector3, epsilon: f64) -> bool {
        let v1v2 = self.dot(other).abs();
        if v1v2 >= too_big() {
            let scale = rescale();
            let x2 = (*self * scale).cross(&(*other * scale)).mag2();
            let y2 = v1v2 * scale * scale;
            return y2 * y2 <= epsilon * epsilon * x2;
        }
        let eps_v1xv2 = self.cross(&(*other * epsilon));
        v1v2 * v1v2 <= eps_v1xv2.mag2()
    }

    /// Lexicographic ordering on z, then y, then x
    ///
    /// Components that do not compare (NaN) count as equal.
    pub fn compare(&self, other: &Vector3) -> Ordering {
        [(self.z, other.z), (self.y, other.y), (self.x, other.x)]
            .into_iter()
            .map(|(a, b)| a.partial_cmp(&b).unwrap_or(Ordering::Equal))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}
