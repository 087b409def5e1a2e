//! # Three-Vector Module
//!
//! This module provides the `Vector3` value type: three `f64` components used
//! for particle momenta, positions and directions in kinematic calculations.
//!
//! ## Coordinate Conventions
//!
//! The vector is stored in a right-handed Cartesian frame. The derived views
//! follow the usual collider conventions:
//! - **phi**: azimuthal angle in the XY plane, measured from +X toward +Y, in `(-π, π]`
//! - **theta**: polar angle measured from +Z, in `[0, π]`
//! - **rho / perp**: radial distance from the Z axis
//! - **eta**: pseudorapidity, `-ln(tan(theta / 2))`
//!
//! ## Degenerate Input
//!
//! Operations never panic on numeric input. Where the geometry is singular
//! (zero vectors, vectors on the Z axis, division by zero) each method follows
//! a fixed fallback and reports a [`Diagnostic`] through
//! [`report`](crate::diagnostics::report). Pseudorapidity along the Z axis
//! uses the finite sentinel [`ETA_INFINITY`] rather than IEEE infinity.
//!
//! ## Examples
//!
//! ```rust
//! use threevector::Vector3;
//!
//! let mut p = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(p.mag(), 5.0);
//! assert_eq!(p.eta(), 0.0);
//!
//! p.rotate_z(std::f64::consts::PI);
//! assert!((p.x + 3.0).abs() < 1e-15);
//! ```

use crate::constants::{ETA_INFINITY, PI, TOLERANCE, TWOPI, X, Y, Z};
use crate::diagnostics::{report, Diagnostic};
use nalgebra::{Rotation3, Unit};
use std::ops::Index;

/// Read-only cell handed out by `Index` for an out-of-range component
static OUT_OF_RANGE: f64 = 0.0;

/// Three-component Euclidean vector
///
/// A plain `Copy` value. Any triple of `f64` values is a valid state,
/// including NaN and infinities; nothing is normalized on construction.
///
/// # Mutation
///
/// Rotations and coordinate-system setters work in place:
/// - `rotate_*` return `&mut Self` so calls can be chained
/// - setters with degenerate cases return `Option<Diagnostic>`
///
/// # Examples
///
/// ```rust
/// use threevector::Vector3;
///
/// let mut v = Vector3::new(1.0, 0.0, 0.0);
/// v.rotate_z(std::f64::consts::FRAC_PI_2).rotate_x(std::f64::consts::FRAC_PI_2);
/// assert!((v.z - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3 {
    /// Unit vector along +X
    pub const X_HAT: Vector3 = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
    /// Unit vector along +Y
    pub const Y_HAT: Vector3 = Vector3 { x: 0.0, y: 1.0, z: 0.0 };
    /// Unit vector along +Z
    pub const Z_HAT: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 1.0 };

    /// Creates a new vector
    ///
    /// # Arguments
    ///
    /// * `x` - X-component
    /// * `y` - Y-component
    /// * `z` - Z-component
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector `(0, 0, 0)`
    pub fn zeros() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    /// The process-wide relative tolerance used by [`is_near_default`](Self::is_near_default)
    pub fn tolerance() -> f64 {
        TOLERANCE
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Overwrites all three components
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Returns the component at `index` (0 = X, 1 = Y, 2 = Z)
    ///
    /// Any other index reports [`Diagnostic::BadIndex`] and yields `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.get(2), 3.0);
    /// assert_eq!(v.get(5), 0.0);
    /// ```
    pub fn get(&self, index: usize) -> f64 {
        match index {
            X => self.x,
            Y => self.y,
            Z => self.z,
            _ => {
                report(Diagnostic::BadIndex(index));
                0.0
            }
        }
    }

    /// Mutable slot for the component at `index`
    ///
    /// An out-of-range index reports [`Diagnostic::BadIndex`] and returns it
    /// as the error; the vector is not touched.
    pub fn component_mut(&mut self, index: usize) -> Result<&mut f64, Diagnostic> {
        match index {
            X => Ok(&mut self.x),
            Y => Ok(&mut self.y),
            Z => Ok(&mut self.z),
            _ => Err(report(Diagnostic::BadIndex(index))),
        }
    }

    /// Writes the component at `index`; out-of-range writes are dropped
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::{Diagnostic, Vector3};
    ///
    /// let mut v = Vector3::new(1.0, 2.0, 3.0);
    /// assert!(v.set_component(1, 7.0).is_ok());
    /// assert_eq!(v.set_component(5, 9.0), Err(Diagnostic::BadIndex(5)));
    /// assert_eq!(v, Vector3::new(1.0, 7.0, 3.0));
    /// ```
    pub fn set_component(&mut self, index: usize, value: f64) -> Result<(), Diagnostic> {
        *self.component_mut(index)? = value;
        Ok(())
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }

    /// Squared magnitude, `x² + y² + z²`
    pub fn mag2(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (Euclidean norm)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).mag(), 5.0);
    /// assert_eq!(Vector3::zeros().mag(), 0.0);
    /// ```
    pub fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }

    /// Spherical radius; same as [`mag`](Self::mag)
    pub fn r(&self) -> f64 {
        self.mag()
    }

    /// Squared distance from the Z axis
    pub fn perp2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Distance from the Z axis (transverse component)
    pub fn perp(&self) -> f64 {
        self.perp2().sqrt()
    }

    /// Cylindrical radius; same as [`perp`](Self::perp)
    pub fn rho(&self) -> f64 {
        self.perp()
    }

    /// Azimuthal angle, 0 for a vector on the Z axis
    pub fn phi(&self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x)
        }
    }

    /// Polar angle from +Z, 0 for the zero vector
    pub fn theta(&self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 && self.z == 0.0 {
            0.0
        } else {
            self.perp().atan2(self.z)
        }
    }

    /// Cosine of the polar angle, 1 for the zero vector
    pub fn cos_polar(&self) -> f64 {
        let ptot = self.mag();
        if ptot == 0.0 {
            1.0
        } else {
            self.z / ptot
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// assert_eq!(Vector3::X_HAT.cross(&Vector3::Y_HAT), Vector3::Z_HAT);
    /// ```
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Unit vector in the same direction; the zero vector is returned as is
    pub fn unit(&self) -> Vector3 {
        let tot = self.mag2();
        if tot > 0.0 {
            *self * (1.0 / tot.sqrt())
        } else {
            *self
        }
    }

    /// A vector orthogonal to this one
    ///
    /// Built from the two largest components, so it is only zero when `self` is.
    pub fn orthogonal(&self) -> Vector3 {
        let xx = self.x.abs();
        let yy = self.y.abs();
        let zz = self.z.abs();
        if xx < yy {
            if xx < zz {
                Vector3::new(0.0, self.z, -self.y)
            } else {
                Vector3::new(self.y, -self.x, 0.0)
            }
        } else if yy < zz {
            Vector3::new(-self.z, 0.0, self.x)
        } else {
            Vector3::new(self.y, -self.x, 0.0)
        }
    }

    /// Rescales to magnitude `new_mag`, keeping the direction
    ///
    /// The exact zero vector has no direction: it is left unchanged and
    /// [`Diagnostic::ZeroVectorStretch`] is reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// let mut v = Vector3::new(3.0, 4.0, 0.0);
    /// assert!(v.set_mag(10.0).is_none());
    /// assert_eq!(v, Vector3::new(6.0, 8.0, 0.0));
    /// ```
    pub fn set_mag(&mut self, new_mag: f64) -> Option<Diagnostic> {
        let current = self.mag();
        if current == 0.0 {
            return Some(report(Diagnostic::ZeroVectorStretch));
        }
        let factor = new_mag / current;
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        None
    }

    /// Rotates by `phi` radians about the X axis
    pub fn rotate_x(&mut self, phi: f64) -> &mut Self {
        let (sinphi, cosphi) = phi.sin_cos();
        let ty = self.y * cosphi - self.z * sinphi;
        self.z = self.z * cosphi + self.y * sinphi;
        self.y = ty;
        self
    }

    /// Rotates by `phi` radians about the Y axis
    pub fn rotate_y(&mut self, phi: f64) -> &mut Self {
        let (sinphi, cosphi) = phi.sin_cos();
        let tz = self.z * cosphi - self.x * sinphi;
        self.x = self.x * cosphi + self.z * sinphi;
        self.z = tz;
        self
    }

    /// Rotates by `phi` radians about the Z axis
    pub fn rotate_z(&mut self, phi: f64) -> &mut Self {
        let (sinphi, cosphi) = phi.sin_cos();
        let tx = self.x * cosphi - self.y * sinphi;
        self.y = self.y * cosphi + self.x * sinphi;
        self.x = tx;
        self
    }

    /// Applies the rotation that carries +Z onto `new_uz`
    ///
    /// `new_uz` must be a unit vector; this is not checked. When it lies on
    /// the Z axis the general formula is singular: for `-Z` the vector is
    /// flipped about Y (`x` and `z` negated), for `+Z` it is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// let mut v = Vector3::Z_HAT;
    /// v.rotate_uz(&Vector3::X_HAT);
    /// assert!((v.x - 1.0).abs() < 1e-15);
    /// assert!(v.z.abs() < 1e-15);
    /// ```
    pub fn rotate_uz(&mut self, new_uz: &Vector3) -> &mut Self {
        let (u1, u2, u3) = (new_uz.x, new_uz.y, new_uz.z);
        let up = u1 * u1 + u2 * u2;

        if up > 0.0 {
            let up = up.sqrt();
            let (px, py, pz) = (self.x, self.y, self.z);
            self.x = (u1 * u3 * px - u2 * py) / up + u1 * pz;
            self.y = (u2 * u3 * px + u1 * py) / up + u2 * pz;
            self.z = -up * px + u3 * pz;
        } else if u3 < 0.0 {
            // phi = 0, theta = pi
            self.x = -self.x;
            self.z = -self.z;
        }
        self
    }

    /// Rotates by `delta` radians about an arbitrary `axis`
    ///
    /// A zero-length axis defines no rotation: the vector is left unchanged
    /// and [`Diagnostic::ZeroRotationAxis`] is reported.
    pub fn rotate(&mut self, axis: &Vector3, delta: f64) -> Option<Diagnostic> {
        if axis.mag2() == 0.0 {
            return Some(report(Diagnostic::ZeroRotationAxis));
        }
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis.to_vector3()), delta);
        *self = Vector3::from_vector3(rotation * self.to_vector3());
        None
    }

    /// Pseudorapidity, `0.5 ln((m + z) / (m - z))`
    ///
    /// Returns 0 for the zero vector and `±ETA_INFINITY` (1.0e72) for a
    /// vector lying exactly along ±Z.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// assert_eq!(Vector3::new(0.0, 0.0, 5.0).pseudo_rapidity(), 1.0e72);
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).pseudo_rapidity(), 0.0);
    /// ```
    pub fn pseudo_rapidity(&self) -> f64 {
        let m = self.mag();
        if m == 0.0 {
            return 0.0;
        }
        if m == self.z {
            return ETA_INFINITY;
        }
        if m == -self.z {
            return -ETA_INFINITY;
        }
        0.5 * ((m + self.z) / (m - self.z)).ln()
    }

    /// Short name for [`pseudo_rapidity`](Self::pseudo_rapidity)
    pub fn eta(&self) -> f64 {
        self.pseudo_rapidity()
    }

    /// Signed azimuthal difference `other.phi() - self.phi()`, wrapped into `(-π, π]`
    pub fn delta_phi(&self, other: &Vector3) -> f64 {
        let dphi = other.phi() - self.phi();
        if dphi > PI {
            dphi - TWOPI
        } else if dphi <= -PI {
            dphi + TWOPI
        } else {
            dphi
        }
    }

    /// Distance in the (eta, phi) plane
    pub fn delta_r(&self, other: &Vector3) -> f64 {
        let a = self.eta() - other.eta();
        let b = self.delta_phi(other);
        (a * a + b * b).sqrt()
    }

    /// Cosine of the angle between two vectors
    ///
    /// Returns 0 when either vector is zero. The ratio is clamped to `[-1, 1]`
    /// to absorb rounding.
    pub fn cos_theta(&self, other: &Vector3) -> f64 {
        let ptot2 = self.mag2() * other.mag2();
        if ptot2 <= 0.0 {
            return 0.0;
        }
        (self.dot(other) / ptot2.sqrt()).clamp(-1.0, 1.0)
    }

    /// Squared cosine of the angle between two vectors
    ///
    /// Computed as `(a·b / |a|²) (a·b / |b|²)` so that vectors whose squares
    /// are representable but whose fourth powers are not still work. Returns 1
    /// when either vector is zero. Only the upper bound is clamped.
    pub fn cos2_theta(&self, other: &Vector3) -> f64 {
        let ptot2 = self.mag2();
        let qtot2 = other.mag2();
        if ptot2 == 0.0 || qtot2 == 0.0 {
            return 1.0;
        }
        let pdq = self.dot(other);
        let arg = (pdq / ptot2) * (pdq / qtot2);
        if arg > 1.0 {
            1.0
        } else {
            arg
        }
    }

    /// Angle between two vectors in radians, `[0, π]`
    pub fn angle(&self, other: &Vector3) -> f64 {
        self.cos_theta(other).acos()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    /// Same policy as [`Vector3::get`]: bad indices read as `0.0`
    fn index(&self, index: usize) -> &f64 {
        match index {
            X => &self.x,
            Y => &self.y,
            Z => &self.z,
            _ => {
                report(Diagnostic::BadIndex(index));
                &OUT_OF_RANGE
            }
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(components: [f64; 3]) -> Self {
        Vector3::new(components[0], components[1], components[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(vec: nalgebra::Vector3<f64>) -> Self {
        Vector3::from_vector3(vec)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.to_vector3()
    }
}
