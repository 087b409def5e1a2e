//! Coordinate-system mutators for `Vector3`
//!
//! Setters that rewrite the Cartesian components from a spherical,
//! cylindrical or pseudorapidity description. The eta and cylindrical-theta
//! setters keep part of the current geometry fixed (radius, azimuth or
//! transverse distance), which is undefined for a zero vector and partly
//! undefined for a vector on the Z axis; those cases follow a fixed fallback
//! and return the [`Diagnostic`] that was reported.

use super::vector3::Vector3;
use crate::constants::{ETA_INFINITY, PI};
use crate::diagnostics::{report, Diagnostic};

/// Polar angle corresponding to a pseudorapidity
fn eta_to_theta(eta: f64) -> f64 {
    2.0 * (-eta).exp().atan()
}

impl Vector3 {
    /// Creates a vector from spherical coordinates
    ///
    /// # Arguments
    ///
    /// * `r` - Magnitude
    /// * `theta` - Polar angle from +Z in radians
    /// * `phi` - Azimuthal angle in radians
    pub fn from_r_theta_phi(r: f64, theta: f64, phi: f64) -> Self {
        let mut v = Vector3::zeros();
        v.set_r_theta_phi(r, theta, phi);
        v
    }

    /// Creates a vector from cylindrical coordinates
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// let v = Vector3::from_rho_phi_z(2.0, 0.0, -1.0);
    /// assert_eq!(v, Vector3::new(2.0, 0.0, -1.0));
    /// ```
    pub fn from_rho_phi_z(rho: f64, phi: f64, z: f64) -> Self {
        let mut v = Vector3::zeros();
        v.set_rho_phi_z(rho, phi, z);
        v
    }

    pub fn set_r_theta_phi(&mut self, r: f64, theta: f64, phi: f64) {
        let (sin_theta, cos_theta) = theta.sin_cos();
        self.x = r * sin_theta * phi.cos();
        self.y = r * sin_theta * phi.sin();
        self.z = r * cos_theta;
    }

    pub fn set_r_eta_phi(&mut self, r: f64, eta: f64, phi: f64) {
        self.set_r_theta_phi(r, eta_to_theta(eta), phi);
    }

    pub fn set_rho_phi_z(&mut self, rho: f64, phi: f64, z: f64) {
        self.x = rho * phi.cos();
        self.y = rho * phi.sin();
        self.z = z;
    }

    /// Sets the azimuth, keeping the transverse distance and z
    pub fn set_phi(&mut self, phi: f64) {
        let xy = self.perp();
        self.x = xy * phi.cos();
        self.y = xy * phi.sin();
    }

    /// Sets the polar angle, keeping the magnitude and azimuth
    pub fn set_theta(&mut self, theta: f64) {
        let ma = self.mag();
        let ph = self.phi();
        self.set_r_theta_phi(ma, theta, ph);
    }

    /// Sets the transverse distance, keeping the azimuth and z
    ///
    /// A vector on the Z axis has no azimuth and is left unchanged.
    pub fn set_perp(&mut self, rho: f64) {
        let p = self.perp();
        if p != 0.0 {
            self.x *= rho / p;
            self.y *= rho / p;
        }
    }

    /// Sets the pseudorapidity, keeping the magnitude and azimuth
    ///
    /// The zero vector is left unchanged ([`Diagnostic::EtaOfZeroVector`]).
    /// A vector on the Z axis has no azimuth: the new direction uses
    /// `phi = 0` and radius `|z|` ([`Diagnostic::EtaAlongZAxis`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    ///
    /// let mut v = Vector3::new(3.0, 4.0, 0.0);
    /// assert!(v.set_eta(1.5).is_none());
    /// assert!((v.eta() - 1.5).abs() < 1e-12);
    /// assert!((v.mag() - 5.0).abs() < 1e-12);
    /// ```
    pub fn set_eta(&mut self, eta: f64) -> Option<Diagnostic> {
        let mut diagnostic = None;
        let (r, phi) = if self.x == 0.0 && self.y == 0.0 {
            if self.z == 0.0 {
                return Some(report(Diagnostic::EtaOfZeroVector));
            }
            diagnostic = Some(report(Diagnostic::EtaAlongZAxis));
            (self.z.abs(), 0.0)
        } else {
            (self.mag(), self.phi())
        };

        let tan_half_theta = (-eta).exp();
        let tan2 = tan_half_theta * tan_half_theta;
        let cos_theta = (1.0 - tan2) / (1.0 + tan2);
        self.z = r * cos_theta;
        let rho = r * (1.0 - cos_theta * cos_theta).sqrt();
        self.y = rho * phi.sin();
        self.x = rho * phi.cos();
        diagnostic
    }

    /// Sets the polar angle while keeping the cylindrical rho and phi fixed
    ///
    /// Only z changes for an off-axis vector: `z = rho / tan(theta)`.
    ///
    /// # Degenerate cases
    ///
    /// - zero vector: unchanged, [`Diagnostic::CylThetaOfZeroVector`]
    /// - on the Z axis with `theta` exactly 0 or π: z becomes `±|z|`
    /// - on the Z axis with any other `theta`: becomes the zero vector,
    ///   [`Diagnostic::CylThetaAlongZAxis`]
    /// - `theta` outside `[0, π]`: [`Diagnostic::CylThetaOutOfRange`], the
    ///   value is still used
    /// - off-axis with `theta` exactly 0 or π: z becomes `±ETA_INFINITY`,
    ///   x and y untouched, [`Diagnostic::CylThetaInfiniteZ`]
    pub fn set_cyl_theta(&mut self, theta: f64) -> Option<Diagnostic> {
        if self.x == 0.0 && self.y == 0.0 {
            if self.z == 0.0 {
                return Some(report(Diagnostic::CylThetaOfZeroVector));
            }
            if theta == 0.0 {
                self.z = self.z.abs();
                return None;
            }
            if theta == PI {
                self.z = -self.z.abs();
                return None;
            }
            self.z = 0.0;
            return Some(report(Diagnostic::CylThetaAlongZAxis));
        }

        let mut diagnostic = None;
        if !(0.0..=PI).contains(&theta) {
            diagnostic = Some(report(Diagnostic::CylThetaOutOfRange));
        }

        let phi = self.phi();
        let rho = self.rho();
        if theta == 0.0 || theta == PI {
            self.z = if theta == 0.0 { ETA_INFINITY } else { -ETA_INFINITY };
            return Some(report(Diagnostic::CylThetaInfiniteZ));
        }
        self.z = rho / theta.tan();
        self.y = rho * phi.sin();
        self.x = rho * phi.cos();
        diagnostic
    }

    /// Sets the pseudorapidity while keeping the cylindrical rho and phi fixed
    ///
    /// Same policy as [`set_cyl_theta`](Self::set_cyl_theta) after converting
    /// with `theta = 2 atan(exp(-eta))`, reporting
    /// [`Diagnostic::CylEtaOfZeroVector`] and [`Diagnostic::CylEtaAlongZAxis`].
    pub fn set_cyl_eta(&mut self, eta: f64) -> Option<Diagnostic> {
        let theta = eta_to_theta(eta);

        if self.x == 0.0 && self.y == 0.0 {
            if self.z == 0.0 {
                return Some(report(Diagnostic::CylEtaOfZeroVector));
            }
            if theta == 0.0 {
                self.z = self.z.abs();
                return None;
            }
            if theta == PI {
                self.z = -self.z.abs();
                return None;
            }
            self.z = 0.0;
            return Some(report(Diagnostic::CylEtaAlongZAxis));
        }

        let phi = self.phi();
        let rho = self.rho();
        self.z = rho / theta.tan();
        self.y = rho * phi.sin();
        self.x = rho * phi.cos();
        None
    }
}
