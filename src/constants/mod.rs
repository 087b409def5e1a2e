//! Constants module for vector calculations

// Angles
/// Pi, used for azimuthal wrapping
pub const PI: f64 = std::f64::consts::PI;
/// Two pi for a full turn
pub const TWOPI: f64 = 2.0 * PI;

// Sentinels
/// Finite stand-in for an infinite pseudorapidity or cylindrical z
pub const ETA_INFINITY: f64 = 1.0e72;

// Tolerance
/// Number of machine-epsilon ticks in the default proximity tolerance
pub const TOLERANCE_TICKS: f64 = 100.0;
/// Double precision machine epsilon, truncated as in the classic vector libraries
pub const MACHINE_EPSILON: f64 = 2.22045e-16;
/// Process-wide relative tolerance used by proximity comparisons
pub const TOLERANCE: f64 = TOLERANCE_TICKS * MACHINE_EPSILON;

// Component indices
/// Index of the X component
pub const X: usize = 0;
/// Index of the Y component
pub const Y: usize = 1;
/// Index of the Z component
pub const Z: usize = 2;
