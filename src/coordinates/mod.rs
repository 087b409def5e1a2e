pub mod cylindrical;
pub mod ops;
pub mod proximity;
pub mod text;
pub mod vector3;

pub use vector3::Vector3;
