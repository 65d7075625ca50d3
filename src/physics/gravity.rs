use crate::constants::{G, M_EARTH};
use nalgebra as na;

/// Inverse-square point-mass gravity in the launch inertial frame.
pub fn gravity_acceleration(position: &na::Vector3<f64>) -> na::Vector3<f64> {
    let r = position.magnitude();
    -position * (G * M_EARTH) / (r * r * r)
}
